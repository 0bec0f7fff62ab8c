use crate::PaletteSizeFromIntError;
use core::{error::Error, fmt};

/// The error returned when the length of a value or input is not in the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthOutOfRange {
    /// The length of the provided value.
    len: usize,
    /// The minimum supported length.
    min: u32,
    /// The maximum supported length.
    max: u32,
}

impl LengthOutOfRange {
    #[inline]
    pub(crate) const fn check_u32<T>(slice: &[T], min: u32, max: u32) -> Result<u32, Self> {
        let len = slice.len();
        #[allow(clippy::cast_possible_truncation)]
        if min as usize <= len && len <= max as usize {
            Ok(len as u32)
        } else {
            Err(Self { len, min, max })
        }
    }

    #[inline]
    pub(crate) const fn check_u16<T>(slice: &[T], min: u16, max: u16) -> Result<u16, Self> {
        let len = slice.len();
        #[allow(clippy::cast_possible_truncation)]
        if min as usize <= len && len <= max as usize {
            Ok(len as u16)
        } else {
            Err(Self { len, min: min as u32, max: max as u32 })
        }
    }
}

impl fmt::Display for LengthOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { len, min, max } = *self;
        write!(
            f,
            "got an input with length {len} which is not in the supported range of {min}..={max}",
        )
    }
}

impl Error for LengthOutOfRange {}

/// The error returned when an input cannot be quantized.
///
/// Quantization has two preconditions: the pixel slice must be non-empty (and no longer
/// than `u32::MAX`, so pixel counts fit in a `u32`), and the requested number of colors
/// must be in the range `2..=256` specified by [`PaletteSize`](crate::PaletteSize).
/// Inputs violating either are reported through this error rather than panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantizeError {
    /// The pixel slice length is out of range.
    Input(LengthOutOfRange),
    /// The requested number of colors is out of range.
    MaxColors(PaletteSizeFromIntError),
}

impl From<LengthOutOfRange> for QuantizeError {
    #[inline]
    fn from(err: LengthOutOfRange) -> Self {
        Self::Input(err)
    }
}

impl From<PaletteSizeFromIntError> for QuantizeError {
    #[inline]
    fn from(err: PaletteSizeFromIntError) -> Self {
        Self::MaxColors(err)
    }
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(_) => f.write_str("the input pixels cannot be quantized"),
            Self::MaxColors(_) => f.write_str("the requested number of colors is not supported"),
        }
    }
}

impl Error for QuantizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::MaxColors(err) => Some(err),
        }
    }
}
