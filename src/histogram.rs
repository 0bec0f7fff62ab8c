//! A coarse histogram over the RGB cube with 32 bins per channel.

use alloc::boxed::Box;
use core::ops::{Index, IndexMut};
use palette::{Srgb, cast::AsArrays as _};

/// The number of significant bits kept per channel when binning colors.
pub(crate) const SIGBITS: u32 = 5;

/// The number of low bits discarded from each 8-bit channel.
pub(crate) const RSHIFT: u32 = 8 - SIGBITS;

/// The number of bins along each axis of the histogram.
pub(crate) const BINS: usize = 1 << SIGBITS;

/// The width of one bin in 8-bit channel units.
pub(crate) const MULT: u32 = 1 << RSHIFT;

/// Reduce an 8-bit color to its bin coordinates, each in `0..32`.
#[inline]
pub(crate) fn bin(color: [u8; 3]) -> [u8; 3] {
    color.map(|c| c >> RSHIFT)
}

/// Bin counts for every color in the reduced RGB cube.
///
/// This is the only pixel statistic the quantizer needs. The `32^3` grid of
/// `u32` counts is boxed, since it is too large to keep on the stack.
pub(crate) struct Histogram(Box<[[[u32; BINS]; BINS]; BINS]>);

impl Histogram {
    /// Create a new [`Histogram`] from zeroed memory.
    pub fn new() -> Self {
        Self(bytemuck::zeroed_box())
    }

    /// Count the given colors into their bins.
    pub fn add_colors(&mut self, colors: &[Srgb<u8>]) {
        for &color in colors.as_arrays() {
            self[bin(color)] += 1;
        }
    }
}

impl Index<[u8; 3]> for Histogram {
    type Output = u32;

    #[inline]
    fn index(&self, index: [u8; 3]) -> &Self::Output {
        let [i1, i2, i3] = index.map(usize::from);
        &self.0[i1][i2][i3]
    }
}

impl IndexMut<[u8; 3]> for Histogram {
    #[inline]
    fn index_mut(&mut self, index: [u8; 3]) -> &mut Self::Output {
        let [i1, i2, i3] = index.map(usize::from);
        &mut self.0[i1][i2][i3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    fn total(hist: &Histogram) -> u64 {
        hist.0
            .as_flattened()
            .as_flattened()
            .iter()
            .map(|&count| u64::from(count))
            .sum()
    }

    #[test]
    fn bin_discards_low_bits() {
        assert_eq!(bin([190, 197, 190]), [23, 24, 23]);
        assert_eq!(bin([0, 7, 8]), [0, 0, 1]);
        assert_eq!(bin([255, 255, 255]), [31, 31, 31]);
    }

    #[test]
    fn bin_total_equals_color_count() {
        let colors = test_data_1024();
        let mut hist = Histogram::new();
        hist.add_colors(&colors);
        assert_eq!(total(&hist), colors.len() as u64);
    }

    #[test]
    fn colors_in_the_same_bin_accumulate() {
        let mut hist = Histogram::new();
        hist.add_colors(&[
            Srgb::new(0, 0, 0),
            Srgb::new(7, 7, 7),
            Srgb::new(3, 0, 5),
            Srgb::new(8, 0, 0),
        ]);
        assert_eq!(hist[[0, 0, 0]], 3);
        assert_eq!(hist[[1, 0, 0]], 1);
    }
}
