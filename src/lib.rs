//! A library for reducing images to small color palettes with modified median
//! cut quantization (MMCQ).
//!
//! [`quantize`] bins a slice of 8-bit RGB pixels into a coarse histogram over
//! the color cube and repeatedly splits the most prominent box of bins near
//! the median of its widest axis. The resulting [`ColorMap`] exposes the
//! derived palette, dominant color first, and maps any color to its palette
//! representative.
//!
//! # Examples
//!
//! ```
//! # use mmcq::{QuantizeError, quantize};
//! # use palette::Srgb;
//! # fn main() -> Result<(), QuantizeError> {
//! let pixels = vec![
//!     Srgb::new(190u8, 197, 190),
//!     Srgb::new(202, 204, 200),
//!     Srgb::new(207, 214, 210),
//!     Srgb::new(211, 214, 211),
//!     Srgb::new(205, 207, 207),
//! ];
//!
//! let color_map = quantize(&pixels, 4)?;
//! assert_eq!(color_map.dominant(), Srgb::new(204, 204, 204));
//!
//! // Every input color maps onto the reduced palette.
//! let quantized = pixels.iter().map(|&color| color_map.map(color)).collect::<Vec<_>>();
//! assert!(quantized.iter().all(|color| color_map.palette().contains(color)));
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `std` (default): disable for `no_std` environments with an allocator.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![warn(
    missing_docs,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::use_debug
)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

extern crate alloc;

mod color_map;
pub mod deps;
mod histogram;
mod quantize;
mod types;

pub use color_map::*;
pub use quantize::quantize;
pub use types::*;

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use palette::Srgb;

    fn lcg_colors(len: usize, mut state: u32) -> Vec<Srgb<u8>> {
        (0..len)
            .map(|_| {
                let mut next = || {
                    state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                    u8::try_from(state >> 24).unwrap()
                };
                Srgb::new(next(), next(), next())
            })
            .collect()
    }

    pub fn test_data_1024() -> Vec<Srgb<u8>> {
        lcg_colors(1024, 0x5EED_1234)
    }

    pub fn test_data_256() -> Vec<Srgb<u8>> {
        lcg_colors(256, 0xBADD_CAFE)
    }
}
