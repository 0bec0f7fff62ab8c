use crate::{Palette, PaletteBuf, histogram::bin, quantize::ColorBox};
use alloc::vec::Vec;
use palette::{Srgb, cast};

/// The result of quantization: a palette and the mapping from arbitrary colors
/// to their palette representatives.
///
/// Palette entries are ordered by how much of the input their box covers, so
/// the first entry is the dominant color. A color maps to the entry whose box
/// holds its histogram bin, and colors outside every box, which can only be
/// colors absent from the quantized input, fall back to the nearest palette
/// entry by Euclidean distance in RGB space.
///
/// Created by [`quantize`](crate::quantize).
#[derive(Clone, Debug)]
pub struct ColorMap {
    /// The box of histogram bins behind each palette entry.
    boxes: Vec<ColorBox>,
    /// The color palette.
    palette: PaletteBuf<Srgb<u8>>,
}

impl ColorMap {
    /// `boxes` and `palette` pair up index-wise and arrive ordered by rank.
    pub(crate) fn new(boxes: Vec<ColorBox>, palette: PaletteBuf<Srgb<u8>>) -> Self {
        debug_assert!(boxes.len() == palette.len());
        Self { boxes, palette }
    }

    /// Returns the [`Palette`] of colors of a [`ColorMap`], most prominent first.
    #[inline]
    pub fn palette(&self) -> &Palette<Srgb<u8>> {
        &self.palette
    }

    /// Consume a [`ColorMap`] and return the underlying [`PaletteBuf`].
    #[must_use]
    #[inline]
    pub fn into_palette(self) -> PaletteBuf<Srgb<u8>> {
        self.palette
    }

    /// The palette color covering the largest share of the quantized input.
    ///
    /// This is the first palette entry.
    #[must_use]
    #[inline]
    pub fn dominant(&self) -> Srgb<u8> {
        self.palette[0u8]
    }

    /// The number of input pixels behind each palette entry, index-aligned with
    /// [`palette`](ColorMap::palette).
    #[must_use]
    pub fn counts(&self) -> PaletteBuf<u32> {
        PaletteBuf::new_unchecked(self.boxes.iter().map(|vbox| vbox.count).collect())
    }

    /// Map a color to its palette representative.
    #[must_use]
    pub fn map(&self, color: Srgb<u8>) -> Srgb<u8> {
        let target = bin(cast::into_array(color));
        self.boxes
            .iter()
            .zip(&self.palette)
            .find(|(vbox, _)| vbox.contains(target))
            .map_or_else(|| self.nearest(color), |(_, &entry)| entry)
    }

    /// The palette color nearest to `color` by Euclidean distance in RGB space.
    ///
    /// Distances tie toward the more prominent palette entry.
    #[must_use]
    pub fn nearest(&self, color: Srgb<u8>) -> Srgb<u8> {
        // a palette is never empty, and the first of equally near entries wins
        #[allow(clippy::expect_used)]
        *self
            .palette
            .iter()
            .min_by_key(|&&entry| distance_squared(color, entry))
            .expect("at least one palette color")
    }

    /// Mutate a color slice by mapping each color to its palette representative.
    pub fn map_slice_in_place(&self, colors: &mut [Srgb<u8>]) {
        for color in colors {
            *color = self.map(*color);
        }
    }
}

/// Squared Euclidean distance in RGB space, which orders candidates the same
/// way the true distance does.
fn distance_squared(a: Srgb<u8>, b: Srgb<u8>) -> u32 {
    let a = cast::into_array(a).map(i32::from);
    let b = cast::into_array(b).map(i32::from);
    a.into_iter()
        .zip(b)
        .map(|(a, b)| (a - b).unsigned_abs().pow(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vbox(min: [u8; 3], max: [u8; 3], count: u32) -> ColorBox {
        ColorBox { min, max, count }
    }

    fn two_entry_map() -> ColorMap {
        ColorMap::new(
            alloc::vec![vbox([0, 0, 0], [1, 1, 1], 7), vbox([2, 2, 2], [3, 3, 3], 3)],
            PaletteBuf::from_array([Srgb::new(4, 4, 4), Srgb::new(20, 20, 20)]),
        )
    }

    #[test]
    fn containment_beats_distance() {
        let map = two_entry_map();
        // (14, 14, 14) sits in the first box but is nearer to the second color.
        assert_eq!(map.nearest(Srgb::new(14, 14, 14)), Srgb::new(20, 20, 20));
        assert_eq!(map.map(Srgb::new(14, 14, 14)), Srgb::new(4, 4, 4));
    }

    #[test]
    fn uncontained_colors_fall_back_to_the_nearest_entry() {
        let map = two_entry_map();
        assert_eq!(map.map(Srgb::new(100, 100, 100)), Srgb::new(20, 20, 20));
        assert_eq!(map.map(Srgb::new(255, 255, 255)), Srgb::new(20, 20, 20));
    }

    #[test]
    fn nearest_ties_toward_the_more_prominent_entry() {
        let map = ColorMap::new(
            alloc::vec![vbox([5, 5, 5], [6, 6, 6], 2), vbox([7, 7, 7], [8, 8, 8], 1)],
            PaletteBuf::from_array([Srgb::new(10, 0, 0), Srgb::new(30, 0, 0)]),
        );
        // (20, 0, 0) is exactly 10 away from both entries.
        assert_eq!(map.nearest(Srgb::new(20, 0, 0)), Srgb::new(10, 0, 0));
        assert_eq!(map.map(Srgb::new(20, 0, 0)), Srgb::new(10, 0, 0));
    }

    #[test]
    fn counts_align_with_the_palette() {
        let map = two_entry_map();
        assert_eq!(map.counts(), [7, 3]);
        assert_eq!(map.dominant(), Srgb::new(4, 4, 4));
    }

    #[test]
    fn map_slice_in_place_rewrites_every_color() {
        let map = two_entry_map();
        let mut colors = [Srgb::new(0, 0, 0), Srgb::new(16, 16, 16), Srgb::new(100, 100, 100)];
        map.map_slice_in_place(&mut colors);
        assert_eq!(
            colors,
            [Srgb::new(4, 4, 4), Srgb::new(20, 20, 20), Srgb::new(20, 20, 20)]
        );
    }
}
