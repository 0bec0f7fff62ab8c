use crate::histogram::{Histogram, MULT, RSHIFT, bin};
use palette::{Srgb, cast::AsArrays as _};

/// An axis-aligned box of histogram bins.
///
/// The corners are inclusive bin coordinates, so a box always spans at least one
/// bin along each axis. `count` is the number of pixels whose bins fall inside
/// the box and is fixed when the box is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColorBox {
    /// Inclusive lower corner in bin coordinates.
    pub min: [u8; 3],
    /// Inclusive upper corner in bin coordinates.
    pub max: [u8; 3],
    /// The number of pixels inside the box.
    pub count: u32,
}

impl ColorBox {
    /// The tightest box around the bins of the given colors.
    ///
    /// `count` must be the length of `colors`, already checked to fit in a `u32`.
    pub fn enclosing(colors: &[Srgb<u8>], count: u32) -> Self {
        debug_assert!(colors.len() == count as usize && count > 0);

        let mut min = [u8::MAX >> RSHIFT; 3];
        let mut max = [0; 3];
        for &color in colors.as_arrays() {
            for ((lo, hi), c) in min.iter_mut().zip(&mut max).zip(bin(color)) {
                *lo = (*lo).min(c);
                *hi = (*hi).max(c);
            }
        }

        Self { min, max, count }
    }

    /// The number of bins covered by the box.
    ///
    /// A cut can leave an empty box inverted along one axis, in which case the
    /// volume is zero.
    pub fn volume(&self) -> u32 {
        let [r0, g0, b0] = self.min;
        let [r1, g1, b1] = self.max;
        let side = |lo: u8, hi: u8| (u32::from(hi) + 1).saturating_sub(u32::from(lo));
        side(r0, r1) * side(g0, g1) * side(b0, b1)
    }

    /// Whether the given bin coordinates fall inside the box.
    pub fn contains(&self, bin: [u8; 3]) -> bool {
        let [r, g, b] = bin;
        let [r0, g0, b0] = self.min;
        let [r1, g1, b1] = self.max;
        r0 <= r && r <= r1 && g0 <= g && g <= g1 && b0 <= b && b <= b1
    }

    /// The population-weighted mean color of the box, with each pixel placed at
    /// the center of its bin. A box with no pixels falls back to its geometric
    /// center so that it still yields a usable color.
    pub fn average(&self, hist: &Histogram) -> Srgb<u8> {
        let [r0, g0, b0] = self.min;
        let [r1, g1, b1] = self.max;

        let mut total = 0u64;
        let mut sum = [0u64; 3];
        for r in r0..=r1 {
            for g in g0..=g1 {
                for b in b0..=b1 {
                    let count = u64::from(hist[[r, g, b]]);
                    total += count;
                    for (acc, c) in sum.iter_mut().zip([r, g, b]) {
                        *acc += count * u64::from(u32::from(c) * MULT + MULT / 2);
                    }
                }
            }
        }

        let channels = if total == 0 {
            [(r0, r1), (g0, g1), (b0, b1)]
                .map(|(lo, hi)| u64::from((u32::from(lo) + u32::from(hi) + 1) * MULT / 2))
        } else {
            sum.map(|acc| acc / total)
        };

        // Channel means are at most `31 * 8 + 4 = 252`. The center of an empty
        // inverted box can land one bin past the cube, so clamp before narrowing.
        #[allow(clippy::cast_possible_truncation)]
        let [r, g, b] = channels.map(|c| c.min(u64::from(u8::MAX)) as u8);
        Srgb::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> [Srgb<u8>; 5] {
        [
            [190, 197, 190],
            [202, 204, 200],
            [207, 214, 210],
            [211, 214, 211],
            [205, 207, 207],
        ]
        .map(|[r, g, b]| Srgb::new(r, g, b))
    }

    #[test]
    fn enclosing_is_tight() {
        let colors = colors();
        #[allow(clippy::cast_possible_truncation)]
        let vbox = ColorBox::enclosing(&colors, colors.len() as u32);
        assert_eq!(vbox.min, [23, 24, 23]);
        assert_eq!(vbox.max, [26, 26, 26]);
        assert_eq!(vbox.count, 5);
    }

    #[test]
    fn volume_counts_inclusive_bins() {
        let vbox = ColorBox { min: [23, 24, 23], max: [26, 26, 26], count: 5 };
        assert_eq!(vbox.volume(), 4 * 3 * 4);

        let single = ColorBox { min: [7, 7, 7], max: [7, 7, 7], count: 1 };
        assert_eq!(single.volume(), 1);
    }

    #[test]
    fn contains_includes_both_corners() {
        let vbox = ColorBox { min: [1, 2, 3], max: [4, 5, 6], count: 0 };
        assert!(vbox.contains([1, 2, 3]));
        assert!(vbox.contains([4, 5, 6]));
        assert!(vbox.contains([2, 3, 4]));
        assert!(!vbox.contains([0, 2, 3]));
        assert!(!vbox.contains([1, 6, 3]));
        assert!(!vbox.contains([1, 2, 7]));
    }

    #[test]
    fn average_weights_bin_centers_by_count() {
        let mut hist = Histogram::new();
        hist.add_colors(&[Srgb::new(200, 200, 200), Srgb::new(201, 202, 203)]);
        let vbox = ColorBox { min: [25, 25, 25], max: [25, 25, 25], count: 2 };
        assert_eq!(vbox.average(&hist), Srgb::new(204, 204, 204));

        // Two populated bins pull the mean between their centers.
        let mut hist = Histogram::new();
        hist.add_colors(&[Srgb::new(0, 0, 0), Srgb::new(0, 0, 0), Srgb::new(24, 0, 0)]);
        let vbox = ColorBox { min: [0, 0, 0], max: [3, 0, 0], count: 3 };
        // (2 * 4 + 1 * 28) / 3 = 12
        assert_eq!(vbox.average(&hist), Srgb::new(12, 4, 4));
    }

    #[test]
    fn average_of_empty_box_is_the_geometric_center() {
        let hist = Histogram::new();
        let vbox = ColorBox { min: [26, 25, 24], max: [26, 25, 24], count: 0 };
        assert_eq!(vbox.average(&hist), Srgb::new(212, 204, 196));

        let wide = ColorBox { min: [0, 0, 0], max: [31, 31, 31], count: 0 };
        assert_eq!(wide.average(&hist), Srgb::new(128, 128, 128));
    }

    #[test]
    fn inverted_empty_box_is_zero_volume_and_clamps_its_center() {
        let hist = Histogram::new();
        let inverted = ColorBox { min: [32, 0, 0], max: [31, 0, 0], count: 0 };
        assert_eq!(inverted.volume(), 0);
        assert!(!inverted.contains([31, 0, 0]));
        assert_eq!(inverted.average(&hist), Srgb::new(255, 4, 4));
    }
}
