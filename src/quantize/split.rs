use super::color_box::ColorBox;
use crate::histogram::{BINS, Histogram};

/// The outcome of one median cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplitResult {
    /// The box holds no pixels, so there is nothing to cut.
    Unsplittable,
    /// The box holds a single pixel, which a cut cannot separate.
    Single(ColorBox),
    /// The boxes on either side of the cut plane.
    Pair(ColorBox, ColorBox),
}

/// Cut a box across its widest axis, next to the bin where the cumulative pixel
/// count passes half the box total, biased toward the middle of the heavier side.
///
/// The cut plane is then nudged so that the lower half always keeps at least one
/// populated bin. The upper half can still come out empty, in which case it is
/// inverted along the cut axis and has a zero count.
pub(crate) fn split(hist: &Histogram, vbox: ColorBox) -> SplitResult {
    if vbox.count == 0 {
        return SplitResult::Unsplittable;
    }
    if vbox.count == 1 {
        return SplitResult::Single(vbox);
    }

    let axis = widest_axis(&vbox);
    let (partial, total) = partial_sums(hist, &vbox, axis);
    debug_assert_eq!(total, vbox.count);

    let lo = vbox.min[axis];
    let hi = vbox.max[axis];

    // Cumulative counts read as zero outside the box, like bins it does not cover.
    let partial_at = |i: i32| {
        #[allow(clippy::cast_sign_loss)]
        if i < 0 { 0 } else { partial.get(i as usize).copied().unwrap_or(0) }
    };

    // The cumulative count reaches `total` by `hi`, so a median bin always exists.
    let median = (lo..=hi)
        .find(|&i| partial[usize::from(i)] > total / 2)
        .unwrap_or(hi);

    let left = median - lo;
    let right = hi - median;
    let mut cut = if left <= right {
        i32::min(i32::from(hi) - 1, i32::from(median) + i32::from(right) / 2)
    } else {
        // Half the left width, rounded up. Rounding down would land the cut one
        // bin deeper into the heavier side than the bias intends.
        i32::max(i32::from(lo), i32::from(median) - 1 - (i32::from(left) + 1) / 2)
    };

    // Step forward past empty leading bins. `partial_at(hi)` is the nonzero
    // total, so this stops within the box.
    while partial_at(cut) == 0 {
        cut += 1;
    }

    // If everything landed below the cut, back it off toward the median until
    // the upper half gains a pixel, but never past the first populated bin.
    let mut upper_count = total - partial_at(cut);
    while upper_count == 0 && partial_at(cut - 1) != 0 {
        cut -= 1;
        upper_count = total - partial_at(cut);
    }

    // The nudges keep the cut within `0..BINS`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cut = cut as u8;

    let mut lower = vbox;
    lower.max[axis] = cut;
    lower.count = total - upper_count;

    let mut upper = vbox;
    upper.min[axis] = cut + 1;
    upper.count = upper_count;

    SplitResult::Pair(lower, upper)
}

/// The axis with the most bins, preferring red over green over blue on ties.
fn widest_axis(vbox: &ColorBox) -> usize {
    let widths = [
        vbox.max[0] - vbox.min[0],
        vbox.max[1] - vbox.min[1],
        vbox.max[2] - vbox.min[2],
    ];

    let mut axis = 0;
    for (i, &width) in widths.iter().enumerate() {
        if width > widths[axis] {
            axis = i;
        }
    }
    axis
}

/// Cumulative pixel counts along `axis`, indexed by bin coordinate, together
/// with the box total. Bins outside the box range are left at zero.
fn partial_sums(hist: &Histogram, vbox: &ColorBox, axis: usize) -> ([u32; BINS], u32) {
    let (a1, a2) = ((axis + 1) % 3, (axis + 2) % 3);

    let mut partial = [0; BINS];
    let mut total = 0;
    for i in vbox.min[axis]..=vbox.max[axis] {
        let mut sum = 0;
        for j in vbox.min[a1]..=vbox.max[a1] {
            for k in vbox.min[a2]..=vbox.max[a2] {
                let mut coords = [0; 3];
                coords[axis] = i;
                coords[a1] = j;
                coords[a2] = k;
                sum += hist[coords];
            }
        }
        total += sum;
        partial[usize::from(i)] = total;
    }

    (partial, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    fn histogram(colors: &[[u8; 3]]) -> Histogram {
        let colors = colors
            .iter()
            .map(|&[r, g, b]| Srgb::new(r, g, b))
            .collect::<alloc::vec::Vec<_>>();
        let mut hist = Histogram::new();
        hist.add_colors(&colors);
        hist
    }

    #[test]
    fn cuts_the_widest_axis_next_to_the_median_bin() {
        let hist = histogram(&[
            [190, 197, 190],
            [202, 204, 200],
            [207, 214, 210],
            [211, 214, 211],
            [205, 207, 207],
        ]);
        let vbox = ColorBox { min: [23, 24, 23], max: [26, 26, 26], count: 5 };

        let SplitResult::Pair(lower, upper) = split(&hist, vbox) else {
            panic!("expected a pair");
        };
        assert_eq!(lower, ColorBox { min: [23, 24, 23], max: [23, 26, 26], count: 1 });
        assert_eq!(upper, ColorBox { min: [24, 24, 23], max: [26, 26, 26], count: 4 });
        assert_eq!(lower.count + upper.count, vbox.count);
    }

    #[test]
    fn red_wins_axis_width_ties() {
        let hist = histogram(&[[0, 0, 0], [255, 255, 0], [255, 255, 0]]);
        let vbox = ColorBox { min: [0, 0, 0], max: [31, 31, 0], count: 3 };

        let SplitResult::Pair(lower, upper) = split(&hist, vbox) else {
            panic!("expected a pair");
        };
        assert_eq!(lower, ColorBox { min: [0, 0, 0], max: [14, 31, 0], count: 1 });
        assert_eq!(upper, ColorBox { min: [15, 0, 0], max: [31, 31, 0], count: 2 });
    }

    #[test]
    fn zero_count_box_is_unsplittable() {
        let hist = histogram(&[]);
        let vbox = ColorBox { min: [0, 0, 0], max: [31, 31, 31], count: 0 };
        assert_eq!(split(&hist, vbox), SplitResult::Unsplittable);
    }

    #[test]
    fn single_pixel_box_is_kept_whole() {
        let hist = histogram(&[[100, 100, 100]]);
        let vbox = ColorBox { min: [12, 12, 12], max: [12, 12, 12], count: 1 };
        assert_eq!(split(&hist, vbox), SplitResult::Single(vbox));
    }

    #[test]
    fn single_bin_box_yields_an_empty_upper_half() {
        let hist = histogram(&[[0, 0, 0], [7, 7, 7]]);
        let vbox = ColorBox { min: [0, 0, 0], max: [0, 0, 0], count: 2 };

        let SplitResult::Pair(lower, upper) = split(&hist, vbox) else {
            panic!("expected a pair");
        };
        assert_eq!(lower, vbox);
        assert_eq!(upper, ColorBox { min: [1, 0, 0], max: [0, 0, 0], count: 0 });
        assert_eq!(upper.volume(), 0);
    }

    #[test]
    fn cut_backs_off_so_the_upper_half_keeps_pixels() {
        // Bins 0 and 1 are populated while bin 2 is empty. The biased cut lands
        // on bin 1, leaving the upper half empty, and must back off to bin 0.
        let hist = histogram(&[[0, 0, 0], [8, 0, 0], [15, 0, 0]]);
        let vbox = ColorBox { min: [0, 0, 0], max: [2, 0, 0], count: 3 };

        let SplitResult::Pair(lower, upper) = split(&hist, vbox) else {
            panic!("expected a pair");
        };
        assert_eq!(lower, ColorBox { min: [0, 0, 0], max: [0, 0, 0], count: 1 });
        assert_eq!(upper, ColorBox { min: [1, 0, 0], max: [2, 0, 0], count: 2 });
    }
}
