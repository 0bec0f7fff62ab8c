//! Modified median cut color quantization (MMCQ).
//!
//! Pixels are binned into a coarse histogram over the RGB cube, and the box
//! around the populated bins is then repeatedly split near the median of its
//! widest axis. Refinement runs in two phases: the first grows the queue by
//! pixel population alone, dedicating palette entries to the most common
//! colors, and the second re-ranks the queue by population times box volume so
//! the remaining entries also cover sparsely populated regions of the cube.

// Referenced code: https://github.com/lokesh/quantize/blob/master/src/quantize.js
// which ports the modified median cut quantizer from the Leptonica library:
// Dan S. Bloomberg, Color quantization using modified median cut,
// http://www.leptonica.org/papers/mediancut.pdf

mod color_box;
mod split;

pub(crate) use color_box::ColorBox;

use crate::{
    ColorMap, LengthOutOfRange, PaletteBuf, PaletteSize, QuantizeError, histogram::Histogram,
};
use alloc::{collections::BinaryHeap, vec::Vec};
use core::cmp::Ordering;
use palette::Srgb;
use split::{SplitResult, split};

/// The most pop/split passes one refinement phase may spend.
///
/// The cap turns pathological queue states, such as a queue full of unsplittable
/// boxes, into a palette with fewer colors instead of an endless loop.
const MAX_ITERATIONS: u32 = 1000;

/// The numerator and denominator of the palette fraction filled by the first,
/// population-ranked refinement phase.
const POPULATION_FRACTION: (u16, u16) = (3, 4);

/// A box and its rank in the splitting queue.
struct RankedBox(ColorBox, u64);

impl RankedBox {
    /// Rank by pixel count alone.
    fn by_count(vbox: ColorBox) -> Self {
        Self(vbox, u64::from(vbox.count))
    }

    /// Rank by pixel count times bin volume.
    fn by_count_volume(vbox: ColorBox) -> Self {
        Self(vbox, u64::from(vbox.count) * u64::from(vbox.volume()))
    }
}

impl PartialOrd for RankedBox {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedBox {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

impl Eq for RankedBox {}

impl PartialEq for RankedBox {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

/// Pop the top ranked box, split it, and push the results back until the queue
/// holds `target` boxes or the iteration cap is spent.
fn refine(
    queue: &mut BinaryHeap<RankedBox>,
    hist: &Histogram,
    target: usize,
    rank: fn(ColorBox) -> RankedBox,
) {
    let mut iterations = 0;
    while iterations < MAX_ITERATIONS {
        if queue.len() >= target {
            return;
        }
        iterations += 1;

        // there is always at least one box, since each pass pushes back what it popped
        #[allow(clippy::expect_used)]
        let RankedBox(vbox, _) = queue.pop().expect("at least one box");

        if vbox.count == 0 {
            // an empty box cannot be split, put it back and burn an extra iteration
            queue.push(rank(vbox));
            iterations += 1;
            continue;
        }

        match split(hist, vbox) {
            SplitResult::Pair(lower, upper) => {
                queue.push(rank(lower));
                queue.push(rank(upper));
            }
            SplitResult::Single(vbox) => queue.push(rank(vbox)),
            // the zero count case is rerouted above
            #[allow(clippy::panic)]
            SplitResult::Unsplittable => panic!("a box with a nonzero count failed to split"),
        }
    }
}

/// Quantize `pixels` down to at most `max_colors` representative colors.
///
/// The returned [`ColorMap`] holds the derived palette, ordered so that the
/// color covering the most of the image comes first, and maps arbitrary colors
/// to their palette representative.
///
/// # Examples
///
/// ```
/// # use mmcq::{QuantizeError, quantize};
/// # use palette::Srgb;
/// # fn main() -> Result<(), QuantizeError> {
/// let pixels = vec![Srgb::new(255u8, 0, 0), Srgb::new(0, 0, 255)];
/// let color_map = quantize(&pixels, 2)?;
/// assert_eq!(color_map.palette().len(), 2);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if `pixels` is empty or longer than `u32::MAX`, or if
/// `max_colors` is not in the range `2..=256`.
pub fn quantize(pixels: &[Srgb<u8>], max_colors: u16) -> Result<ColorMap, QuantizeError> {
    let len = LengthOutOfRange::check_u32(pixels, 1, u32::MAX)?;
    let max_colors = PaletteSize::try_from(max_colors)?;

    let mut hist = Histogram::new();
    hist.add_colors(pixels);

    let mut queue = BinaryHeap::with_capacity(max_colors.as_usize());
    queue.push(RankedBox::by_count(ColorBox::enclosing(pixels, len)));

    let (num, den) = POPULATION_FRACTION;
    let population_target = (num * max_colors.as_u16()).div_ceil(den);
    refine(&mut queue, &hist, usize::from(population_target), RankedBox::by_count);

    let mut queue = queue
        .into_iter()
        .map(|RankedBox(vbox, _)| RankedBox::by_count_volume(vbox))
        .collect::<BinaryHeap<_>>();
    refine(&mut queue, &hist, max_colors.as_usize(), RankedBox::by_count_volume);

    // Drain in rank order, so the palette leads with its most prominent color.
    let mut boxes = Vec::with_capacity(queue.len());
    let mut colors = Vec::with_capacity(queue.len());
    while let Some(RankedBox(vbox, _)) = queue.pop() {
        boxes.push(vbox);
        colors.push(vbox.average(&hist));
    }

    Ok(ColorMap::new(boxes, PaletteBuf::new_unchecked(colors)))
}
