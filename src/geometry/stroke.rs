use kurbo::{Cap, Join, Stroke, StrokeOpts};

use crate::foundation::core::{BezPath, Rect};
use crate::geometry::measure::trimmed_path;
use crate::geometry::rounded::rounded_rect_path;

/// Flattening tolerance for stroke outlines.
const STROKE_TOLERANCE: f64 = 0.05;
/// Flattening tolerance for the base outline before it is cut into pieces.
const BASE_FLATTEN_TOLERANCE: f64 = 0.02;

/// Partition boundaries `0, 1/n, ..., 1` for `n` equal arc-length pieces.
pub fn partition_fractions(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    (0..=n).map(|i| i as f64 / n as f64).collect()
}

/// Outline of `path` stroked at `width` with round caps and joins, as a non-zero fill shape.
pub fn stroke_outline(path: &BezPath, width: f64) -> BezPath {
    if !width.is_finite() || width <= 0.0 || path.elements().is_empty() {
        return BezPath::new();
    }
    let style = Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round);
    kurbo::stroke(path.iter(), &style, &StrokeOpts::default(), STROKE_TOLERANCE)
}

/// Rounded rectangle split into `widths.len()` equal arc-length pieces, each stroked at its
/// own width. Pieces are uniform; adjacent widths are not blended.
///
/// The outline is flattened to lines first, so cutting it never shortcuts a corner.
pub fn variable_width_stroke(rect: Rect, corner_radius: f64, widths: &[f64]) -> BezPath {
    let mut out = BezPath::new();
    if widths.is_empty() {
        return out;
    }

    let mut base = BezPath::new();
    kurbo::flatten(
        rounded_rect_path(rect, corner_radius).iter(),
        BASE_FLATTEN_TOLERANCE,
        |el| base.push(el),
    );
    let bounds = partition_fractions(widths.len());
    for (w, range) in widths.iter().zip(bounds.windows(2)) {
        let piece = trimmed_path(&base, range[0], range[1]);
        for el in stroke_outline(&piece, *w).elements() {
            out.push(*el);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/stroke.rs"]
mod tests;
