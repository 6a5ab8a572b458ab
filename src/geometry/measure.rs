//! Arc-length measurement and trimming over `BezPath` elements.
//!
//! Curve segments are measured by their chord (endpoint-to-endpoint distance), not by
//! integrating their true arc length. Trimming inherits the same approximation: a curve that
//! straddles a trim boundary is emitted as a straight line to the interpolated chord point.

use kurbo::PathEl;

use crate::foundation::core::{BezPath, Point};

/// Per-element lengths, index-aligned with `path.elements()`.
///
/// `MoveTo` contributes 0 and `ClosePath` contributes the distance back to the start of its
/// subpath.
pub fn segment_lengths(path: &BezPath) -> Vec<f64> {
    let mut out = Vec::with_capacity(path.elements().len());
    let mut cursor = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    for &el in path.elements() {
        let len = match el {
            PathEl::MoveTo(p) => {
                subpath_start = p;
                cursor = p;
                0.0
            }
            PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
                let d = cursor.distance(p);
                cursor = p;
                d
            }
            PathEl::ClosePath => {
                let d = cursor.distance(subpath_start);
                cursor = subpath_start;
                d
            }
        };
        out.push(len);
    }
    out
}

/// Total chord length of `path`.
pub fn path_length(path: &BezPath) -> f64 {
    segment_lengths(path).iter().sum()
}

/// End point of every drawing element, in order. `ClosePath` yields its subpath start.
pub fn path_vertices(path: &BezPath) -> Vec<Point> {
    let mut out = Vec::with_capacity(path.elements().len());
    let mut subpath_start = Point::ZERO;
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => {
                subpath_start = p;
                out.push(p);
            }
            PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => out.push(p),
            PathEl::ClosePath => out.push(subpath_start),
        }
    }
    out
}

/// Sub-path between fractions `start` and `end` of the total length.
///
/// Fractions are clamped to `[0, 1]`. `end <= start` and zero-length paths yield an empty
/// path; `0..1` returns the input unchanged.
pub fn trimmed_path(path: &BezPath, start: f64, end: f64) -> BezPath {
    let start = start.clamp(0.0, 1.0);
    let end = end.clamp(0.0, 1.0);
    // Also rejects NaN bounds.
    if !(end > start) {
        return BezPath::new();
    }

    let lengths = segment_lengths(path);
    let total: f64 = lengths.iter().sum();
    if !(total > 0.0) || !total.is_finite() {
        tracing::trace!(total, "trimmed_path: degenerate path length");
        return BezPath::new();
    }
    if start <= 0.0 && end >= 1.0 {
        return path.clone();
    }

    let from = start * total;
    let to = end * total;

    let mut out = BezPath::new();
    let mut acc = 0.0;
    let mut cursor = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    // Origin of the subpath currently open in `out`; `None` when the pen is up.
    let mut open_from: Option<Point> = None;

    for (&el, &len) in path.elements().iter().zip(&lengths) {
        let seg_end = match el {
            PathEl::MoveTo(p) => {
                cursor = p;
                subpath_start = p;
                open_from = None;
                continue;
            }
            PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => p,
            PathEl::ClosePath => subpath_start,
        };

        let a = acc;
        let b = acc + len;
        acc = b;

        let outside = b < from || a > to || (len > 0.0 && (b <= from || a >= to));
        if outside {
            cursor = seg_end;
            open_from = None;
            continue;
        }

        if a >= from && b <= to {
            let origin = *open_from.get_or_insert_with(|| {
                out.move_to(cursor);
                cursor
            });
            match el {
                PathEl::ClosePath if origin == subpath_start => out.close_path(),
                PathEl::ClosePath => out.line_to(subpath_start),
                other => out.push(other),
            }
        } else {
            let t0 = ((from - a) / len).max(0.0);
            let t1 = ((to - a) / len).min(1.0);
            let p0 = cursor.lerp(seg_end, t0);
            let p1 = cursor.lerp(seg_end, t1);
            if t0 > 0.0 || open_from.is_none() {
                out.move_to(p0);
                open_from = Some(p0);
            }
            out.line_to(p1);
        }
        cursor = seg_end;
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/measure.rs"]
mod tests;
