//! Rounded-rectangle outline shared by the stroke and wave generators.

use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::Shape;

use crate::foundation::core::{BezPath, Point, Rect, Vec2};
use crate::foundation::math::step_count;
use crate::geometry::contour::Contour;

/// Tolerance used when flattening `kurbo::RoundedRect` into path elements.
const PATH_TOLERANCE: f64 = 0.1;

/// Radius clamped into `[0, min(width, height) / 2]` for the normalized `rect`.
/// Non-finite radii become 0.
pub fn clamp_corner_radius(rect: Rect, corner_radius: f64) -> f64 {
    let rect = rect.abs();
    let max = (rect.width().min(rect.height()) * 0.5).max(0.0);
    if !corner_radius.is_finite() || !max.is_finite() {
        return 0.0;
    }
    corner_radius.clamp(0.0, max)
}

/// The eight pieces of a rounded-rectangle outline, in traversal order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutlineSegment {
    Corner {
        center: Point,
        radius: f64,
        start_angle: f64,
    },
    Edge {
        from: Point,
        to: Point,
        /// Unit normal pointing away from the rectangle interior.
        outward: Vec2,
        /// Phase added to this edge only; it never carries into later segments.
        phase_offset: f64,
    },
}

/// Extra phase on the top edge relative to the others.
pub const TOP_EDGE_PHASE_OFFSET: f64 = 3.2;
/// Extra phase on the left edge relative to the others.
pub const LEFT_EDGE_PHASE_OFFSET: f64 = 3.8;

impl OutlineSegment {
    /// Unperturbed length: chord for edges, quarter-circle arc for corners.
    pub fn length(&self) -> f64 {
        match *self {
            Self::Corner { radius, .. } => radius * FRAC_PI_2,
            Self::Edge { from, to, .. } => from.distance(to),
        }
    }

    pub fn steps(&self) -> usize {
        step_count(self.length())
    }

    /// Point at parameter `t` in `[0, 1]`, pushed outward by `displacement`.
    pub fn point_at(&self, t: f64, displacement: f64) -> Point {
        match *self {
            Self::Corner {
                center,
                radius,
                start_angle,
            } => {
                let theta = start_angle + t * FRAC_PI_2;
                let r = radius + displacement;
                Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
            }
            Self::Edge {
                from, to, outward, ..
            } => from.lerp(to, t) + outward * displacement,
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(self, Self::Corner { .. })
    }
}

/// Outline pieces of `rect` with the clamped `corner_radius`, in the fixed order: top-left
/// corner, top edge, top-right corner, right edge, bottom-right corner, bottom edge,
/// bottom-left corner, left edge. Angles are in y-down screen space.
pub fn outline_segments(rect: Rect, corner_radius: f64) -> [OutlineSegment; 8] {
    let rect = rect.abs();
    let r = clamp_corner_radius(rect, corner_radius);
    let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);

    let corner = |cx: f64, cy: f64, start_angle: f64| OutlineSegment::Corner {
        center: Point::new(cx, cy),
        radius: r,
        start_angle,
    };
    let edge = |from: (f64, f64), to: (f64, f64), outward: (f64, f64), phase_offset: f64| {
        OutlineSegment::Edge {
            from: from.into(),
            to: to.into(),
            outward: outward.into(),
            phase_offset,
        }
    };

    [
        corner(x0 + r, y0 + r, PI),
        edge(
            (x0 + r, y0),
            (x1 - r, y0),
            (0.0, -1.0),
            TOP_EDGE_PHASE_OFFSET,
        ),
        corner(x1 - r, y0 + r, PI + FRAC_PI_2),
        edge((x1, y0 + r), (x1, y1 - r), (1.0, 0.0), 0.0),
        corner(x1 - r, y1 - r, 0.0),
        edge((x1 - r, y1), (x0 + r, y1), (0.0, 1.0), 0.0),
        corner(x0 + r, y1 - r, FRAC_PI_2),
        edge(
            (x0, y1 - r),
            (x0, y0 + r),
            (-1.0, 0.0),
            LEFT_EDGE_PHASE_OFFSET,
        ),
    ]
}

/// Sample parameters for a segment: `0, 1/n, ..., 1` or just `[1.0]` when `n == 0`.
pub(crate) fn sample_params(steps: usize) -> impl Iterator<Item = f64> {
    let (lo, n) = if steps == 0 { (1, 1) } else { (0, steps) };
    (lo..=n).map(move |i| i as f64 / n as f64)
}

/// Unperturbed outline sampled at the same density the wave generator uses.
pub fn rounded_rect_contour(rect: Rect, corner_radius: f64) -> Contour {
    let segments = outline_segments(rect, corner_radius);
    let mut points = Vec::with_capacity(segments.iter().map(|s| s.steps() + 1).sum());
    for seg in &segments {
        points.extend(sample_params(seg.steps()).map(|t| seg.point_at(t, 0.0)));
    }
    Contour::new(points)
}

/// Rounded rectangle as curve-based path elements.
pub fn rounded_rect_path(rect: Rect, corner_radius: f64) -> BezPath {
    let rect = rect.abs();
    let r = clamp_corner_radius(rect, corner_radius);
    let rr = kurbo::RoundedRect::from_rect(rect, r);
    let mut p = BezPath::new();
    for el in rr.path_elements(PATH_TOLERANCE) {
        p.push(el);
    }
    p
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rounded.rs"]
mod tests;
