//! Wavy rounded-rectangle generator.
//!
//! The outline is walked in a fixed order (see [`outline_segments`]) and every sample is pushed
//! outward by `amplitude * sin(phase)`. The phase is carried from one segment to the next so
//! `frequency` full waves span the perimeter:
//!
//! ```text
//! perimeter          = 2 * (w + h - 4r) + sign(winding) * 2 * pi * r
//! adjusted_frequency = frequency / perimeter
//! phase_next         = phase + segment_length * adjusted_frequency * 2 * pi
//! ```
//!
//! Counter-clockwise winding negates only the arc term of the perimeter; the traversal order
//! does not change. The top and left edges add a local phase offset that is not carried into
//! the following segment.

use std::f64::consts::TAU;

use crate::foundation::core::{Rect, Winding};
use crate::foundation::math::phase_advance;
use crate::geometry::contour::Contour;
use crate::geometry::rounded::{OutlineSegment, clamp_corner_radius, outline_segments, sample_params};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Peak displacement, in the same units as the rectangle.
    pub amplitude: f64,
    /// Wave cycles per full perimeter traversal.
    pub frequency: f64,
    /// Starting phase in radians.
    pub phase: f64,
    pub winding: Winding,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: 0.0,
            frequency: 1.0,
            phase: 0.0,
            winding: Winding::Clockwise,
        }
    }
}

impl WaveParams {
    pub fn with_phase(self, phase: f64) -> Self {
        Self { phase, ..self }
    }
}

/// Signed perimeter used for frequency normalization.
pub fn signed_perimeter(rect: Rect, corner_radius: f64, winding: Winding) -> f64 {
    let rect = rect.abs();
    let r = clamp_corner_radius(rect, corner_radius);
    2.0 * (rect.width() + rect.height() - 4.0 * r) + winding.sign() * TAU * r
}

/// `frequency / perimeter`, or 0 when the perimeter cannot normalize anything.
pub fn adjusted_frequency(frequency: f64, perimeter: f64) -> f64 {
    if perimeter == 0.0 || !perimeter.is_finite() {
        return 0.0;
    }
    frequency / perimeter
}

/// Bookkeeping for one traversed segment.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentTrace {
    pub segment: OutlineSegment,
    /// Carried phase on entry, before any local edge offset.
    pub start_phase: f64,
    /// Indices into the contour's points produced by this segment.
    pub points: std::ops::Range<usize>,
}

/// A generated contour plus the per-segment phase trace.
#[derive(Clone, Debug, PartialEq)]
pub struct WavyTrace {
    pub contour: Contour,
    pub perimeter: f64,
    pub adjusted_frequency: f64,
    pub segments: Vec<SegmentTrace>,
    /// Carried phase after the last segment.
    pub end_phase: f64,
}

/// Closed wavy contour around `rect`.
pub fn wavy_contour(rect: Rect, corner_radius: f64, params: &WaveParams) -> Contour {
    wavy_trace(rect, corner_radius, params).contour
}

/// Same as [`wavy_contour`], keeping the per-segment phases.
pub fn wavy_trace(rect: Rect, corner_radius: f64, params: &WaveParams) -> WavyTrace {
    let perimeter = signed_perimeter(rect, corner_radius, params.winding);
    let adj = adjusted_frequency(params.frequency, perimeter);
    let segments = outline_segments(rect, corner_radius);

    let mut points = Vec::with_capacity(segments.iter().map(|s| s.steps() + 1).sum());
    let mut traces = Vec::with_capacity(segments.len());
    let mut phase = params.phase;

    for seg in segments {
        let length = seg.length();
        let sweep = phase_advance(length, adj);
        let local = match seg {
            OutlineSegment::Edge { phase_offset, .. } => phase_offset,
            OutlineSegment::Corner { .. } => 0.0,
        };

        let first = points.len();
        for t in sample_params(seg.steps()) {
            let wave = params.amplitude * (phase + local + t * sweep).sin();
            points.push(seg.point_at(t, wave));
        }
        traces.push(SegmentTrace {
            segment: seg,
            start_phase: phase,
            points: first..points.len(),
        });

        phase += sweep;
    }

    if points.iter().any(|p| !p.is_finite()) {
        tracing::trace!(?rect, corner_radius, ?params, "wavy contour has non-finite samples");
    }

    WavyTrace {
        contour: Contour::new(points),
        perimeter,
        adjusted_frequency: adj,
        segments: traces,
        end_phase: phase,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/wavy.rs"]
mod tests;
