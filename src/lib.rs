//! Wavyglow draws an animated "thinking" glow around a rectangular content area.
//!
//! The glow is built from a closed wavy rounded rectangle whose wave phase stays continuous
//! around the whole perimeter, stroked at several widths, blurred, colored by an animated
//! mesh gradient and composited over a base frame on the CPU.
//!
//! # Pipeline overview
//!
//! 1. **Geometry**: `Rect + corner radius + WaveParams -> Contour` ([`wavy_contour`])
//! 2. **Layers**: `ThinkingGlow + GlowState -> Vec<Layer>` ([`ThinkingGlow::layers`])
//! 3. **Composite**: `FrameRGBA + layers -> FrameRGBA` ([`Compositor`])
//! 4. **Animate**: [`GlowDriver`] advances the wave phase and mesh timer from elapsed time
//!
//! Pixels are premultiplied RGBA8 end-to-end. Geometry never fails; rendering and
//! configuration return [`GlowResult`].
#![forbid(unsafe_code)]

mod config;
mod effect;
mod foundation;
mod geometry;
mod mesh;
mod render;

pub use config::{GlowConfig, MAX_CANVAS_SIDE, TimingConfig};
pub use effect::driver::{
    GlowDriver, GlowSession, GlowState, MAX_CATCH_UP_TICKS, TickReport, TickSchedule,
};
pub use effect::glow::{GlowRing, ThinkingGlow};
pub use effect::layer::{ColorSource, Compositor, Layer, LayerShape, composite};
pub use foundation::core::{
    Affine, BezPath, Canvas, Fps, Point, Rect, Rgba8Premul, Vec2, Winding,
};
pub use foundation::error::{GlowError, GlowResult};
pub use geometry::contour::Contour;
pub use geometry::measure::{path_length, path_vertices, segment_lengths, trimmed_path};
pub use geometry::rounded::{
    LEFT_EDGE_PHASE_OFFSET, OutlineSegment, TOP_EDGE_PHASE_OFFSET, clamp_corner_radius,
    outline_segments, rounded_rect_contour, rounded_rect_path,
};
pub use geometry::stroke::{partition_fractions, stroke_outline, variable_width_stroke};
pub use geometry::wavy::{
    SegmentTrace, WaveParams, WavyTrace, adjusted_frequency, signed_perimeter, wavy_contour,
    wavy_trace,
};
pub use mesh::gradient::{MeshClock, MeshGradient, MeshPalette, control_points};
pub use render::blur::{blur_alpha_mask, blur_params};
pub use render::composite::{BlendMode, composite_in_place, mask_apply_alpha};
pub use render::frame::FrameRGBA;
pub use render::raster::Rasterizer;
