//! "Thinking" glow preset: wavy rings around content, colored by the animated mesh gradient.

use crate::effect::driver::GlowState;
use crate::effect::layer::{ColorSource, Compositor, Layer, LayerShape};
use crate::foundation::core::Rect;
use crate::foundation::error::GlowResult;
use crate::geometry::wavy::{WaveParams, wavy_contour};
use crate::mesh::gradient::{MeshGradient, MeshPalette};
use crate::render::composite::BlendMode;
use crate::render::frame::FrameRGBA;

/// One stroked, blurred copy of the wavy outline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GlowRing {
    pub width: f64,
    pub blur_radius: f64,
    pub opacity: f32,
    /// Multiplier on the base wave amplitude.
    pub amplitude_scale: f64,
    /// Phase added to the driver phase for this ring only.
    pub phase_offset: f64,
    pub blend: BlendMode,
}

impl Default for GlowRing {
    fn default() -> Self {
        Self {
            width: 2.0,
            blur_radius: 0.0,
            opacity: 1.0,
            amplitude_scale: 1.0,
            phase_offset: 0.0,
            blend: BlendMode::Normal,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThinkingGlow {
    pub corner_radius: f64,
    /// Distance the outline sits outside the content bounds (negative moves it inside).
    pub inset: f64,
    /// Base wave; its `phase` is added to the driver phase.
    pub wave: WaveParams,
    pub rings: Vec<GlowRing>,
    /// Per-piece widths of a plain rounded-rect rim drawn under the rings; empty disables it.
    pub rim_widths: Vec<f64>,
    pub rim_opacity: f32,
    pub palette: MeshPalette,
}

impl Default for ThinkingGlow {
    fn default() -> Self {
        Self {
            corner_radius: 24.0,
            inset: 0.0,
            wave: WaveParams {
                amplitude: 2.5,
                frequency: 6.0,
                ..WaveParams::default()
            },
            rings: vec![
                GlowRing::default(),
                GlowRing {
                    width: 5.0,
                    blur_radius: 4.0,
                    opacity: 0.9,
                    amplitude_scale: 1.2,
                    phase_offset: 0.6,
                    blend: BlendMode::Screen,
                },
                GlowRing {
                    width: 9.0,
                    blur_radius: 12.0,
                    opacity: 0.7,
                    amplitude_scale: 1.5,
                    phase_offset: 1.3,
                    blend: BlendMode::Screen,
                },
                GlowRing {
                    width: 14.0,
                    blur_radius: 22.0,
                    opacity: 0.5,
                    amplitude_scale: 1.8,
                    phase_offset: 2.1,
                    blend: BlendMode::Screen,
                },
            ],
            rim_widths: vec![2.0, 1.0, 2.5, 1.0, 2.0, 1.0],
            rim_opacity: 0.6,
            palette: MeshPalette::default(),
        }
    }
}

impl ThinkingGlow {
    /// Outline rectangle for content `bounds`.
    pub fn outline_rect(&self, bounds: Rect) -> Rect {
        bounds.abs().inset(self.inset)
    }

    /// Layer stack for the current animation state, bottom first.
    pub fn layers(&self, bounds: Rect, state: &GlowState) -> Vec<Layer> {
        let rect = self.outline_rect(bounds);
        let mesh = MeshGradient::at(state.mesh.timer, &self.palette);
        let mut layers = Vec::with_capacity(self.rings.len() + 1);

        if !self.rim_widths.is_empty() {
            layers.push(
                Layer::new(
                    LayerShape::VariableStroke {
                        rect,
                        corner_radius: self.corner_radius,
                        widths: self.rim_widths.clone(),
                    },
                    ColorSource::Mesh(mesh.clone()),
                )
                .with_opacity(self.rim_opacity),
            );
        }

        for ring in &self.rings {
            let params = WaveParams {
                amplitude: self.wave.amplitude * ring.amplitude_scale,
                phase: self.wave.phase + state.phase + ring.phase_offset,
                ..self.wave
            };
            let contour = wavy_contour(rect, self.corner_radius, &params);
            layers.push(
                Layer::new(
                    LayerShape::Stroke {
                        path: contour.to_path(),
                        width: ring.width,
                    },
                    ColorSource::Mesh(mesh.clone()),
                )
                .with_blur(ring.blur_radius)
                .with_blend(ring.blend)
                .with_opacity(ring.opacity),
            );
        }
        layers
    }

    /// Render the glow for `bounds` over `base`.
    pub fn render(
        &self,
        compositor: &mut Compositor,
        base: &FrameRGBA,
        bounds: Rect,
        state: &GlowState,
    ) -> GlowResult<FrameRGBA> {
        compositor.composite(base, &self.layers(bounds, state))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/glow.rs"]
mod tests;
