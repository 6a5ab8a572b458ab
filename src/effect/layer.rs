//! Explicit layer stack: each layer is a shape, an optional blur, a color source and a blend
//! mode, composited in order over a base frame.

use crate::foundation::core::{BezPath, Canvas, Rect, Rgba8Premul};
use crate::foundation::error::{GlowError, GlowResult};
use crate::geometry::stroke::{stroke_outline, variable_width_stroke};
use crate::mesh::gradient::MeshGradient;
use crate::render::blur::{blur_alpha_mask, blur_params};
use crate::render::composite::{BlendMode, composite_in_place, mask_apply_alpha};
use crate::render::frame::FrameRGBA;
use crate::render::raster::Rasterizer;

/// Geometry covered by a layer.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerShape {
    /// Non-zero fill of a path.
    Fill(BezPath),
    /// Uniform round-capped stroke of a path.
    Stroke { path: BezPath, width: f64 },
    /// Rounded rectangle stroked in equal pieces of individual widths.
    VariableStroke {
        rect: Rect,
        corner_radius: f64,
        widths: Vec<f64>,
    },
}

impl LayerShape {
    /// Fillable outline for this shape.
    pub fn outline(&self) -> BezPath {
        match self {
            Self::Fill(path) => path.clone(),
            Self::Stroke { path, width } => stroke_outline(path, *width),
            Self::VariableStroke {
                rect,
                corner_radius,
                widths,
            } => variable_width_stroke(*rect, *corner_radius, widths),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ColorSource {
    Solid(Rgba8Premul),
    Mesh(MeshGradient),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub shape: LayerShape,
    /// Gaussian blur radius in pixels; 0 disables the blur.
    pub blur_radius: f64,
    pub color: ColorSource,
    pub blend: BlendMode,
    pub opacity: f32,
}

impl Layer {
    pub fn new(shape: LayerShape, color: ColorSource) -> Self {
        Self {
            shape,
            blur_radius: 0.0,
            color,
            blend: BlendMode::Normal,
            opacity: 1.0,
        }
    }

    pub fn with_blur(mut self, radius: f64) -> Self {
        self.blur_radius = radius;
        self
    }

    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Reusable compositor. Keeps the rasterizer context and the last mesh surface between calls.
#[derive(Debug, Default)]
pub struct Compositor {
    raster: Rasterizer,
    mesh_cache: Option<(MeshGradient, Canvas, Vec<u8>)>,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composite `layers` in order over a copy of `base`.
    #[tracing::instrument(skip_all, fields(width = base.width, height = base.height, layers = layers.len()))]
    pub fn composite(&mut self, base: &FrameRGBA, layers: &[Layer]) -> GlowResult<FrameRGBA> {
        base.check_len()?;
        if !base.premultiplied {
            return Err(GlowError::render("composite expects a premultiplied base"));
        }

        let canvas = base.canvas();
        let mut out = base.clone();
        let mut masked = vec![0u8; out.data.len()];
        for layer in layers {
            if layer.opacity <= 0.0 {
                continue;
            }
            let outline = layer.shape.outline();
            if outline.elements().is_empty() {
                continue;
            }

            let mut coverage = self.raster.coverage(&outline, canvas)?;
            if let Some((radius, sigma)) = blur_params(layer.blur_radius) {
                coverage = blur_alpha_mask(&coverage, canvas.width, canvas.height, radius, sigma)?;
            }

            let color = self.color_surface(&layer.color, canvas)?;
            mask_apply_alpha(&color, &coverage, &mut masked)?;
            composite_in_place(&mut out.data, &masked, layer.opacity, layer.blend)?;
        }
        Ok(out)
    }

    fn color_surface(&mut self, source: &ColorSource, canvas: Canvas) -> GlowResult<Vec<u8>> {
        match source {
            ColorSource::Solid(c) => Ok(c.to_array().repeat(canvas.byte_len()? / 4)),
            ColorSource::Mesh(mesh) => {
                if let Some((cached, cached_canvas, bytes)) = &self.mesh_cache
                    && cached == mesh
                    && *cached_canvas == canvas
                {
                    return Ok(bytes.clone());
                }
                let bytes = mesh.rasterize(canvas)?;
                self.mesh_cache = Some((mesh.clone(), canvas, bytes.clone()));
                Ok(bytes)
            }
        }
    }
}

/// One-shot layer composition over `base`.
pub fn composite(base: &FrameRGBA, layers: &[Layer]) -> GlowResult<FrameRGBA> {
    Compositor::new().composite(base, layers)
}

#[cfg(test)]
#[path = "../../tests/unit/effect/layer.rs"]
mod tests;
