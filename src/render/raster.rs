use kurbo::PathEl;

use crate::foundation::core::{BezPath, Canvas};
use crate::foundation::error::{GlowError, GlowResult};

/// Path coverage rasterizer backed by `vello_cpu`.
///
/// Coverage is returned as a one-byte-per-pixel alpha mask.
#[derive(Default)]
pub struct Rasterizer {
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("has_ctx", &self.ctx.is_some())
            .finish()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> GlowResult<R>,
    ) -> GlowResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    /// Non-zero fill coverage of `path` over `canvas`.
    pub fn coverage(&mut self, path: &BezPath, canvas: Canvas) -> GlowResult<Vec<u8>> {
        let (w, h) = canvas_dims_u16(canvas)?;
        let len = canvas.byte_len()? / 4;
        if len == 0 || path.elements().is_empty() {
            return Ok(vec![0u8; len]);
        }

        let cpu_path = bezpath_to_cpu(path);
        self.with_ctx_mut(w, h, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
            ctx.fill_path(&cpu_path);
            ctx.flush();

            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.render_to_pixmap(&mut pixmap);
            let bytes = pixmap.data_as_u8_slice();
            if bytes.len() != len * 4 {
                return Err(GlowError::render("coverage pixmap size mismatch"));
            }
            Ok(bytes.chunks_exact(4).map(|px| px[3]).collect())
        })
    }
}

fn canvas_dims_u16(canvas: Canvas) -> GlowResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| GlowError::render("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| GlowError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
