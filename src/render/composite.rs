//! Per-pixel mask and blend operations over premultiplied RGBA8 buffers.

use crate::foundation::error::{GlowError, GlowResult};
use crate::foundation::math::{mul_div255_u8, unit_to_u8};

/// How a layer combines with what is already on the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Source over destination.
    #[default]
    Normal,
    /// `1 - (1 - s) * (1 - d)`: brightens, never darkens.
    Screen,
    /// Additive, saturating per channel.
    Plus,
    /// `s * d`.
    Multiply,
}

/// Scale every pixel of `src` by the matching byte of the one-channel `mask` into `dst`.
pub fn mask_apply_alpha(src: &[u8], mask: &[u8], dst: &mut [u8]) -> GlowResult<()> {
    if src.len() != dst.len() || mask.len().checked_mul(4) != Some(src.len()) {
        return Err(GlowError::render(
            "mask_apply_alpha expects rgba8 buffers and a mask of one byte per pixel",
        ));
    }
    for ((s, &m), d) in src
        .chunks_exact(4)
        .zip(mask)
        .zip(dst.chunks_exact_mut(4))
    {
        let w16 = u16::from(m);
        for c in 0..4 {
            d[c] = mul_div255_u8(u16::from(s[c]), w16);
        }
    }
    Ok(())
}

/// Composite `src` onto `dst` in place with `opacity` and `mode`.
pub fn composite_in_place(
    dst: &mut [u8],
    src: &[u8],
    opacity: f32,
    mode: BlendMode,
) -> GlowResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(GlowError::render(
            "composite_in_place expects equal-length rgba8 buffers",
        ));
    }
    match mode {
        BlendMode::Normal => composite_blend(dst, src, opacity, |s, _| s),
        BlendMode::Screen => composite_blend(dst, src, opacity, |s, d| s + d - s * d),
        BlendMode::Multiply => composite_blend(dst, src, opacity, |s, d| s * d),
        BlendMode::Plus => composite_plus(dst, src, opacity),
    }
    Ok(())
}

#[inline(always)]
fn composite_blend<F>(dst: &mut [u8], src: &[u8], opacity: f32, blend_fn: F)
where
    F: Fn(f32, f32) -> f32,
{
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        // Source-over with the blend applied to unpremultiplied channels:
        // out_a = sa + da * (1 - sa)
        // out_p = sp * (1 - da) + dp * (1 - sa) + B(sc, dc) * sa * da
        let sa = (f32::from(s[3]) / 255.0) * opacity;
        if sa <= 0.0 {
            continue;
        }
        let da = f32::from(d[3]) / 255.0;
        let out_a = (sa + da * (1.0 - sa)).clamp(0.0, 1.0);

        for c in 0..3 {
            let sp = (f32::from(s[c]) / 255.0) * opacity;
            let dp = f32::from(d[c]) / 255.0;
            let sc = (sp / sa).clamp(0.0, 1.0);
            let dc = if da > 0.0 {
                (dp / da).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let b = blend_fn(sc, dc).clamp(0.0, 1.0);
            let out_p = sp * (1.0 - da) + dp * (1.0 - sa) + b * sa * da;
            d[c] = unit_to_u8(out_p.clamp(0.0, out_a));
        }
        d[3] = unit_to_u8(out_a);
    }
}

fn composite_plus(dst: &mut [u8], src: &[u8], opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }
    let op = u16::from(unit_to_u8(opacity));
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        for c in 0..4 {
            d[c] = d[c].saturating_add(mul_div255_u8(u16::from(s[c]), op));
        }
        d[0] = d[0].min(d[3]);
        d[1] = d[1].min(d[3]);
        d[2] = d[2].min(d[3]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
