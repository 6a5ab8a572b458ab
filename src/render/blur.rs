//! Gaussian blur of single-channel coverage masks.
//!
//! Masks are one byte per pixel. Samples outside the canvas count as uncovered, so a shape
//! touching the border fades out instead of smearing its edge pixels inward.

use crate::foundation::error::{GlowError, GlowResult};

/// Kernel radius in pixels and sigma for a layer blur of `radius` (sigma = radius / 2,
/// kernel covers 3 sigma).
pub fn blur_params(radius: f64) -> Option<(u32, f32)> {
    if !radius.is_finite() || radius <= 0.0 {
        return None;
    }
    let sigma = radius * 0.5;
    let kernel_radius = (sigma * 3.0).ceil().max(1.0) as u32;
    Some((kernel_radius, sigma as f32))
}

/// Separable Gaussian blur of a `width * height` alpha mask.
pub fn blur_alpha_mask(
    mask: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> GlowResult<Vec<u8>> {
    let (w, h) = (width as usize, height as usize);
    if w.checked_mul(h) != Some(mask.len()) {
        return Err(GlowError::render("mask length does not match width*height"));
    }
    if radius == 0 || mask.is_empty() {
        return Ok(mask.to_vec());
    }
    let kernel = gaussian_weights(radius, sigma)?;

    let src: Vec<f32> = mask.iter().map(|&a| f32::from(a)).collect();
    let mut rows = vec![0f32; src.len()];
    for y in 0..h {
        let line = y * w..(y + 1) * w;
        convolve_line(&src[line.clone()], &mut rows[line], &kernel);
    }

    let mut column = vec![0f32; h];
    let mut blurred = vec![0f32; h];
    let mut out = vec![0u8; mask.len()];
    for x in 0..w {
        for (y, v) in column.iter_mut().enumerate() {
            *v = rows[y * w + x];
        }
        convolve_line(&column, &mut blurred, &kernel);
        for (y, v) in blurred.iter().enumerate() {
            out[y * w + x] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    Ok(out)
}

/// Normalized weights for offsets `-radius..=radius`.
fn gaussian_weights(radius: u32, sigma: f32) -> GlowResult<Vec<f32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(GlowError::validation("blur sigma must be > 0"));
    }
    let r = radius as i64;
    let two_sigma_sq = 2.0 * f64::from(sigma).powi(2);
    let raw: Vec<f64> = (-r..=r)
        .map(|i| (-((i * i) as f64) / two_sigma_sq).exp())
        .collect();
    let sum: f64 = raw.iter().sum();
    Ok(raw.into_iter().map(|v| (v / sum) as f32).collect())
}

/// 1D convolution with zero padding past both ends of `src`.
fn convolve_line(src: &[f32], dst: &mut [f32], kernel: &[f32]) {
    let n = src.len();
    let radius = kernel.len() / 2;
    for (i, out) in dst.iter_mut().enumerate().take(n) {
        let lo = i.saturating_sub(radius);
        let hi = (i + radius).min(n - 1);
        *out = (lo..=hi).map(|j| src[j] * kernel[j + radius - i]).sum();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
