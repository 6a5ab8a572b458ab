use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::foundation::error::{GlowError, GlowResult};

/// A rendered RGBA8 frame, row-major and tightly packed.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Frame filled with a single premultiplied color.
    pub fn solid(canvas: Canvas, color: Rgba8Premul) -> GlowResult<Self> {
        let len = canvas.byte_len()?;
        let mut data = vec![0u8; len];
        let px = color.to_array();
        for c in data.chunks_exact_mut(4) {
            c.copy_from_slice(&px);
        }
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }

    pub fn transparent(canvas: Canvas) -> GlowResult<Self> {
        Self::solid(canvas, Rgba8Premul::transparent())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub(crate) fn check_len(&self) -> GlowResult<()> {
        if self.data.len() != self.canvas().byte_len()? {
            return Err(GlowError::render(
                "frame data does not match width*height*4",
            ));
        }
        Ok(())
    }

    /// Straight-alpha copy of the pixels, for image encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
