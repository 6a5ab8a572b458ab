use std::path::Path;
use std::time::Duration;

use crate::effect::driver::{GlowDriver, TickSchedule};
use crate::effect::glow::ThinkingGlow;
use crate::foundation::core::{Canvas, Rect, Rgba8Premul};
use crate::foundation::error::{GlowError, GlowResult};
use crate::render::frame::FrameRGBA;

/// Largest canvas side accepted by the CPU rasterizer.
pub const MAX_CANVAS_SIDE: u32 = u16::MAX as u32;

/// Timer settings in serializable units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub phase_interval_ms: u64,
    pub phase_step: f64,
    pub mesh_interval_ms: u64,
    pub mesh_speed: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let s = TickSchedule::default();
        Self {
            phase_interval_ms: s.phase_interval.as_millis() as u64,
            phase_step: s.phase_step,
            mesh_interval_ms: s.mesh_interval.as_millis() as u64,
            mesh_speed: s.mesh_speed,
        }
    }
}

impl TimingConfig {
    pub fn schedule(&self) -> TickSchedule {
        TickSchedule {
            phase_interval: Duration::from_millis(self.phase_interval_ms),
            phase_step: self.phase_step,
            mesh_interval: Duration::from_millis(self.mesh_interval_ms),
            mesh_speed: self.mesh_speed,
        }
    }
}

/// Everything needed to render the glow offline: canvas, content placement, preset and timing.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlowConfig {
    pub canvas: Canvas,
    /// Gap between the canvas edge and the content bounds the glow wraps.
    pub content_margin: f64,
    /// Straight-alpha RGBA background.
    pub background: [u8; 4],
    pub glow: ThinkingGlow,
    pub timing: TimingConfig,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 480,
                height: 320,
            },
            content_margin: 48.0,
            background: [10, 10, 16, 255],
            glow: ThinkingGlow::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl GlowConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> GlowResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| GlowError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> GlowResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            GlowError::config(format!("failed to read '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_json_str(&s)?;
        tracing::debug!(
            width = cfg.canvas.width,
            height = cfg.canvas.height,
            rings = cfg.glow.rings.len(),
            "loaded glow config"
        );
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> GlowResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GlowError::serde(e.to_string()))
    }

    pub fn validate(&self) -> GlowResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(GlowError::config("canvas width/height must be > 0"));
        }
        if self.canvas.width > MAX_CANVAS_SIDE || self.canvas.height > MAX_CANVAS_SIDE {
            return Err(GlowError::config(format!(
                "canvas sides must be <= {MAX_CANVAS_SIDE}"
            )));
        }
        if !self.content_margin.is_finite() || self.content_margin < 0.0 {
            return Err(GlowError::config("content_margin must be finite and >= 0"));
        }
        let bounds = self.content_bounds();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(GlowError::config("content_margin leaves no room for content"));
        }

        let glow = &self.glow;
        for (name, value) in [
            ("glow.corner_radius", glow.corner_radius),
            ("glow.inset", glow.inset),
            ("glow.wave.amplitude", glow.wave.amplitude),
            ("glow.wave.frequency", glow.wave.frequency),
            ("glow.wave.phase", glow.wave.phase),
        ] {
            if !value.is_finite() {
                return Err(GlowError::config(format!("{name} must be finite")));
            }
        }
        if glow.corner_radius < 0.0 {
            return Err(GlowError::config("glow.corner_radius must be >= 0"));
        }
        if glow.rim_widths.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(GlowError::config("glow.rim_widths must be finite and >= 0"));
        }
        check_opacity("glow.rim_opacity", glow.rim_opacity)?;

        for (i, ring) in glow.rings.iter().enumerate() {
            if !ring.width.is_finite() || ring.width <= 0.0 {
                return Err(GlowError::config(format!(
                    "glow.rings[{i}].width must be finite and > 0"
                )));
            }
            if !ring.blur_radius.is_finite() || ring.blur_radius < 0.0 {
                return Err(GlowError::config(format!(
                    "glow.rings[{i}].blur_radius must be finite and >= 0"
                )));
            }
            if !ring.amplitude_scale.is_finite() || !ring.phase_offset.is_finite() {
                return Err(GlowError::config(format!(
                    "glow.rings[{i}] amplitude_scale/phase_offset must be finite"
                )));
            }
            check_opacity(&format!("glow.rings[{i}].opacity"), ring.opacity)?;
        }

        self.timing
            .schedule()
            .validate()
            .map_err(|e| GlowError::config(format!("timing: {e}")))
    }

    /// Content rectangle the glow outlines.
    pub fn content_bounds(&self) -> Rect {
        self.canvas.rect().inset(-self.content_margin)
    }

    pub fn background_color(&self) -> Rgba8Premul {
        let [r, g, b, a] = self.background;
        Rgba8Premul::from_straight_rgba(r, g, b, a)
    }

    pub fn base_frame(&self) -> GlowResult<FrameRGBA> {
        FrameRGBA::solid(self.canvas, self.background_color())
    }

    /// Stopped driver for this configuration.
    pub fn driver(&self) -> GlowResult<GlowDriver> {
        GlowDriver::new(self.timing.schedule())
    }
}

fn check_opacity(name: &str, v: f32) -> GlowResult<()> {
    if !(0.0..=1.0).contains(&v) {
        return Err(GlowError::config(format!("{name} must be in [0, 1]")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
