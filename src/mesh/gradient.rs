//! Animated 3x3 mesh gradient used as the glow's color source.
//!
//! Control points live in unit space (`0..1` on both axes, y down). Seven of the nine points
//! drift on bounded sine oscillators driven by a shared timer; the top-left and bottom-right
//! corners stay pinned.

use crate::foundation::core::{Canvas, Point, Rgba8Premul};
use crate::foundation::error::GlowResult;
use crate::foundation::math::unit_to_u8;

/// Time scalars consumed by [`MeshGradient::at`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeshClock {
    pub timer: f64,
    /// Timer increment per mesh tick.
    pub speed: f64,
}

impl Default for MeshClock {
    fn default() -> Self {
        Self {
            timer: 0.0,
            speed: 0.02,
        }
    }
}

impl MeshClock {
    pub fn step(&mut self) {
        self.step_by(1);
    }

    /// Same as `ticks` calls to [`step`](Self::step).
    pub fn step_by(&mut self, ticks: u64) {
        self.timer += self.speed * ticks as f64;
    }
}

/// Colors of the nine control points, row-major.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeshPalette {
    pub colors: [Rgba8Premul; 9],
}

impl Default for MeshPalette {
    fn default() -> Self {
        let c = Rgba8Premul::from_straight_rgba;
        Self {
            colors: [
                c(88, 120, 255, 255),
                c(160, 96, 255, 255),
                c(255, 110, 196, 255),
                c(64, 196, 255, 255),
                c(236, 240, 255, 255),
                c(255, 146, 110, 255),
                c(132, 92, 255, 255),
                c(72, 150, 255, 255),
                c(255, 96, 160, 255),
            ],
        }
    }
}

/// `lo..hi` swept by `sin(t * rate + offset)`.
fn oscillate(lo: f64, hi: f64, offset: f64, rate: f64, t: f64) -> f64 {
    lo + (hi - lo) * ((t * rate + offset).sin() + 1.0) * 0.5
}

/// Control point positions at `timer`, row-major.
pub fn control_points(timer: f64) -> [Point; 9] {
    let t = timer;
    [
        Point::new(0.0, 0.0),
        Point::new(oscillate(0.3, 0.7, 0.4, 0.8, t), 0.0),
        Point::new(1.0, oscillate(0.0, 0.2, 1.1, 0.6, t)),
        Point::new(0.0, oscillate(0.35, 0.65, 2.0, 0.7, t)),
        Point::new(
            oscillate(0.2, 0.8, 0.0, 1.3, t),
            oscillate(0.25, 0.75, 1.7, 1.1, t),
        ),
        Point::new(1.0, oscillate(0.3, 0.7, 0.9, 1.0, t)),
        Point::new(oscillate(0.0, 0.2, 2.6, 0.5, t), 1.0),
        Point::new(oscillate(0.3, 0.7, 3.1, 0.9, t), 1.0),
        Point::new(1.0, 1.0),
    ]
}

/// Row-major triangle fan over the 2x2 cells of the grid.
const TRIANGLES: [[usize; 3]; 8] = [
    [0, 1, 4],
    [0, 4, 3],
    [1, 2, 5],
    [1, 5, 4],
    [3, 4, 7],
    [3, 7, 6],
    [4, 5, 8],
    [4, 8, 7],
];

#[derive(Clone, Debug, PartialEq)]
pub struct MeshGradient {
    pub points: [Point; 9],
    pub colors: [Rgba8Premul; 9],
}

impl MeshGradient {
    pub fn at(timer: f64, palette: &MeshPalette) -> Self {
        Self {
            points: control_points(timer),
            colors: palette.colors,
        }
    }

    /// Premultiplied color at unit-space `p`, channels in `0..1`.
    pub fn color_at(&self, p: Point) -> [f32; 4] {
        for tri in TRIANGLES {
            if let Some(w) = barycentric(p, self.points[tri[0]], self.points[tri[1]], self.points[tri[2]])
            {
                let mut out = [0.0f32; 4];
                for (k, &idx) in tri.iter().enumerate() {
                    let c = self.colors[idx].to_array();
                    for ch in 0..4 {
                        out[ch] += w[k] as f32 * f32::from(c[ch]) / 255.0;
                    }
                }
                return out;
            }
        }

        // Outside the mesh (an edge point drifted inward): nearest control point.
        let nearest = self
            .points
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.distance_squared(p).total_cmp(&b.1.distance_squared(p)))
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.colors[nearest].to_array().map(|c| f32::from(c) / 255.0)
    }

    /// Premultiplied RGBA8 rendering of the mesh stretched over `canvas`.
    pub fn rasterize(&self, canvas: Canvas) -> GlowResult<Vec<u8>> {
        let mut out = vec![0u8; canvas.byte_len()?];
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        for (i, px) in out.chunks_exact_mut(4).enumerate() {
            let x = (i % canvas.width as usize) as f64;
            let y = (i / canvas.width as usize) as f64;
            let c = self.color_at(Point::new((x + 0.5) / w, (y + 0.5) / h));
            for ch in 0..4 {
                px[ch] = unit_to_u8(c[ch]);
            }
            // Keep the premultiplied invariant after rounding.
            px[0] = px[0].min(px[3]);
            px[1] = px[1].min(px[3]);
            px[2] = px[2].min(px[3]);
        }
        Ok(out)
    }
}

/// Barycentric weights of `p` in triangle `abc`, if `p` lies inside (edges inclusive).
fn barycentric(p: Point, a: Point, b: Point, c: Point) -> Option<[f64; 3]> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;
    let den = v0.cross(v1);
    if den.abs() < 1e-12 {
        return None;
    }
    let wb = v2.cross(v1) / den;
    let wc = v0.cross(v2) / den;
    let wa = 1.0 - wb - wc;
    const EPS: f64 = -1e-9;
    (wa >= EPS && wb >= EPS && wc >= EPS).then_some([wa, wb, wc])
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/gradient.rs"]
mod tests;
