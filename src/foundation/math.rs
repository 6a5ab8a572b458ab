use std::f64::consts::TAU;

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn unit_to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Phase advance contributed by a stretch of `length` at the normalized frequency.
pub(crate) fn phase_advance(length: f64, adjusted_frequency: f64) -> f64 {
    length * adjusted_frequency * TAU
}

/// Sample count for a segment: its length truncated toward zero. Non-finite or negative
/// lengths produce zero steps.
pub(crate) fn step_count(length: f64) -> usize {
    if length.is_finite() && length > 0.0 {
        length.trunc() as usize
    } else {
        0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
