use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn step_count_truncates_and_guards() {
    assert_eq!(step_count(180.9), 180);
    assert_eq!(step_count(0.99), 0);
    assert_eq!(step_count(-3.0), 0);
    assert_eq!(step_count(f64::NAN), 0);
    assert_eq!(step_count(f64::INFINITY), 0);
}

#[test]
fn phase_advance_is_linear_in_length() {
    let a = phase_advance(10.0, 0.01);
    let b = phase_advance(20.0, 0.01);
    assert!((b - 2.0 * a).abs() < 1e-12);
    assert!((phase_advance(100.0, 0.01) - std::f64::consts::TAU).abs() < 1e-12);
}

#[test]
fn unit_to_u8_clamps() {
    assert_eq!(unit_to_u8(-1.0), 0);
    assert_eq!(unit_to_u8(2.0), 255);
    assert_eq!(unit_to_u8(0.5), 128);
}
