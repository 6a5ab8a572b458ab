use super::*;

#[test]
fn winding_sign_and_flag_agree() {
    assert_eq!(Winding::from_clockwise(true), Winding::Clockwise);
    assert_eq!(Winding::from_clockwise(false), Winding::CounterClockwise);
    assert_eq!(Winding::Clockwise.sign(), 1.0);
    assert_eq!(Winding::CounterClockwise.sign(), -1.0);
    assert!(Winding::default().is_clockwise());
}

#[test]
fn winding_serializes_snake_case() {
    let s = serde_json::to_string(&Winding::CounterClockwise).unwrap();
    assert_eq!(s, "\"counter_clockwise\"");
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let fps = Fps::new(50, 1).unwrap();
    assert!((fps.frames_to_secs(5) - 0.1).abs() < 1e-12);
}

#[test]
fn canvas_rect_and_byte_len() {
    let c = Canvas {
        width: 8,
        height: 4,
    };
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 8.0, 4.0));
    assert_eq!(c.byte_len().unwrap(), 128);
}

#[test]
fn premul_scales_color_by_alpha() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c.to_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8Premul::transparent().to_array(), [0, 0, 0, 0]);
}
