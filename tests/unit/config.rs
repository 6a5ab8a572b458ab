use super::*;
use crate::foundation::core::Winding;

#[test]
fn empty_object_is_the_default_config() {
    let cfg = GlowConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, GlowConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = GlowConfig::from_json_str(
        r#"{
            "canvas": { "width": 200, "height": 100 },
            "content_margin": 10,
            "glow": {
                "corner_radius": 12,
                "wave": { "amplitude": 4, "winding": "counter_clockwise" },
                "rings": [ { "width": 3, "blur_radius": 6 } ]
            },
            "timing": { "phase_interval_ms": 40 }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.content_bounds(), Rect::new(10.0, 10.0, 190.0, 90.0));
    assert_eq!(cfg.glow.wave.amplitude, 4.0);
    assert_eq!(cfg.glow.wave.frequency, 1.0);
    assert_eq!(cfg.glow.wave.winding, Winding::CounterClockwise);
    assert_eq!(cfg.glow.rings.len(), 1);
    assert_eq!(cfg.glow.rings[0].opacity, 1.0);
    assert_eq!(cfg.glow.rim_widths, ThinkingGlow::default().rim_widths);

    let schedule = cfg.timing.schedule();
    assert_eq!(schedule.phase_interval, Duration::from_millis(40));
    assert_eq!(schedule.mesh_interval, TickSchedule::default().mesh_interval);
}

#[test]
fn rejects_bad_values() {
    for (json, needle) in [
        (r#"{ "canvas": { "width": 0, "height": 10 } }"#, "canvas"),
        (r#"{ "canvas": { "width": 70000, "height": 10 } }"#, "canvas"),
        (r#"{ "content_margin": 500 }"#, "content_margin"),
        (r#"{ "glow": { "corner_radius": -1 } }"#, "corner_radius"),
        (r#"{ "glow": { "rings": [ { "width": 0 } ] } }"#, "rings[0].width"),
        (r#"{ "glow": { "rings": [ { "opacity": 1.5 } ] } }"#, "rings[0].opacity"),
        (r#"{ "glow": { "rim_opacity": -0.1 } }"#, "rim_opacity"),
        (r#"{ "timing": { "mesh_interval_ms": 0 } }"#, "timing"),
    ] {
        let err = GlowConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, GlowError::Config(_)), "{json}: {err}");
        assert!(err.to_string().contains(needle), "{json}: {err}");
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        GlowConfig::from_json_str("{ nope").unwrap_err(),
        GlowError::Serde(_)
    ));
    assert!(matches!(
        GlowConfig::from_json_str(r#"{ "unknown_field": 1 }"#).unwrap_err(),
        GlowError::Serde(_)
    ));
}

#[test]
fn pretty_json_reloads() {
    let mut cfg = GlowConfig::default();
    cfg.canvas.width = 320;
    cfg.glow.corner_radius = 9.5;
    cfg.glow.rings.truncate(2);
    let s = cfg.to_json_pretty().unwrap();
    let back = GlowConfig::from_json_str(&s).unwrap();
    assert_eq!(back.canvas, cfg.canvas);
    assert_eq!(back.glow.corner_radius, 9.5);
    assert_eq!(back.glow.rings.len(), 2);
    assert_eq!(back.glow.rings[1].blend, cfg.glow.rings[1].blend);
    assert!((back.timing.mesh_speed - cfg.timing.mesh_speed).abs() < 1e-12);
}

#[test]
fn load_reads_file_and_reports_missing() {
    let dir = std::env::temp_dir().join(format!("wavyglow-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("glow.json");
    std::fs::write(&path, r#"{ "background": [255, 0, 0, 128] }"#).unwrap();

    let cfg = GlowConfig::load(&path).unwrap();
    assert_eq!(
        cfg.background_color(),
        Rgba8Premul::from_straight_rgba(255, 0, 0, 128)
    );
    let frame = cfg.base_frame().unwrap();
    assert_eq!(frame.canvas(), cfg.canvas);

    let err = GlowConfig::load(&dir.join("missing.json")).unwrap_err();
    assert!(matches!(err, GlowError::Config(_)));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn driver_uses_timing() {
    let mut cfg = GlowConfig::default();
    cfg.timing.phase_step = 0.5;
    let d = cfg.driver().unwrap();
    assert!(!d.is_running());
    assert_eq!(d.schedule().phase_step, 0.5);
}
