use super::*;

fn on_boundary(p: Point, rect: Rect, r: f64) -> bool {
    let eps = 1e-9;
    let cx = p.x.clamp(rect.x0 + r, rect.x1 - r);
    let cy = p.y.clamp(rect.y0 + r, rect.y1 - r);
    let d = Point::new(cx, cy).distance(p);
    let inside_band = p.x >= rect.x0 - eps
        && p.x <= rect.x1 + eps
        && p.y >= rect.y0 - eps
        && p.y <= rect.y1 + eps;
    inside_band && (d - r).abs() < 1e-6
}

#[test]
fn radius_is_clamped_to_half_the_short_side() {
    let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
    assert_eq!(clamp_corner_radius(rect, 10.0), 10.0);
    assert_eq!(clamp_corner_radius(rect, 35.0), 20.0);
    assert_eq!(clamp_corner_radius(rect, -4.0), 0.0);
    assert_eq!(clamp_corner_radius(rect, f64::NAN), 0.0);
    assert_eq!(clamp_corner_radius(Rect::new(10.0, 10.0, 0.0, 0.0), 8.0), 5.0);
}

#[test]
fn segments_follow_fixed_order_and_lengths() {
    let segs = outline_segments(Rect::new(0.0, 0.0, 200.0, 100.0), 10.0);
    let kinds: Vec<bool> = segs.iter().map(OutlineSegment::is_corner).collect();
    assert_eq!(
        kinds,
        vec![true, false, true, false, true, false, true, false]
    );
    assert!((segs[1].length() - 180.0).abs() < 1e-12);
    assert!((segs[3].length() - 80.0).abs() < 1e-12);
    assert!((segs[0].length() - 10.0 * std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert_eq!(segs[0].steps(), 15);

    let total: f64 = segs.iter().map(OutlineSegment::length).sum();
    let expected = 2.0 * (200.0 + 100.0 - 40.0) + 2.0 * std::f64::consts::PI * 10.0;
    assert!((total - expected).abs() < 1e-9);
}

#[test]
fn segments_chain_end_to_start() {
    let segs = outline_segments(Rect::new(5.0, 7.0, 125.0, 67.0), 12.0);
    for i in 0..segs.len() {
        let end = segs[i].point_at(1.0, 0.0);
        let next = segs[(i + 1) % segs.len()].point_at(0.0, 0.0);
        assert!(end.distance(next) < 1e-9, "segment {i} ends at {end:?}");
    }
}

#[test]
fn edge_phase_offsets_are_local_to_top_and_left() {
    let segs = outline_segments(Rect::new(0.0, 0.0, 50.0, 50.0), 5.0);
    let offsets: Vec<f64> = segs
        .iter()
        .filter_map(|s| match *s {
            OutlineSegment::Edge { phase_offset, .. } => Some(phase_offset),
            OutlineSegment::Corner { .. } => None,
        })
        .collect();
    assert_eq!(
        offsets,
        vec![TOP_EDGE_PHASE_OFFSET, 0.0, 0.0, LEFT_EDGE_PHASE_OFFSET]
    );
}

#[test]
fn outward_displacement_grows_the_outline() {
    let segs = outline_segments(Rect::new(0.0, 0.0, 100.0, 100.0), 10.0);
    assert_eq!(segs[1].point_at(0.5, 2.0), Point::new(50.0, -2.0));
    assert_eq!(segs[3].point_at(0.5, 2.0), Point::new(102.0, 50.0));
    assert_eq!(segs[5].point_at(0.5, 2.0), Point::new(50.0, 102.0));
    assert_eq!(segs[7].point_at(0.5, 2.0), Point::new(-2.0, 50.0));
}

#[test]
fn plain_contour_samples_lie_on_the_boundary() {
    let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
    let c = rounded_rect_contour(rect, 10.0);
    assert!(!c.is_empty());
    for &p in &c.points {
        assert!(on_boundary(p, rect, 10.0), "{p:?} is off the boundary");
    }
    assert!(c.closing_gap() < 1e-9);
}

#[test]
fn zero_step_segments_emit_their_end_point() {
    let params: Vec<f64> = sample_params(0).collect();
    assert_eq!(params, vec![1.0]);
    let params: Vec<f64> = sample_params(2).collect();
    assert_eq!(params, vec![0.0, 0.5, 1.0]);

    // Square corners: each corner collapses to its vertex.
    let c = rounded_rect_contour(Rect::new(0.0, 0.0, 4.0, 4.0), 0.0);
    assert_eq!(c.points[0], Point::new(0.0, 0.0));
    assert!(c.closing_gap() < 1e-12);
}

#[test]
fn rounded_rect_path_is_closed_and_clamped() {
    let p = rounded_rect_path(Rect::new(0.0, 0.0, 40.0, 20.0), 50.0);
    assert_eq!(p.elements().last(), Some(&kurbo::PathEl::ClosePath));
    let bb = p.bounding_box();
    assert!((bb.width() - 40.0).abs() < 1e-6);
    assert!((bb.height() - 20.0).abs() < 1e-6);
}
