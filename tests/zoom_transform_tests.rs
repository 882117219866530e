use approx::assert_relative_eq;
use market_scatter::core::{ContentBox, LogScale, ZoomTransform};

#[test]
fn invert_maps_screen_back_to_content() {
    let transform = ZoomTransform::new(10.0, 10.0, 2.0).expect("valid transform");
    assert_eq!(transform.invert((50.0, 50.0)), (20.0, 20.0));
    assert_eq!(transform.apply((20.0, 20.0)), (50.0, 50.0));
}

#[test]
fn identity_leaves_points_untouched() {
    let transform = ZoomTransform::IDENTITY;
    assert!(transform.is_identity());
    assert_eq!(transform.apply((12.5, 7.0)), (12.5, 7.0));
    assert_eq!(ZoomTransform::default(), ZoomTransform::IDENTITY);
}

#[test]
fn new_rejects_degenerate_values() {
    assert!(ZoomTransform::new(0.0, 0.0, 0.0).is_err());
    assert!(ZoomTransform::new(0.0, 0.0, -1.0).is_err());
    assert!(ZoomTransform::new(f64::NAN, 0.0, 1.0).is_err());
    assert!(ZoomTransform::new(0.0, f64::INFINITY, 1.0).is_err());
}

#[test]
fn zoom_to_keeps_anchor_under_pointer() {
    let start = ZoomTransform::new(-30.0, 15.0, 1.5).expect("valid transform");
    let anchor = (120.0, 80.0);
    let content = start.invert(anchor);

    let zoomed = start.zoom_to(4.0, anchor);
    assert_eq!(zoomed.k, 4.0);
    let (x, y) = zoomed.apply(content);
    assert_relative_eq!(x, anchor.0, epsilon = 1e-9);
    assert_relative_eq!(y, anchor.1, epsilon = 1e-9);
}

#[test]
fn pin_places_content_point_at_screen_point() {
    let transform = ZoomTransform::new(0.0, 0.0, 2.0).expect("valid transform");
    let pinned = transform.pin((100.0, 50.0), (150.0, 60.0));
    assert_eq!(pinned.k, 2.0);
    assert_eq!(pinned.apply((100.0, 50.0)), (150.0, 60.0));
}

#[test]
fn rescale_x_narrows_domain_to_visible_window() {
    let base = LogScale::new(1.0, 100.0, 0.0, 400.0).expect("valid scale");
    let transform = ZoomTransform::new(-200.0, 0.0, 2.0).expect("valid transform");

    let visible = transform.rescale_x(base).expect("rescale");
    let (start, end) = visible.domain();
    assert_relative_eq!(start, 10f64.sqrt(), max_relative = 1e-12);
    assert_relative_eq!(end, 10f64.powf(1.5), max_relative = 1e-12);
    assert_eq!(visible.range(), base.range());
    // The base scale itself is never mutated.
    assert_eq!(base.domain(), (1.0, 100.0));
}

#[test]
fn rescale_y_handles_descending_range() {
    let base = LogScale::new(10.0, 1000.0, 300.0, 0.0).expect("valid scale");
    let transform = ZoomTransform::new(0.0, -150.0, 2.0).expect("valid transform");

    let visible = transform.rescale_y(base).expect("rescale");
    let (start, end) = visible.domain();
    // Screen bottom (300) now shows content y=225, screen top shows y=75.
    assert_relative_eq!(start, 10f64.powf(1.5), max_relative = 1e-12);
    assert_relative_eq!(end, 10f64.powf(2.5), max_relative = 1e-12);
}

#[test]
fn constrain_keeps_window_inside_content() {
    let bounds = ContentBox::from_size(400.0, 300.0);
    let overshoot = ZoomTransform::new(90.0, -700.0, 2.0).expect("valid transform");
    let constrained = overshoot.constrain(bounds, bounds);

    assert_eq!(constrained.k, 2.0);
    assert_eq!(constrained.x, 0.0);
    assert_eq!(constrained.y, -300.0);
}

#[test]
fn constrain_is_a_no_op_inside_bounds() {
    let bounds = ContentBox::from_size(400.0, 300.0);
    let inside = ZoomTransform::new(-100.0, -50.0, 2.0).expect("valid transform");
    assert_eq!(inside.constrain(bounds, bounds), inside);
}
