use wallkit_designer::model::{Bounds, Point};
use wallkit_designer::viewport::{Viewport, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP};

fn close(a: Point, b: Point) -> bool {
    a.distance_to(&b) < 1e-9
}

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(1200.0, 800.0);
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan(), Point::new(0.0, 0.0));
    assert_eq!(vp.canvas_width(), 1200.0);
    assert_eq!(vp.canvas_height(), 800.0);
}

#[test]
fn test_model_screen_round_trip_with_zoom_and_pan() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_zoom(2.0);
    vp.set_pan(100.0, -50.0);

    let screen = vp.model_to_screen(&Point::new(10.0, 20.0));
    assert!(close(screen, Point::new(120.0, -10.0)));
    assert!(close(vp.screen_to_model(&screen), Point::new(10.0, 20.0)));
}

#[test]
fn test_zoom_is_clamped() {
    let mut vp = Viewport::default();
    vp.set_zoom(1e6);
    assert_eq!(vp.zoom(), MAX_ZOOM);
    vp.set_zoom(0.0);
    assert_eq!(vp.zoom(), MIN_ZOOM);
    vp.set_zoom(f64::NAN);
    assert_eq!(vp.zoom(), MIN_ZOOM);
}

#[test]
fn test_wheel_zooms_around_cursor() {
    let mut vp = Viewport::default();
    let cursor = Point::new(300.0, 200.0);
    let under_cursor = vp.screen_to_model(&cursor);

    vp.wheel(&cursor, -1.0);
    assert!((vp.zoom() - WHEEL_ZOOM_STEP).abs() < 1e-12);
    assert!(close(vp.screen_to_model(&cursor), under_cursor));

    vp.wheel(&cursor, 1.0);
    assert!((vp.zoom() - 1.0).abs() < 1e-12);
    assert!(close(vp.screen_to_model(&cursor), under_cursor));

    vp.wheel(&cursor, 0.0);
    assert!((vp.zoom() - 1.0).abs() < 1e-12);
}

#[test]
fn test_drag_keeps_anchor_under_pointer() {
    let mut vp = Viewport::default();
    vp.set_zoom(2.0);
    let anchor = vp.screen_to_model(&Point::new(100.0, 100.0));

    // pointer moves 40 px right and 10 px down
    let current = vp.screen_to_model(&Point::new(140.0, 110.0));
    vp.drag(&anchor, &current);

    assert!(close(vp.model_to_screen(&anchor), Point::new(140.0, 110.0)));
}

#[test]
fn test_fit_to_bounds_centers_content() {
    let mut vp = Viewport::new(1000.0, 500.0);
    let bounds = Bounds::new(0.0, 0.0, 2000.0, 2000.0);
    vp.fit_to_bounds(&bounds, 0.0);

    assert!((vp.zoom() - 0.25).abs() < 1e-12);
    assert!(close(
        vp.model_to_screen(&bounds.center()),
        Point::new(500.0, 250.0)
    ));
}

#[test]
fn test_fit_to_empty_bounds_is_ignored() {
    let mut vp = Viewport::default();
    vp.fit_to_bounds(&Bounds::new(5.0, 5.0, 5.0, 5.0), 0.1);
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan(), Point::new(0.0, 0.0));
}

#[test]
fn test_reset() {
    let mut vp = Viewport::default();
    vp.set_zoom(3.0);
    vp.pan_by(10.0, 20.0);
    vp.reset();
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan(), Point::new(0.0, 0.0));
    assert_eq!(vp.to_string(), "Zoom: 1.00x | Pan: (0.0, 0.0)");
}
