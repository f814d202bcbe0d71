use wallkit_designer::merge::{merge_outlines, merge_polygons, merge_walls};
use wallkit_designer::model::{Point, Wall};
use wallkit_designer::wall_polygon::build_outlines;
use wallkit_settings::DesignerConfig;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x + w, y + h),
        Point::new(x, y + h),
    ]
}

#[test]
fn test_union_is_order_independent() {
    let a = rect(0.0, 0.0, 100.0, 100.0);
    let b = rect(50.0, 50.0, 100.0, 100.0);
    let c = rect(300.0, 0.0, 10.0, 10.0);

    let forward = merge_polygons(&[a.clone(), b.clone(), c.clone()]);
    let backward = merge_polygons(&[c, b, a]);

    assert_eq!(forward.polygons.len(), backward.polygons.len());
    assert!((forward.area() - backward.area()).abs() < 1e-3);
    assert!((forward.area() - (10_000.0 + 10_000.0 - 2_500.0 + 100.0)).abs() < 1e-3);
}

#[test]
fn test_clockwise_input_is_accepted() {
    let mut cw = rect(0.0, 0.0, 10.0, 10.0);
    cw.reverse();
    let merged = merge_polygons(&[cw]);
    assert!((merged.area() - 100.0).abs() < 1e-6);
}

#[test]
fn test_l_shape_has_no_notch_or_overlap() {
    let walls = vec![
        Wall::new(Point::new(0.0, 0.0), Point::new(1000.0, 0.0), 30.0),
        Wall::new(Point::new(1000.0, 0.0), Point::new(1000.0, 1000.0), 30.0),
    ];
    let config = DesignerConfig::default();
    let silhouette = merge_walls(&walls, None, &config);

    assert_eq!(silhouette.polygons.len(), 1);
    assert_eq!(silhouette.hole_count(), 0);
    // the outer corner is filled
    assert!(silhouette.contains(&Point::new(1010.0, -10.0)));
    // mitered outlines tile the corner exactly, so areas add up
    let outline_area: f64 = build_outlines(&walls, None, &config)
        .iter()
        .map(|o| o.area())
        .sum();
    assert!((silhouette.area() - outline_area).abs() < 1e-3);
}

#[test]
fn test_preview_is_included_when_given() {
    let walls = vec![Wall::new(Point::new(0.0, 0.0), Point::new(1000.0, 0.0), 30.0)];
    let preview = Wall::new(Point::new(1000.0, 0.0), Point::new(1000.0, 500.0), 30.0);
    let config = DesignerConfig::default();

    let without = merge_walls(&walls, None, &config);
    let with = merge_walls(&walls, Some(&preview), &config);
    assert!(with.area() > without.area());
    assert!(with.contains(&Point::new(1000.0, 400.0)));
    assert!(!without.contains(&Point::new(1000.0, 400.0)));
}

#[test]
fn test_path_data_contains_hole_subpath() {
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(1000.0, 0.0),
        Point::new(1000.0, 1000.0),
        Point::new(0.0, 1000.0),
    ];
    let walls: Vec<Wall> = (0..4)
        .map(|i| Wall::new(corners[i], corners[(i + 1) % 4], 30.0))
        .collect();
    let silhouette = merge_outlines(&build_outlines(&walls, None, &DesignerConfig::default()));

    let data = silhouette.to_path_data();
    assert_eq!(data.matches('M').count(), 2);
    assert_eq!(data.matches('Z').count(), 2);
}

#[test]
fn test_empty_wall_list_gives_empty_silhouette() {
    let silhouette = merge_walls(&[], None, &DesignerConfig::default());
    assert!(silhouette.is_empty());
    assert_eq!(silhouette.to_path_data(), "");
    assert_eq!(silhouette.area(), 0.0);
}
