use wallkit_designer::model::{Point, Wall};
use wallkit_designer::topology::{TopologyIndex, WallRef};
use wallkit_designer::wall_polygon::{build_outline, build_outlines, miter_corner, JoinKind};
use wallkit_settings::DesignerConfig;

fn close(a: Point, b: Point) -> bool {
    a.distance_to(&b) < 1e-6
}

fn square_room(thickness: f64) -> Vec<Wall> {
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(1000.0, 0.0),
        Point::new(1000.0, 1000.0),
        Point::new(0.0, 1000.0),
    ];
    (0..4)
        .map(|i| Wall::new(corners[i], corners[(i + 1) % 4], thickness))
        .collect()
}

#[test]
fn test_square_room_is_mitered_at_every_corner() {
    let outlines = build_outlines(&square_room(30.0), None, &DesignerConfig::default());
    assert_eq!(outlines.len(), 4);

    let bottom = &outlines[0];
    assert!(close(bottom.points[0], Point::new(15.0, 15.0)));
    assert!(close(bottom.points[1], Point::new(985.0, 15.0)));
    assert!(close(bottom.points[2], Point::new(1015.0, -15.0)));
    assert!(close(bottom.points[3], Point::new(-15.0, -15.0)));
    // trapezoid with parallel sides 970 and 1030
    assert!((bottom.area() - 30_000.0).abs() < 1e-6);

    for outline in &outlines {
        assert_eq!(outline.start_joins, [JoinKind::Mitered, JoinKind::Mitered]);
        assert_eq!(outline.end_joins, [JoinKind::Mitered, JoinKind::Mitered]);
    }
}

#[test]
fn test_walls_of_different_thickness_share_corners() {
    let walls = vec![
        Wall::new(Point::new(0.0, 0.0), Point::new(1000.0, 0.0), 30.0),
        Wall::new(Point::new(1000.0, 0.0), Point::new(1000.0, 1000.0), 10.0),
    ];
    let outlines = build_outlines(&walls, None, &DesignerConfig::default());

    assert!(close(outlines[0].points[1], Point::new(995.0, 15.0)));
    assert!(close(outlines[0].points[2], Point::new(1005.0, -15.0)));
    assert!(close(outlines[1].points[0], Point::new(995.0, 15.0)));
    assert!(close(outlines[1].points[3], Point::new(1005.0, -15.0)));
}

#[test]
fn test_reversed_neighbor_gives_the_same_corner() {
    // second wall drawn towards the junction instead of away from it
    let walls = vec![
        Wall::new(Point::new(0.0, 0.0), Point::new(1000.0, 0.0), 30.0),
        Wall::new(Point::new(1000.0, 1000.0), Point::new(1000.0, 0.0), 30.0),
    ];
    let outlines = build_outlines(&walls, None, &DesignerConfig::default());
    assert!(close(outlines[0].points[1], Point::new(985.0, 15.0)));
    assert!(close(outlines[0].points[2], Point::new(1015.0, -15.0)));
}

#[test]
fn test_outline_of_single_wall_from_index() {
    let walls = square_room(20.0);
    let index = TopologyIndex::new(&walls, None, &DesignerConfig::default());
    let outline = build_outline(&index, WallRef::Committed(2), 5.0);

    assert_eq!(outline.wall, WallRef::Committed(2));
    assert!(outline.contains(&Point::new(500.0, 1000.0)));
    assert!(!outline.contains(&Point::new(500.0, 1020.0)));
}

#[test]
fn test_four_way_junction_stays_finite() {
    let walls = vec![
        Wall::new(Point::new(0.0, 0.0), Point::new(500.0, 0.0), 30.0),
        Wall::new(Point::new(0.0, 0.0), Point::new(-500.0, 0.0), 30.0),
        Wall::new(Point::new(0.0, 0.0), Point::new(0.0, 500.0), 30.0),
        Wall::new(Point::new(0.0, 0.0), Point::new(0.0, -500.0), 30.0),
    ];
    let outlines = build_outlines(&walls, None, &DesignerConfig::default());
    let junction = Point::ORIGIN;
    for outline in &outlines {
        for p in &outline.points {
            assert!(p.is_finite());
        }
        for p in [outline.points[0], outline.points[3]] {
            assert!(p.distance_to(&junction) <= 5.0 * 15.0 + 1e-9);
        }
    }
}

#[test]
fn test_miter_corner_fallbacks() {
    let junction = Point::new(0.0, 0.0);

    let parallel = miter_corner(
        &junction,
        &Point::new(1.0, 0.0),
        &Point::new(0.0, 15.0),
        &Point::new(-1.0, 0.0),
        &Point::new(0.0, 15.0),
        75.0,
    );
    assert_eq!(parallel.kind, JoinKind::Parallel);
    assert!(close(parallel.point, Point::new(0.0, 15.0)));

    let right_angle = miter_corner(
        &junction,
        &Point::new(1.0, 0.0),
        &Point::new(0.0, 15.0),
        &Point::new(0.0, 1.0),
        &Point::new(15.0, 0.0),
        75.0,
    );
    assert_eq!(right_angle.kind, JoinKind::Mitered);
    assert!(close(right_angle.point, Point::new(15.0, 15.0)));
}
