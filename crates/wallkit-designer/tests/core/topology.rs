use wallkit_designer::model::{Point, Wall, WallEnd};
use wallkit_designer::topology::{normalize_connections, Connectivity, TopologyIndex, WallRef};
use wallkit_settings::DesignerConfig;

fn wall(x1: f64, y1: f64, x2: f64, y2: f64) -> Wall {
    Wall::new(Point::new(x1, y1), Point::new(x2, y2), 30.0)
}

#[test]
fn test_t_junction_is_not_a_connection() {
    // stem ends on the middle of the bar, which has no endpoint there
    let walls = vec![wall(0.0, 0.0, 1000.0, 0.0), wall(500.0, 0.0, 500.0, 800.0)];
    let index = TopologyIndex::new(&walls, None, &DesignerConfig::default());

    assert_eq!(
        index.connectivity_at(&Point::new(500.0, 0.0)),
        Connectivity::Free
    );
    assert!(index
        .neighbor_at(&Point::new(500.0, 0.0), WallRef::Committed(1))
        .is_none());
}

#[test]
fn test_four_way_junction() {
    let walls = vec![
        wall(0.0, 0.0, 100.0, 0.0),
        wall(0.0, 0.0, -100.0, 0.0),
        wall(0.0, 0.0, 0.0, 100.0),
        wall(0.0, -100.0, 0.0, 0.0),
    ];
    let index = TopologyIndex::new(&walls, None, &DesignerConfig::default());
    assert_eq!(index.connectivity_at(&Point::ORIGIN), Connectivity::Junction(4));

    let first = index.neighbor_at(&Point::ORIGIN, WallRef::Committed(0)).unwrap();
    assert_eq!(first.wall, WallRef::Committed(1));
    assert_eq!(first.end, WallEnd::Start);
}

#[test]
fn test_endpoints_are_in_wall_order_with_preview_last() {
    let walls = vec![wall(500.0, 500.0, 0.0, 0.0), wall(-300.0, 0.0, 0.0, 0.0)];
    let preview = wall(0.0, 0.0, 0.0, 700.0);
    let index = TopologyIndex::new(&walls, Some(&preview), &DesignerConfig::default());

    let order: Vec<(WallRef, WallEnd)> = index.endpoints().iter().map(|e| (e.wall, e.end)).collect();
    assert_eq!(
        order,
        vec![
            (WallRef::Committed(0), WallEnd::Start),
            (WallRef::Committed(0), WallEnd::End),
            (WallRef::Committed(1), WallEnd::Start),
            (WallRef::Committed(1), WallEnd::End),
            (WallRef::Preview, WallEnd::Start),
            (WallRef::Preview, WallEnd::End),
        ]
    );
    assert_eq!(index.degree_at(&Point::ORIGIN), 3);
}

#[test]
fn test_connectivity_follows_coordinates_after_an_edit() {
    let mut walls = vec![wall(0.0, 0.0, 1000.0, 0.0), wall(1000.0, 0.0, 1000.0, 1000.0)];
    {
        let index = TopologyIndex::new(&walls, None, &DesignerConfig::default());
        assert_eq!(
            index.connectivity_at(&Point::new(1000.0, 0.0)),
            Connectivity::Junction(2)
        );
    }

    walls[1] = walls[1].with_endpoint(WallEnd::Start, Point::new(1000.0, 50.0));
    let index = TopologyIndex::new(&walls, None, &DesignerConfig::default());
    assert_eq!(
        index.connectivity_at(&Point::new(1000.0, 0.0)),
        Connectivity::Free
    );
}

#[test]
fn test_normalize_connections_uses_first_seen_point() {
    let mut walls = vec![
        wall(0.0, 0.0, 1000.002, 0.001),
        wall(999.998, -0.004, 1000.0, 1000.0),
        wall(1000.0, 1000.006, 0.0, 1000.0),
    ];
    let moved = normalize_connections(&mut walls, 0.01);

    assert_eq!(moved, 2);
    assert_eq!(walls[1].original_start, Point::new(1000.002, 0.001));
    assert_eq!(walls[2].original_start, Point::new(1000.0, 1000.0));
    assert!(walls.iter().all(|w| w.is_consistent()));
}

#[test]
fn test_normalize_connections_leaves_distant_points() {
    let mut walls = vec![wall(0.0, 0.0, 100.0, 0.0), wall(100.5, 0.0, 200.0, 0.0)];
    assert_eq!(normalize_connections(&mut walls, 0.01), 0);
    assert_eq!(walls[1].original_start, Point::new(100.5, 0.0));
}
