use wallkit_designer::history::History;
use wallkit_designer::model::{Point, Wall};
use wallkit_designer::DesignerState;

fn wall(x: f64) -> Wall {
    Wall::new(Point::new(x, 0.0), Point::new(x + 100.0, 0.0), 30.0)
}

#[test]
fn test_cursor_stays_valid_at_both_ends() {
    let mut history = History::new(&[]);
    history.record(&[wall(0.0)]);

    assert!(history.undo().is_empty());
    assert!(history.undo().is_empty());
    assert_eq!(history.cursor(), 0);

    assert_eq!(history.redo().len(), 1);
    assert_eq!(history.redo().len(), 1);
    assert_eq!(history.cursor(), 1);
    assert!(!history.can_redo());
}

#[test]
fn test_reset_discards_everything() {
    let mut history = History::new(&[]);
    history.record(&[wall(0.0)]);
    history.record(&[wall(0.0), wall(200.0)]);

    history.reset(&[wall(500.0)]);
    assert_eq!(history.len(), 1);
    assert!(!history.can_undo());
    assert_eq!(history.current(), vec![wall(500.0)]);
}

#[test]
fn test_undo_after_new_edit_cannot_redo_old_branch() {
    let mut history = History::new(&[]);
    history.record(&[wall(0.0)]);
    history.record(&[wall(0.0), wall(200.0)]);
    history.undo();
    history.record(&[wall(0.0), wall(900.0)]);

    assert_eq!(history.len(), 3);
    assert!(!history.can_redo());
    assert_eq!(history.undo(), vec![wall(0.0)]);
    assert_eq!(history.redo(), vec![wall(0.0), wall(900.0)]);
}

#[test]
fn test_designer_records_one_entry_per_commit() {
    let mut state = DesignerState::new();
    assert_eq!(state.history().len(), 1);

    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_down(Point::new(500.0, 100.0));
    state.pointer_down(Point::new(500.0, 600.0));

    assert_eq!(state.walls().len(), 2);
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.history().cursor(), 2);
}

#[test]
fn test_designer_history_limit() {
    let mut config = wallkit_settings::DesignerConfig::default();
    config.history_limit = Some(3);
    let mut state = DesignerState::with_config(config);

    state.pointer_down(Point::new(0.0, 0.0));
    for i in 1..=5 {
        state.pointer_down(Point::new(300.0 * i as f64, 250.0 * (i % 2) as f64));
    }
    assert_eq!(state.walls().len(), 5);
    assert_eq!(state.history().len(), 3);

    state.undo();
    state.undo();
    assert!(!state.can_undo());
    assert_eq!(state.walls().len(), 3);
}

#[test]
fn test_default_history_keeps_every_commit() {
    let mut state = DesignerState::new();
    for i in 0..210 {
        let y = 100.0 * i as f64;
        state.pointer_down(Point::new(0.0, y));
        state.pointer_down(Point::new(500.0, y));
        state.cancel();
    }
    assert_eq!(state.walls().len(), 210);

    for _ in 0..210 {
        state.undo();
    }
    assert!(state.walls().is_empty());
    assert!(!state.can_undo());
}
