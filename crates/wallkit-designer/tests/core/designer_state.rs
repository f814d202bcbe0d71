use wallkit_designer::model::Point;
use wallkit_designer::topology::Connectivity;
use wallkit_designer::{DesignerState, DrawingMode, InteractionState, Key, Modifiers};

#[test]
fn test_designer_state_creation() {
    let state = DesignerState::new();
    assert_eq!(state.mode(), DrawingMode::Wall);
    assert_eq!(state.state(), InteractionState::Idle);
    assert!(state.walls().is_empty());
    assert!(state.preview().is_none());
    assert!(state.snap_enabled());
    assert_eq!(state.current_thickness(), 30.0);
    assert!(!state.can_undo());
}

#[test]
fn test_first_click_starts_a_chain() {
    let mut state = DesignerState::new();
    assert!(state.pointer_down(Point::new(10.0, 20.0)).is_none());

    match state.state() {
        InteractionState::DrawingChain {
            segment_start,
            chain_start,
            thickness,
        } => {
            assert_eq!(segment_start, Point::new(10.0, 20.0));
            assert_eq!(chain_start, Point::new(10.0, 20.0));
            assert_eq!(thickness, 30.0);
        }
        other => panic!("unexpected state {:?}", other),
    }
    assert!(state.preview().is_some());
}

#[test]
fn test_escape_discards_preview() {
    let mut state = DesignerState::new();
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_move(Point::new(400.0, 300.0));
    assert!(state.key_down(Key::Escape, Modifiers::default()));

    assert_eq!(state.state(), InteractionState::Idle);
    assert!(state.preview().is_none());
    assert!(state.walls().is_empty());
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_switching_to_pan_cancels_the_chain() {
    let mut state = DesignerState::new();
    state.pointer_down(Point::new(0.0, 0.0));
    state.set_mode(DrawingMode::Pan);

    assert_eq!(state.state(), InteractionState::Panning { anchor: None });
    assert!(state.preview().is_none());

    state.set_mode(DrawingMode::Wall);
    assert_eq!(state.state(), InteractionState::Idle);
}

#[test]
fn test_pan_tool_drags_viewport() {
    let mut state = DesignerState::new();
    state.set_mode(DrawingMode::Pan);

    state.pointer_down(Point::new(100.0, 100.0));
    assert_eq!(
        state.state(),
        InteractionState::Panning {
            anchor: Some(Point::new(100.0, 100.0))
        }
    );
    state.pointer_move(Point::new(130.0, 90.0));
    assert_eq!(state.viewport().pan(), Point::new(30.0, -10.0));

    state.pointer_up(Point::new(130.0, 90.0));
    assert_eq!(state.state(), InteractionState::Panning { anchor: None });
}

#[test]
fn test_space_suspends_drawing_for_temporary_pan() {
    let mut state = DesignerState::new();
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_move(Point::new(300.0, 200.0));

    state.key_down(Key::Space, Modifiers::default());
    assert_eq!(state.mode(), DrawingMode::Pan);
    assert!(state.preview().is_some());

    state.key_up(Key::Space);
    assert_eq!(state.mode(), DrawingMode::Wall);
    assert!(state.is_drawing());
}

#[test]
fn test_hover_highlights_nearby_endpoint() {
    let mut state = DesignerState::new();
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_down(Point::new(1000.0, 0.0));
    state.key_down(Key::Escape, Modifiers::default());

    state.pointer_move(Point::new(1004.0, 3.0));
    assert_eq!(state.hovered_vertex(), Some(Point::new(1000.0, 0.0)));

    state.pointer_move(Point::new(1100.0, 3.0));
    assert_eq!(state.hovered_vertex(), None);
}

#[test]
fn test_endpoint_markers_report_connectivity() {
    let mut state = DesignerState::new();
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_down(Point::new(1000.0, 0.0));
    state.pointer_down(Point::new(1000.0, 1000.0));
    state.key_down(Key::Escape, Modifiers::default());

    let markers = state.endpoint_markers();
    assert_eq!(markers.len(), 3);
    assert!(markers.contains(&(Point::new(0.0, 0.0), Connectivity::Free)));
    assert!(markers.contains(&(Point::new(1000.0, 0.0), Connectivity::Junction(2))));
    assert!(markers.contains(&(Point::new(1000.0, 1000.0), Connectivity::Free)));
}

#[test]
fn test_select_tool_picks_wall_within_thickness() {
    let mut state = DesignerState::new();
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_down(Point::new(1000.0, 0.0));
    state.set_mode(DrawingMode::Select);

    state.pointer_down(Point::new(500.0, 12.0));
    assert_eq!(state.selected_index(), Some(0));
    assert_eq!(state.state(), InteractionState::Editing { index: 0 });

    state.pointer_down(Point::new(500.0, 300.0));
    assert_eq!(state.selected_index(), None);
    assert_eq!(state.state(), InteractionState::Idle);
}

#[test]
fn test_keyboard_undo_redo() {
    let mut state = DesignerState::new();
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_down(Point::new(1000.0, 0.0));
    assert_eq!(state.walls().len(), 1);

    assert!(state.key_down(Key::Char('z'), Modifiers::ctrl()));
    assert!(state.walls().is_empty());
    assert!(!state.is_drawing());

    assert!(state.key_down(Key::Char('Z'), Modifiers::ctrl_shift()));
    assert_eq!(state.walls().len(), 1);

    state.undo();
    assert!(state.key_down(Key::Char('y'), Modifiers::ctrl()));
    assert_eq!(state.walls().len(), 1);

    assert!(!state.key_down(Key::Char('q'), Modifiers::ctrl()));
}

#[test]
fn test_clear_is_undoable() {
    let mut state = DesignerState::new();
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_down(Point::new(1000.0, 0.0));
    state.clear();

    assert!(state.walls().is_empty());
    assert_eq!(state.state(), InteractionState::Idle);
    state.undo();
    assert_eq!(state.walls().len(), 1);
}
