//! Controller-driven interaction flows: the full press/drag/release and
//! keyboard paths a host forwards from its event loop.

mod common;

use common::{
    block_ids, chained_diagram, click, drag, input_pos, output_pos, selected_block_ids,
    three_block_diagram,
};
use patchboard::{EditorController, Key, Point};

#[test]
fn test_click_select_then_background_clears() {
    let mut diagram = three_block_diagram();
    let mut ctrl = EditorController::new();

    click(&mut ctrl, &mut diagram, Point::new(100.0, 20.0));
    assert_eq!(selected_block_ids(&diagram), vec![1]);

    click(&mut ctrl, &mut diagram, Point::new(-300.0, -300.0));
    assert!(selected_block_ids(&diagram).is_empty());
}

#[test]
fn test_ctrl_click_builds_multi_selection() {
    let mut diagram = three_block_diagram();
    let mut ctrl = EditorController::new();

    click(&mut ctrl, &mut diagram, Point::new(100.0, 20.0));
    ctrl.key_down(Key::Control);
    click(&mut ctrl, &mut diagram, Point::new(700.0, 320.0));
    ctrl.key_up(&mut diagram, Key::Control);

    let mut selected = selected_block_ids(&diagram);
    selected.sort_unstable();
    assert_eq!(selected, vec![1, 2]);
}

#[test]
fn test_group_drag_moves_every_selected_block() {
    let mut diagram = three_block_diagram();
    let mut ctrl = EditorController::new();

    click(&mut ctrl, &mut diagram, Point::new(100.0, 20.0));
    ctrl.key_down(Key::Control);
    click(&mut ctrl, &mut diagram, Point::new(700.0, 320.0));
    ctrl.key_up(&mut diagram, Key::Control);

    // Dragging from inside an already-selected block keeps the group.
    drag(
        &mut ctrl,
        &mut diagram,
        Point::new(700.0, 320.0),
        Point::new(750.0, 340.0),
    );

    assert_eq!(diagram.find_block(1).unwrap().x, 50.0);
    assert_eq!(diagram.find_block(2).unwrap().x, 650.0);
    assert_eq!(diagram.find_block(3).unwrap().x, 1200.0);
}

#[test]
fn test_drag_unselected_block_replaces_selection() {
    let mut diagram = three_block_diagram();
    let mut ctrl = EditorController::new();

    click(&mut ctrl, &mut diagram, Point::new(100.0, 20.0));
    drag(
        &mut ctrl,
        &mut diagram,
        Point::new(700.0, 320.0),
        Point::new(700.0, 420.0),
    );

    assert_eq!(diagram.find_block(1).unwrap().y, 0.0);
    assert_eq!(diagram.find_block(2).unwrap().y, 400.0);
    assert_eq!(selected_block_ids(&diagram), vec![2]);
}

#[test]
fn test_rubber_band_flow() {
    let mut diagram = chained_diagram();
    let mut ctrl = EditorController::new();
    diagram.handle_block_clicked(3, false).unwrap();

    // Sweep over blocks 1 and 2; the old selection is gone, the connection
    // between them comes along.
    drag(
        &mut ctrl,
        &mut diagram,
        Point::new(-20.0, -20.0),
        Point::new(900.0, 480.0),
    );

    let mut selected = selected_block_ids(&diagram);
    selected.sort_unstable();
    assert_eq!(selected, vec![1, 2]);
    assert_eq!(diagram.selected_connections().count(), 1);
    assert_eq!(ctrl.selection_rect(), None);
}

#[test]
fn test_connect_by_dragging_output_to_input() {
    let mut diagram = three_block_diagram();
    let mut ctrl = EditorController::new();

    let from = output_pos(&diagram, 1, 1);
    let to = input_pos(&diagram, 2, 0);
    drag(&mut ctrl, &mut diagram, from, to);

    assert_eq!(diagram.connections().len(), 1);
    let conn = &diagram.connections()[0];
    assert_eq!((conn.source.block_id, conn.source.connector_index), (1, 1));
    assert_eq!((conn.dest.block_id, conn.dest.connector_index), (2, 0));
}

#[test]
fn test_connect_by_dragging_input_to_output() {
    let mut diagram = three_block_diagram();
    let mut ctrl = EditorController::new();

    let from = input_pos(&diagram, 2, 0);
    let to = output_pos(&diagram, 1, 1);
    drag(&mut ctrl, &mut diagram, from, to);

    // Same canonical direction as the output-first gesture.
    assert_eq!(diagram.connections().len(), 1);
    let conn = &diagram.connections()[0];
    assert_eq!((conn.source.block_id, conn.source.connector_index), (1, 1));
    assert_eq!((conn.dest.block_id, conn.dest.connector_index), (2, 0));
}

#[test]
fn test_connection_drag_abandoned_over_canvas() {
    let mut diagram = three_block_diagram();
    let mut ctrl = EditorController::new();

    let from = output_pos(&diagram, 1, 0);
    drag(&mut ctrl, &mut diagram, from, Point::new(400.0, -300.0));

    assert!(diagram.connections().is_empty());
    // The abandoned drag leaves no session behind.
    click(&mut ctrl, &mut diagram, Point::new(100.0, 20.0));
    assert_eq!(selected_block_ids(&diagram), vec![1]);
}

#[test]
fn test_connection_drag_abandoned_over_same_side() {
    let mut diagram = three_block_diagram();
    let mut ctrl = EditorController::new();

    let from = output_pos(&diagram, 1, 0);
    let to = output_pos(&diagram, 2, 0);
    drag(&mut ctrl, &mut diagram, from, to);

    assert!(diagram.connections().is_empty());
}

#[test]
fn test_delete_key_flow() {
    let mut diagram = chained_diagram();
    let mut ctrl = EditorController::new();

    click(&mut ctrl, &mut diagram, Point::new(700.0, 320.0));
    ctrl.key_down(Key::Delete);
    ctrl.key_up(&mut diagram, Key::Delete);

    assert_eq!(block_ids(&diagram), vec![1, 3]);
    assert!(diagram.connections().is_empty());
}

#[test]
fn test_select_all_then_escape() {
    let mut diagram = chained_diagram();
    let mut ctrl = EditorController::new();

    ctrl.key_down(Key::Control);
    ctrl.key_down(Key::A);
    ctrl.key_up(&mut diagram, Key::A);
    assert_eq!(selected_block_ids(&diagram).len(), 3);
    assert_eq!(diagram.selected_connections().count(), 2);
    ctrl.key_up(&mut diagram, Key::Control);

    ctrl.key_up(&mut diagram, Key::Escape);
    assert!(selected_block_ids(&diagram).is_empty());
    assert_eq!(diagram.selected_connections().count(), 0);
}

#[test]
fn test_connection_press_toggle_with_ctrl() {
    let mut diagram = chained_diagram();
    let mut ctrl = EditorController::new();
    let mid = diagram.connection_geometry(0).unwrap().curve().eval(0.5);

    ctrl.pointer_down(&mut diagram, mid).unwrap();
    ctrl.clicked(&mut diagram).unwrap();
    assert!(diagram.connections()[0].selected);

    ctrl.key_down(Key::Control);
    ctrl.pointer_down(&mut diagram, mid).unwrap();
    ctrl.clicked(&mut diagram).unwrap();
    assert!(!diagram.connections()[0].selected);
}
