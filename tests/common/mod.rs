//! Common test utilities for integration tests.

#![allow(dead_code)]

use patchboard::{
    BlockData, ConnectorData, Diagram, DiagramData, EditorController, Point,
};

/// A block with `inputs`/`outputs` generically named connectors.
pub fn block(id: i32, x: f32, y: f32, inputs: usize, outputs: usize) -> BlockData {
    let mut b = BlockData::new(id, format!("Block {id}"), x, y);
    b.input_connectors = (0..inputs)
        .map(|i| ConnectorData::new(format!("in{i}")))
        .collect();
    b.output_connectors = (0..outputs)
        .map(|i| ConnectorData::new(format!("out{i}")))
        .collect();
    b
}

/// Three well-spaced blocks, no connections.
///
/// Block 1 at the origin, block 2 at (600, 300), block 3 at (1200, 0); each
/// has two inputs and two outputs.
pub fn three_block_diagram() -> Diagram {
    Diagram::new(DiagramData {
        blocks: vec![
            block(1, 0.0, 0.0, 2, 2),
            block(2, 600.0, 300.0, 2, 2),
            block(3, 1200.0, 0.0, 2, 2),
        ],
        connections: vec![],
    })
    .expect("fixture payload is valid")
}

/// [`three_block_diagram`] wired 1.out0 -> 2.in0 and 2.out0 -> 3.in0.
pub fn chained_diagram() -> Diagram {
    let mut diagram = three_block_diagram();
    connect(&mut diagram, 1, 0, 2, 0);
    connect(&mut diagram, 2, 0, 3, 0);
    diagram
}

/// Wire `from_block.out[from_index]` to `to_block.in[to_index]`.
pub fn connect(
    diagram: &mut Diagram,
    from_block: i32,
    from_index: usize,
    to_block: i32,
    to_index: usize,
) -> usize {
    let out = diagram
        .find_output_connector(from_block, from_index)
        .expect("fixture output connector exists");
    let inp = diagram
        .find_input_connector(to_block, to_index)
        .expect("fixture input connector exists");
    diagram
        .create_new_connection(out, inp)
        .expect("fixture connection is valid")
}

/// Absolute position of `block_id`'s output connector `index`.
pub fn output_pos(diagram: &Diagram, block_id: i32, index: usize) -> Point {
    let id = diagram
        .find_output_connector(block_id, index)
        .expect("fixture output connector exists");
    diagram.connector_position(id).expect("connector resolves")
}

/// Absolute position of `block_id`'s input connector `index`.
pub fn input_pos(diagram: &Diagram, block_id: i32, index: usize) -> Point {
    let id = diagram
        .find_input_connector(block_id, index)
        .expect("fixture input connector exists");
    diagram.connector_position(id).expect("connector resolves")
}

/// Ids of the currently selected blocks, in sequence order.
pub fn selected_block_ids(diagram: &Diagram) -> Vec<i32> {
    diagram.selected_blocks().map(|b| b.id).collect()
}

/// Ids of all blocks, in sequence (z) order.
pub fn block_ids(diagram: &Diagram) -> Vec<i32> {
    diagram.blocks().iter().map(|b| b.id).collect()
}

/// Drive a full press-drag-release from `from` to `to` through the
/// controller, in two motion increments.
pub fn drag(ctrl: &mut EditorController, diagram: &mut Diagram, from: Point, to: Point) {
    ctrl.pointer_down(diagram, from).expect("press resolves");
    ctrl.drag_started(diagram, from).expect("drag starts");
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    ctrl.dragging(diagram, dx / 2.0, dy / 2.0);
    ctrl.dragging(diagram, dx - dx / 2.0, dy - dy / 2.0);
    ctrl.drag_ended(diagram).expect("drag ends");
}

/// Drive a press-release with no motion through the controller.
pub fn click(ctrl: &mut EditorController, diagram: &mut Diagram, at: Point) {
    ctrl.pointer_down(diagram, at).expect("press resolves");
    ctrl.clicked(diagram).expect("click resolves");
}
