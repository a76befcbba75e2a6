//! The diagram view-model.
//!
//! [`Diagram`] owns the construction payload for the duration of an editing
//! session and layers the derived, mutation-aware view on top of it: connector
//! positions, connection curves, selection state, and the mutation operations
//! the interaction controller invokes. The payload is never copied — every
//! mutation lands directly in the backing [`DiagramData`], so the host can
//! take the payload back at any time (`data()` / `into_data()`) and serialize
//! the current diagram.
//!
//! There is no process-wide state: a `Diagram` is constructed explicitly and
//! passed by reference, with its lifetime tied to the editor instance.

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, DEFAULT_BLOCK_WIDTH};
use crate::model::{
    BlockData, ConnectionData, ConnectorData, ConnectorId, DiagramData, Side,
};
use crate::path::ConnectionGeometry;
use log::debug;
use std::collections::HashSet;

/// View-model over a diagram payload.
///
/// Invariants upheld by every operation:
///
/// - block ids are unique;
/// - every connection's `source` resolves to an existing output connector and
///   its `dest` to an existing input connector;
/// - no connection links a block to itself or two same-side connectors;
/// - deleting blocks removes every connection that references them;
/// - selection state lives on the blocks/connections themselves —
///   [`selected_blocks`](Self::selected_blocks) is always exactly the filter
///   of all blocks by flag.
#[derive(Debug, Default)]
pub struct Diagram {
    data: DiagramData,
}

impl Diagram {
    /// Wrap a payload in a view-model.
    ///
    /// Normalizes block widths (absent or non-positive widths become
    /// [`DEFAULT_BLOCK_WIDTH`]), then validates the payload: duplicate block
    /// ids and connections with dangling or wrong-side endpoints are
    /// rejected.
    pub fn new(mut data: DiagramData) -> Result<Self> {
        let mut seen = HashSet::new();
        for block in &mut data.blocks {
            if !seen.insert(block.id) {
                return Err(Error::DuplicateBlockId(block.id));
            }
            normalize_width(block);
        }

        let diagram = Self { data };
        for index in 0..diagram.data.connections.len() {
            let conn = &diagram.data.connections[index];
            diagram.find_output_connector(conn.source.block_id, conn.source.connector_index)?;
            diagram.find_input_connector(conn.dest.block_id, conn.dest.connector_index)?;
        }
        Ok(diagram)
    }

    /// The backing payload, reflecting all mutations made so far.
    pub fn data(&self) -> &DiagramData {
        &self.data
    }

    /// Unwrap the view-model, returning the payload.
    pub fn into_data(self) -> DiagramData {
        self.data
    }

    /// Blocks in z-order: the last block is rendered topmost.
    pub fn blocks(&self) -> &[BlockData] {
        &self.data.blocks
    }

    pub fn connections(&self) -> &[ConnectionData] {
        &self.data.connections
    }

    // === Lookups ===

    /// Find a block by id. Ids are unique, so the linear scan has at most one
    /// match.
    pub fn find_block(&self, id: i32) -> Result<&BlockData> {
        self.data
            .blocks
            .iter()
            .find(|b| b.id == id)
            .ok_or(Error::BlockNotFound(id))
    }

    fn find_block_mut(&mut self, id: i32) -> Result<&mut BlockData> {
        self.data
            .blocks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(Error::BlockNotFound(id))
    }

    fn block_index(&self, id: i32) -> Result<usize> {
        self.data
            .blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or(Error::BlockNotFound(id))
    }

    /// Resolve an input connector by block id and index.
    pub fn find_input_connector(&self, block_id: i32, index: usize) -> Result<ConnectorId> {
        self.find_connector(block_id, Side::Input, index)
    }

    /// Resolve an output connector by block id and index.
    pub fn find_output_connector(&self, block_id: i32, index: usize) -> Result<ConnectorId> {
        self.find_connector(block_id, Side::Output, index)
    }

    fn find_connector(&self, block_id: i32, side: Side, index: usize) -> Result<ConnectorId> {
        let block = self.find_block(block_id)?;
        if index >= block.connectors(side).len() {
            return Err(Error::ConnectorNotFound { block_id, side, index });
        }
        Ok(ConnectorId::new(block_id, side, index))
    }

    /// The connector's data record.
    pub fn connector(&self, id: ConnectorId) -> Result<&ConnectorData> {
        let block = self.find_block(id.block_id)?;
        block.connectors(id.side).get(id.index).ok_or(Error::ConnectorNotFound {
            block_id: id.block_id,
            side: id.side,
            index: id.index,
        })
    }

    /// Absolute position of a connector, derived from its owning block.
    pub fn connector_position(&self, id: ConnectorId) -> Result<Point> {
        self.connector(id)?;
        let block = self.find_block(id.block_id)?;
        Ok(block.connector_position(id.side, id.index))
    }

    // === Structural mutations ===

    /// Append a block to the diagram.
    ///
    /// The block's width is normalized on the way in. Existing blocks keep
    /// their order and selection state.
    pub fn add_block(&mut self, mut block: BlockData) -> Result<()> {
        if self.data.blocks.iter().any(|b| b.id == block.id) {
            return Err(Error::DuplicateBlockId(block.id));
        }
        normalize_width(&mut block);
        debug!("add block {} ({:?})", block.id, block.name());
        self.data.blocks.push(block);
        Ok(())
    }

    /// Append an input connector to a block. The new connector occupies the
    /// next row on the left edge.
    pub fn add_input_connector(
        &mut self,
        block_id: i32,
        connector: ConnectorData,
    ) -> Result<ConnectorId> {
        let block = self.find_block_mut(block_id)?;
        block.input_connectors.push(connector);
        Ok(ConnectorId::new(block_id, Side::Input, block.input_connectors.len() - 1))
    }

    /// Append an output connector to a block. The new connector occupies the
    /// next row on the right edge.
    pub fn add_output_connector(
        &mut self,
        block_id: i32,
        connector: ConnectorData,
    ) -> Result<ConnectorId> {
        let block = self.find_block_mut(block_id)?;
        block.output_connectors.push(connector);
        Ok(ConnectorId::new(block_id, Side::Output, block.output_connectors.len() - 1))
    }

    /// Create a connection between two connectors, in either gesture order.
    ///
    /// Direction is canonicalized: the output-side connector always becomes
    /// the connection's `source` and the input-side connector its `dest`.
    /// Fails when either connector does not resolve, both connectors sit on
    /// the same side, or both belong to the same block.
    ///
    /// Returns the index of the new connection.
    pub fn create_new_connection(&mut self, a: ConnectorId, b: ConnectorId) -> Result<usize> {
        self.find_connector(a.block_id, a.side, a.index)?;
        self.find_connector(b.block_id, b.side, b.index)?;

        if a.side == b.side {
            return Err(Error::SameDirection(a.side));
        }
        if a.block_id == b.block_id {
            return Err(Error::SelfConnection(a.block_id));
        }

        let (source, dest) = if a.side == Side::Output { (a, b) } else { (b, a) };
        debug!(
            "connect block {} output {} -> block {} input {}",
            source.block_id, source.index, dest.block_id, dest.index
        );

        self.data.connections.push(ConnectionData {
            source: source.to_ref(),
            dest: dest.to_ref(),
            selected: false,
        });
        Ok(self.data.connections.len() - 1)
    }

    // === Selection ===

    /// Select every block and connection. Idempotent.
    pub fn select_all(&mut self) {
        for block in &mut self.data.blocks {
            block.selected = true;
        }
        for conn in &mut self.data.connections {
            conn.selected = true;
        }
    }

    /// Deselect every block and connection. Idempotent.
    pub fn deselect_all(&mut self) {
        for block in &mut self.data.blocks {
            block.selected = false;
        }
        for conn in &mut self.data.connections {
            conn.selected = false;
        }
    }

    /// Mark one block as selected, leaving the rest of the selection and the
    /// z-order alone.
    pub fn select_block(&mut self, block_id: i32) -> Result<()> {
        self.find_block_mut(block_id)?.selected = true;
        Ok(())
    }

    /// Handle a click on a block.
    ///
    /// With ctrl held the block's selection is toggled and everything else is
    /// left alone; otherwise the click selects the block exclusively. Either
    /// way the block moves to the end of the sequence so it renders topmost.
    pub fn handle_block_clicked(&mut self, block_id: i32, ctrl_held: bool) -> Result<()> {
        let index = self.block_index(block_id)?;

        if ctrl_held {
            let block = &mut self.data.blocks[index];
            block.selected = !block.selected;
        } else {
            self.deselect_all();
            self.data.blocks[index].selected = true;
        }

        // Painter's-algorithm z-order: last block is drawn on top.
        let block = self.data.blocks.remove(index);
        self.data.blocks.push(block);
        Ok(())
    }

    /// Handle a press on a connection: same toggle-or-exclusive-select
    /// semantics as a block click, without any z-order change.
    pub fn handle_connection_mouse_down(&mut self, index: usize, ctrl_held: bool) -> Result<()> {
        if index >= self.data.connections.len() {
            return Err(Error::ConnectionNotFound(index));
        }

        if ctrl_held {
            let conn = &mut self.data.connections[index];
            conn.selected = !conn.selected;
        } else {
            self.deselect_all();
            self.data.connections[index].selected = true;
        }
        Ok(())
    }

    /// Translate every selected block by `(dx, dy)`.
    ///
    /// Called repeatedly with incremental deltas during a drag. Connector and
    /// connection geometry follows implicitly because it is derived from
    /// block positions.
    pub fn update_selected_blocks_location(&mut self, dx: f32, dy: f32) {
        for block in &mut self.data.blocks {
            if block.selected {
                block.x += dx;
                block.y += dy;
            }
        }
    }

    /// Delete every selected block and connection.
    ///
    /// Connections survive only if they are unselected and neither endpoint's
    /// block was removed. Relative order of the kept items is preserved, and
    /// the backing payload is updated in the same pass.
    pub fn delete_selected(&mut self) {
        let removed: HashSet<i32> = self
            .data
            .blocks
            .iter()
            .filter(|b| b.selected)
            .map(|b| b.id)
            .collect();

        self.data.blocks.retain(|b| !b.selected);
        self.data.connections.retain(|c| {
            !c.selected
                && !removed.contains(&c.source.block_id)
                && !removed.contains(&c.dest.block_id)
        });

        if !removed.is_empty() {
            debug!("deleted {} block(s)", removed.len());
        }
    }

    /// Replace the selection with everything inside `rect`.
    ///
    /// A block is selected only when its bounding box lies entirely within
    /// the rectangle; partial overlap does not select. A connection is
    /// selected exactly when both its endpoint blocks were selected by this
    /// same pass — connections are never tested against the rectangle
    /// directly.
    pub fn apply_selection_rect(&mut self, rect: Rect) {
        self.deselect_all();

        let mut selected_ids = HashSet::new();
        for block in &mut self.data.blocks {
            if rect.contains_rect(&block.bounds()) {
                block.selected = true;
                selected_ids.insert(block.id);
            }
        }

        for conn in &mut self.data.connections {
            if selected_ids.contains(&conn.source.block_id)
                && selected_ids.contains(&conn.dest.block_id)
            {
                conn.selected = true;
            }
        }
    }

    /// Selected blocks, in sequence order.
    pub fn selected_blocks(&self) -> impl Iterator<Item = &BlockData> {
        self.data.blocks.iter().filter(|b| b.selected)
    }

    /// Selected connections, in sequence order.
    pub fn selected_connections(&self) -> impl Iterator<Item = &ConnectionData> {
        self.data.connections.iter().filter(|c| c.selected)
    }

    // === Derived geometry for the rendering layer ===

    /// Endpoints, tangents and selection flag of a connection.
    pub fn connection_geometry(&self, index: usize) -> Result<ConnectionGeometry> {
        let conn = self
            .data
            .connections
            .get(index)
            .ok_or(Error::ConnectionNotFound(index))?;
        let source = self.connector_position(conn.source_id())?;
        let dest = self.connector_position(conn.dest_id())?;
        Ok(ConnectionGeometry::from_endpoints(source, dest, conn.selected))
    }
}

fn normalize_width(block: &mut BlockData) {
    if block.width <= 0.0 {
        block.width = DEFAULT_BLOCK_WIDTH;
    }
}
