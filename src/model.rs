//! The serializable diagram payload.
//!
//! These types are the durable form of a diagram: a host constructs a
//! [`DiagramData`] (typically by deserializing JSON), hands it to
//! [`Diagram`](crate::graph::Diagram) for the editing session, and takes it
//! back afterwards. Every mutation made through the view-model is reflected
//! here, so serializing the payload at any time captures the current diagram.
//!
//! Connections reference their endpoints relationally through
//! [`ConnectorRef`] (block id plus connector index) rather than by direct
//! object reference, which keeps the payload serializable and the ownership
//! graph acyclic: the diagram owns blocks, blocks own connectors, and
//! connections only point.
//!
//! Selection flags live on [`BlockData`] and [`ConnectionData`] but are
//! skipped during (de)serialization; they are per-session view state, not
//! part of the durable form.

use crate::geometry::{connector_y, Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which connector sequence of a block a connector belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Input,
    Output,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Input => write!(f, "input"),
            Side::Output => write!(f, "output"),
        }
    }
}

/// Identity of a connector: owning block, side, and index within that side's
/// sequence. The side tag makes the connector's role an O(1) lookup instead
/// of a membership scan over both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorId {
    pub block_id: i32,
    pub side: Side,
    pub index: usize,
}

impl ConnectorId {
    pub fn new(block_id: i32, side: Side, index: usize) -> Self {
        Self { block_id, side, index }
    }

    /// The relational form stored in the payload.
    pub fn to_ref(self) -> ConnectorRef {
        ConnectorRef {
            block_id: self.block_id,
            connector_index: self.index,
        }
    }
}

/// Top-level construction payload. Both arrays may be absent in the
/// serialized form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagramData {
    #[serde(default)]
    pub blocks: Vec<BlockData>,
    #[serde(default)]
    pub connections: Vec<ConnectionData>,
}

/// A rectangular block with named connectors on its left (inputs) and right
/// (outputs) edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockData {
    pub id: i32,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    /// Normalized on construction: absent or non-positive widths are replaced
    /// with [`DEFAULT_BLOCK_WIDTH`](crate::geometry::DEFAULT_BLOCK_WIDTH).
    #[serde(default)]
    pub width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub input_connectors: Vec<ConnectorData>,
    #[serde(default)]
    pub output_connectors: Vec<ConnectorData>,
    /// View state, not part of the durable payload.
    #[serde(skip)]
    pub selected: bool,
}

impl BlockData {
    /// Create a block at a position with empty connector sequences.
    pub fn new(id: i32, name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id,
            x,
            y,
            width: 0.0,
            name: Some(name.into()),
            input_connectors: Vec::new(),
            output_connectors: Vec::new(),
            selected: false,
        }
    }

    /// The block's name, or the empty string when none was supplied.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Derived height: name row plus one connector row per connector on the
    /// longer of the two sides.
    pub fn height(&self) -> f32 {
        connector_y(self.input_connectors.len().max(self.output_connectors.len()))
    }

    /// The block's bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height())
    }

    /// The connector sequence for `side`.
    pub fn connectors(&self, side: Side) -> &[ConnectorData] {
        match side {
            Side::Input => &self.input_connectors,
            Side::Output => &self.output_connectors,
        }
    }

    /// Absolute position of the connector at `index` on `side`.
    ///
    /// Inputs sit on the left edge, outputs on the right; rows run downward
    /// from below the name area. The position is derived, never stored, so
    /// moving the block implicitly moves its connectors.
    pub fn connector_position(&self, side: Side, index: usize) -> Point {
        let x = match side {
            Side::Input => self.x,
            Side::Output => self.x + self.width,
        };
        Point::new(x, self.y + connector_y(index))
    }
}

/// A named connector. Position and role are derived from the owning block
/// and the connector's place in its sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectorData {
    #[serde(default)]
    pub name: String,
}

impl ConnectorData {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Relational reference to one endpoint of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorRef {
    #[serde(rename = "blockID")]
    pub block_id: i32,
    #[serde(rename = "connectorIndex")]
    pub connector_index: usize,
}

/// A connection from an output connector (`source`) to an input connector
/// (`dest`). The direction is canonical: `source` always resolves against the
/// source block's output sequence and `dest` against the destination block's
/// input sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionData {
    pub source: ConnectorRef,
    pub dest: ConnectorRef,
    /// View state, not part of the durable payload.
    #[serde(skip)]
    pub selected: bool,
}

impl ConnectionData {
    /// The canonical connector identities of both endpoints.
    pub fn source_id(&self) -> ConnectorId {
        ConnectorId::new(self.source.block_id, Side::Output, self.source.connector_index)
    }

    pub fn dest_id(&self) -> ConnectorId {
        ConnectorId::new(self.dest.block_id, Side::Input, self.dest.connector_index)
    }
}
