//! # Patchboard
//!
//! A rendering-agnostic view model for node-and-wire diagram editors:
//! draggable blocks with named input/output connectors, bezier connections
//! between them, and the full interaction layer (click, drag, rubber-band
//! selection, keyboard) that editors need on top of the data.
//!
//! The crate owns no window and draws nothing. A host application feeds
//! pointer and keyboard events into an [`EditorController`], reads derived
//! geometry back out of the [`Diagram`], and paints with whatever rendering
//! technology it likes.
//!
//! ## Features
//!
//! - **Serializable payload** - [`DiagramData`] is the durable document;
//!   the view model wraps it without copying, so saving is just serializing
//! - **Derived geometry** - block heights, connector positions, and
//!   connection curves are computed from the payload, never stored
//! - **Gesture state machine** - one drag session at a time, classified
//!   from what was under the pointer at press time
//! - **Geometry-level hit testing** - curves, connectors, and blocks are
//!   resolved directly against the model, independent of the renderer
//!
//! ## Quick Start
//!
//! ```
//! use patchboard::{BlockData, ConnectorData, Diagram, DiagramData, EditorController, Point};
//!
//! let mut source = BlockData::new(1, "Source", 0.0, 0.0);
//! source.output_connectors.push(ConnectorData::new("out"));
//! let mut sink = BlockData::new(2, "Sink", 400.0, 200.0);
//! sink.input_connectors.push(ConnectorData::new("in"));
//!
//! let mut diagram = Diagram::new(DiagramData {
//!     blocks: vec![source, sink],
//!     connections: vec![],
//! })?;
//!
//! let out = diagram.find_output_connector(1, 0)?;
//! let inp = diagram.find_input_connector(2, 0)?;
//! diagram.create_new_connection(out, inp)?;
//!
//! let mut controller = EditorController::new();
//! controller.pointer_down(&mut diagram, Point::new(100.0, 20.0))?;
//! controller.clicked(&mut diagram)?;
//! assert_eq!(diagram.selected_blocks().count(), 1);
//! # Ok::<(), patchboard::Error>(())
//! ```
//!
//! ## Core Types
//!
//! - [`Diagram`] - the view model; every mutation goes through it
//! - [`DiagramData`] / [`BlockData`] / [`ConnectionData`] - the payload
//! - [`EditorController`] - gesture state machine over a diagram
//! - [`HitTester`] - point-to-element resolution with tunable tolerances
//! - [`ConnectionGeometry`] / [`CubicBezier`] - curve math for rendering
//!   and hit testing

pub mod geometry;
pub mod model;
pub mod error;
pub mod path;
pub mod graph;
pub mod selection;
pub mod controller;

pub use geometry::{
    connector_y, Point, Rect, BLOCK_NAME_HEIGHT, CONNECTOR_ROW_HEIGHT, DEFAULT_BLOCK_WIDTH,
};
pub use model::{
    BlockData, ConnectionData, ConnectorData, ConnectorId, ConnectorRef, DiagramData, Side,
};
pub use error::{Error, Result};
pub use path::{
    dest_tangent, distance_to_bezier, source_tangent, ConnectionGeometry, CubicBezier,
};
pub use graph::Diagram;
pub use hit_test::{Hit, HitTester};
pub use selection::SelectionRect;
pub use controller::{EditorController, Hover, Key};
