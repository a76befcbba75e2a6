//! Pointer and keyboard interaction.
//!
//! [`EditorController`] turns raw pointer events into view-model mutations.
//! The host owns the event loop and the press-and-move drag threshold (a
//! drag primitive delivering `drag_started` / `dragging` / `drag_ended`, or
//! `clicked` when the threshold was never crossed) and forwards each callback
//! here; the controller classifies the gesture from what was under the
//! pointer at press time and drives the [`Diagram`] accordingly.
//!
//! One gesture session is active at a time. Events are processed one at a
//! time on a single thread; no handler suspends mid-gesture, and releasing
//! the pointer always ends the session.
//!
//! # Gesture classification
//!
//! - press on a **connection** selects it immediately (toggle with ctrl), no
//!   drag session;
//! - press on a **block** starts a block-move session; without motion it
//!   degenerates to a click;
//! - press on a **connector** starts a connection drag, completed by
//!   releasing over another connector;
//! - press on the **background** clears the selection and starts a
//!   rubber-band session.

use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::graph::Diagram;
use crate::hit_test::{Hit, HitTester};
use crate::model::ConnectorId;
use crate::selection::SelectionRect;
use log::trace;

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    A,
    Escape,
    Control,
}

/// Mutually exclusive hover state, re-derived on every pointer move.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hover {
    pub connection: Option<usize>,
    pub connector: Option<ConnectorId>,
    pub block: Option<i32>,
}

impl Hover {
    fn from_hit(hit: Option<Hit>) -> Self {
        let mut hover = Hover::default();
        match hit {
            Some(Hit::Connection(index)) => hover.connection = Some(index),
            Some(Hit::Connector(id)) => hover.connector = Some(id),
            Some(Hit::Block(id)) => hover.block = Some(id),
            None => {}
        }
        hover
    }
}

/// The active gesture session.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    BlockPressed { block_id: i32 },
    DraggingBlocks,
    BackgroundPressed { origin: Point },
    RubberBand { rect: SelectionRect },
    ConnectorPressed { connector: ConnectorId },
    DraggingConnection { connector: ConnectorId, pointer: Point },
}

/// Gesture state machine over a [`Diagram`].
#[derive(Debug)]
pub struct EditorController {
    hit_tester: HitTester,
    gesture: Gesture,
    hover: Hover,
    ctrl_down: bool,
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorController {
    pub fn new() -> Self {
        Self::with_hit_tester(HitTester::default())
    }

    /// Create a controller with custom hit-testing tolerances.
    pub fn with_hit_tester(hit_tester: HitTester) -> Self {
        Self {
            hit_tester,
            gesture: Gesture::Idle,
            hover: Hover::default(),
            ctrl_down: false,
        }
    }

    /// Current hover state (valid while no button is pressed, and connector
    /// hover additionally during connection drags).
    pub fn hover(&self) -> Hover {
        self.hover
    }

    /// State of the control-key latch.
    pub fn ctrl_down(&self) -> bool {
        self.ctrl_down
    }

    /// Bounds of the rubber band, while one is active. The rendering layer
    /// draws this rectangle.
    pub fn selection_rect(&self) -> Option<Rect> {
        match self.gesture {
            Gesture::RubberBand { rect } => Some(rect.bounds()),
            _ => None,
        }
    }

    /// Source connector of the connection drag in progress, if any, together
    /// with the current pointer position. The rendering layer draws the
    /// dangling curve from this pair.
    pub fn dragging_connection(&self) -> Option<(ConnectorId, Point)> {
        match self.gesture {
            Gesture::DraggingConnection { connector, pointer } => Some((connector, pointer)),
            _ => None,
        }
    }

    // === Pointer session ===

    /// Pointer pressed at `point`. Classifies the press target and opens a
    /// gesture session (or, for connections, selects immediately).
    pub fn pointer_down(&mut self, diagram: &mut Diagram, point: Point) -> Result<()> {
        match self.hit_tester.hit(diagram, point) {
            Some(Hit::Connection(index)) => {
                trace!("press on connection {index}");
                diagram.handle_connection_mouse_down(index, self.ctrl_down)?;
            }
            Some(Hit::Connector(connector)) => {
                trace!("press on connector {connector:?}");
                self.gesture = Gesture::ConnectorPressed { connector };
            }
            Some(Hit::Block(block_id)) => {
                trace!("press on block {block_id}");
                self.gesture = Gesture::BlockPressed { block_id };
            }
            None => {
                trace!("press on background");
                diagram.deselect_all();
                self.gesture = Gesture::BackgroundPressed { origin: point };
            }
        }
        Ok(())
    }

    /// The press was released without crossing the drag threshold.
    pub fn clicked(&mut self, diagram: &mut Diagram) -> Result<()> {
        match self.gesture {
            Gesture::BlockPressed { block_id } => {
                diagram.handle_block_clicked(block_id, self.ctrl_down)?;
            }
            Gesture::BackgroundPressed { .. } => {
                // Click on empty canvas: the press already cleared the
                // selection; a degenerate rubber band selects nothing.
                diagram.deselect_all();
            }
            // A connector click with no motion is not a gesture.
            Gesture::ConnectorPressed { .. } | Gesture::Idle => {}
            Gesture::DraggingBlocks
            | Gesture::RubberBand { .. }
            | Gesture::DraggingConnection { .. } => {}
        }
        self.gesture = Gesture::Idle;
        Ok(())
    }

    /// The drag threshold was crossed at `point`.
    pub fn drag_started(&mut self, diagram: &mut Diagram, point: Point) -> Result<()> {
        match self.gesture {
            Gesture::BlockPressed { block_id } => {
                // Pressing an unselected block makes it the sole selection;
                // pressing a block that is already part of a multi-selection
                // keeps the group, enabling group drags.
                if !diagram.find_block(block_id)?.selected {
                    diagram.deselect_all();
                    diagram.select_block(block_id)?;
                }
                trace!("drag blocks from {point:?}");
                self.gesture = Gesture::DraggingBlocks;
            }
            Gesture::BackgroundPressed { origin } => {
                trace!("rubber band from {origin:?}");
                self.gesture = Gesture::RubberBand { rect: SelectionRect::new(origin) };
            }
            Gesture::ConnectorPressed { connector } => {
                trace!("drag connection from {connector:?}");
                self.hover = Hover::from_hit(Some(Hit::Connector(connector)));
                self.gesture = Gesture::DraggingConnection { connector, pointer: point };
            }
            Gesture::Idle
            | Gesture::DraggingBlocks
            | Gesture::RubberBand { .. }
            | Gesture::DraggingConnection { .. } => {}
        }
        Ok(())
    }

    /// Incremental pointer motion while dragging. Deltas are relative to the
    /// previous callback, not the gesture origin.
    pub fn dragging(&mut self, diagram: &mut Diagram, dx: f32, dy: f32) {
        match &mut self.gesture {
            Gesture::DraggingBlocks => {
                diagram.update_selected_blocks_location(dx, dy);
            }
            Gesture::RubberBand { rect } => {
                rect.move_by(dx, dy);
            }
            Gesture::DraggingConnection { pointer, .. } => {
                pointer.x += dx;
                pointer.y += dy;
                // Track the connector under the pointer; the model is not
                // touched until release.
                let target = self.hit_tester.find_connector_at(diagram, *pointer);
                self.hover = Hover { connector: target, ..Hover::default() };
            }
            Gesture::Idle
            | Gesture::BlockPressed { .. }
            | Gesture::BackgroundPressed { .. }
            | Gesture::ConnectorPressed { .. } => {}
        }
    }

    /// The pointer was released, ending the drag session.
    pub fn drag_ended(&mut self, diagram: &mut Diagram) -> Result<()> {
        match self.gesture {
            Gesture::RubberBand { rect } => {
                diagram.apply_selection_rect(rect.bounds());
            }
            Gesture::DraggingConnection { connector, .. } => {
                // Releasing over a connector that cannot legally accept the
                // connection abandons the gesture the same way releasing
                // over empty canvas does.
                if let Some(target) = self.hover.connector {
                    if target.side != connector.side && target.block_id != connector.block_id {
                        diagram.create_new_connection(connector, target)?;
                    } else {
                        trace!("abandoned connection drag onto {target:?}");
                    }
                }
                self.hover = Hover::default();
            }
            // Block moves were applied incrementally.
            Gesture::DraggingBlocks => {}
            Gesture::Idle
            | Gesture::BlockPressed { .. }
            | Gesture::BackgroundPressed { .. }
            | Gesture::ConnectorPressed { .. } => {}
        }
        self.gesture = Gesture::Idle;
        Ok(())
    }

    /// Pointer motion with no button pressed: refresh the hover state.
    ///
    /// Hover is re-derived from scratch each time; setting one of the three
    /// references clears the other two.
    pub fn pointer_move(&mut self, diagram: &Diagram, point: Point) {
        self.hover = Hover::from_hit(self.hit_tester.hit(diagram, point));
    }

    // === Keyboard ===

    /// Key pressed. Only maintains the control latch; actions fire on
    /// release.
    pub fn key_down(&mut self, key: Key) {
        if key == Key::Control {
            self.ctrl_down = true;
        }
    }

    /// Key released: Delete removes the selection, Ctrl+A selects
    /// everything, Escape deselects everything.
    pub fn key_up(&mut self, diagram: &mut Diagram, key: Key) {
        match key {
            Key::Delete => diagram.delete_selected(),
            Key::A if self.ctrl_down => diagram.select_all(),
            Key::A => {}
            Key::Escape => diagram.deselect_all(),
            Key::Control => self.ctrl_down = false,
        }
    }
}
