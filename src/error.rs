//! Error taxonomy for view-model operations.
//!
//! Two families exist. Lookup failures (`BlockNotFound`,
//! `ConnectorNotFound`, `ConnectionNotFound`) indicate a stale or fabricated
//! reference into a mutated diagram and are always an integration bug in the
//! caller. Invalid operations (`SameDirection`, `SelfConnection`,
//! `DuplicateBlockId`) report a mutation that would violate a graph
//! invariant. All failures are synchronous and final; nothing here is
//! transient or retryable.

use crate::model::Side;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("failed to find block {0}")]
    BlockNotFound(i32),

    #[error("block {block_id} has no {side} connector at index {index}")]
    ConnectorNotFound {
        block_id: i32,
        side: Side,
        index: usize,
    },

    #[error("connection index {0} is out of range")]
    ConnectionNotFound(usize),

    #[error("block id {0} is already in use")]
    DuplicateBlockId(i32),

    #[error("failed to create connection: only output to input connections are allowed")]
    SameDirection(Side),

    #[error("failed to create connection: cannot link block {0} to itself")]
    SelfConnection(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
