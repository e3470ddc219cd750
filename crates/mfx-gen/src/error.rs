//! Error types for the fixture generators.

use mfx_store::StoreError;
use mfx_types::ObjectId;

/// Errors that can occur while generating or verifying fixtures.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// The store refused or failed to commit a node.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A node record could not be serialized.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The requested tree shape cannot be generated.
    #[error("invalid DAG shape (fanout {fanout}, depth {depth}): {reason}")]
    InvalidShape {
        fanout: u32,
        depth: u32,
        reason: &'static str,
    },

    /// Stored bytes could not be decoded as a node record.
    #[error("cannot decode node {id:?}: {reason}")]
    Decode { id: ObjectId, reason: String },

    /// A link points at a node the store does not hold.
    #[error("node not found: {0:?}")]
    NodeNotFound(ObjectId),

    /// Stored content does not reproduce the identifier it was fetched by.
    #[error("identifier mismatch: expected {expected:?}, computed {computed:?}")]
    IdentifierMismatch {
        expected: ObjectId,
        computed: ObjectId,
    },

    /// Generator configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias for generator results.
pub type GenResult<T> = Result<T, GenError>;
