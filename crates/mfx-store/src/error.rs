use mfx_types::ObjectId;

/// Errors from node store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Attempted to add a node with the null identifier.
    #[error("cannot store node with null ID")]
    NullObjectId,

    /// Stored bytes no longer reproduce the identifier they are keyed by.
    #[error("identifier mismatch for {id}: computed {computed}")]
    IdentifierMismatch { id: ObjectId, computed: ObjectId },

    /// The backend refused the node.
    #[error("node rejected: {0}")]
    Rejected(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
