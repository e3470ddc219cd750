use bytes::Bytes;

use mfx_crypto::ContentDigest;
use mfx_types::ObjectId;

/// A content-addressed node as handed to a store: identifier, encoded bytes
/// and cached size.
///
/// The identifier is computed by the producer with whatever digest it was
/// configured with; the store keys by it without recomputing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredNode {
    /// Content identifier of `data`.
    pub id: ObjectId,
    /// The encoded bytes of the node.
    pub data: Bytes,
    /// The size of `data` in bytes.
    pub size: u64,
}

impl StoredNode {
    /// Create a node from a precomputed identifier and its bytes.
    pub fn new(id: ObjectId, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        let size = data.len() as u64;
        Self { id, data, size }
    }

    /// Digest `data` and wrap it.
    pub fn from_data<D: ContentDigest + ?Sized>(digest: &D, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self::new(digest.digest(&data), data)
    }

    /// Returns `true` if `data` still reproduces `id` under `digest`.
    pub fn verify<D: ContentDigest + ?Sized>(&self, digest: &D) -> bool {
        digest.verify(&self.data, &self.id)
    }
}
