//! Plain SHA-256 digest.

use sha2::{Digest, Sha256};

use mfx_types::ObjectId;

use crate::digest::ContentDigest;

/// SHA-256 over the raw bytes, with no domain tag.
///
/// Use this when fixtures must line up with identifiers computed by another
/// SHA-256 based tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256Digest;

impl ContentDigest for Sha256Digest {
    fn digest(&self, data: &[u8]) -> ObjectId {
        let mut hasher = Sha256::new();
        hasher.update(data);
        ObjectId::from_hash(hasher.finalize().into())
    }
}
