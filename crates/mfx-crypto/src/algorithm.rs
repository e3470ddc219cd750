use serde::{Deserialize, Serialize};

use crate::digest::ContentDigest;
use crate::hasher::ContentHasher;
use crate::sha256::Sha256Digest;

/// Digest selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// Domain-separated BLAKE3 ([`ContentHasher`]).
    #[default]
    Blake3,
    /// Plain SHA-256 ([`Sha256Digest`]).
    Sha256,
}

impl DigestAlgorithm {
    /// Digest for flat block payloads.
    pub fn block_digest(self) -> Box<dyn ContentDigest + Send + Sync> {
        match self {
            Self::Blake3 => Box::new(ContentHasher::BLOCK),
            Self::Sha256 => Box::new(Sha256Digest),
        }
    }

    /// Digest for encoded DAG nodes.
    pub fn node_digest(self) -> Box<dyn ContentDigest + Send + Sync> {
        match self {
            Self::Blake3 => Box::new(ContentHasher::NODE),
            Self::Sha256 => Box::new(Sha256Digest),
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blake3 => write!(f, "blake3"),
            Self::Sha256 => write!(f, "sha256"),
        }
    }
}
