//! Content digests for merkle-fixtures.
//!
//! Generators never hash directly: they go through the [`ContentDigest`]
//! trait so the identifier scheme can be swapped. Two implementations ship
//! here:
//!
//! - [`ContentHasher`] -- domain-separated BLAKE3 (the default)
//! - [`Sha256Digest`] -- plain SHA-256 over the raw bytes
//!
//! [`DigestAlgorithm`] picks one of them from configuration.
//!
//! All digests wrap established libraries.

pub mod algorithm;
pub mod digest;
pub mod hasher;
pub mod sha256;

pub use algorithm::DigestAlgorithm;
pub use digest::ContentDigest;
pub use hasher::ContentHasher;
pub use sha256::Sha256Digest;
