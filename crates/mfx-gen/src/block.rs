//! Flat block generation.

use bytes::Bytes;
use tracing::trace;

use mfx_crypto::{ContentDigest, ContentHasher};
use mfx_types::ObjectId;

/// An immutable payload and its content identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    id: ObjectId,
    data: Bytes,
}

impl Block {
    /// Wrap `data`, identifying it with `digest`.
    pub fn new<D: ContentDigest + ?Sized>(digest: &D, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            id: digest.digest(&data),
            data,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// Returns `true` if the payload still reproduces the identifier.
    pub fn verify<D: ContentDigest + ?Sized>(&self, digest: &D) -> bool {
        digest.verify(&self.data, &self.id)
    }
}

/// Generates blocks on demand.
///
/// Each block from one instance differs from every earlier one; two fresh
/// instances produce the same blocks in the same order. The payload of the
/// n-th block is the decimal string of n.
#[derive(Debug)]
pub struct BlockGenerator<D = ContentHasher> {
    seq: u64,
    digest: D,
}

impl BlockGenerator<ContentHasher> {
    /// A generator using the BLAKE3 block hasher.
    pub fn new() -> Self {
        Self::with_digest(ContentHasher::BLOCK)
    }
}

impl Default for BlockGenerator<ContentHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ContentDigest> BlockGenerator<D> {
    pub fn with_digest(digest: D) -> Self {
        Self { seq: 0, digest }
    }

    /// Number of blocks generated so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn digest(&self) -> &D {
        &self.digest
    }

    /// Generate the next block.
    pub fn next_block(&mut self) -> Block {
        self.seq += 1;
        let block = Block::new(&self.digest, self.seq.to_string().into_bytes());
        trace!(seq = self.seq, id = %block.id.short_hex(), "generated block");
        block
    }

    /// Generate exactly `n` blocks, in order.
    pub fn blocks(&mut self, n: usize) -> Vec<Block> {
        (0..n).map(|_| self.next_block()).collect()
    }
}

/// Endless stream of blocks.
impl<D: ContentDigest> Iterator for BlockGenerator<D> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        Some(self.next_block())
    }
}
