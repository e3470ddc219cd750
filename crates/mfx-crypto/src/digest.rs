use mfx_types::ObjectId;

/// Maps arbitrary bytes to a fixed-size content identifier.
///
/// Implementations must be deterministic, collision-resistant and stable
/// across calls: the same bytes always produce the same [`ObjectId`].
pub trait ContentDigest {
    /// Digest `data` into an identifier.
    fn digest(&self, data: &[u8]) -> ObjectId;

    /// Check that `data` reproduces `expected`.
    fn verify(&self, data: &[u8], expected: &ObjectId) -> bool {
        self.digest(data) == *expected
    }
}

impl<D: ContentDigest + ?Sized> ContentDigest for &D {
    fn digest(&self, data: &[u8]) -> ObjectId {
        (**self).digest(data)
    }
}

impl<D: ContentDigest + ?Sized> ContentDigest for Box<D> {
    fn digest(&self, data: &[u8]) -> ObjectId {
        (**self).digest(data)
    }
}
