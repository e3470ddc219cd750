use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// Fan-out and depth of a generated tree.
///
/// Depth counts levels with the leaf level as 1, so `depth == 1` is a single
/// leaf. A `fanout` of zero is allowed: every internal node then has no
/// children and encodes exactly like a leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DagShape {
    pub fanout: u32,
    pub depth: u32,
}

impl DagShape {
    pub const fn new(fanout: u32, depth: u32) -> Self {
        Self { fanout, depth }
    }

    /// Reject shapes that cannot be generated.
    pub fn validate(&self) -> GenResult<()> {
        self.node_count().map(|_| ())
    }

    /// Exact number of nodes `f^0 + f^1 + ... + f^(d-1)`.
    ///
    /// With `fanout == 0` only the root is built, whatever the depth.
    pub fn node_count(&self) -> GenResult<u64> {
        if self.depth == 0 {
            return Err(self.invalid("depth must be at least 1"));
        }
        if self.fanout == 0 {
            return Ok(1);
        }
        let fanout = u64::from(self.fanout);
        let mut total: u64 = 0;
        let mut level: u64 = 1;
        for i in 0..self.depth {
            total = total
                .checked_add(level)
                .ok_or_else(|| self.invalid("node count overflows u64"))?;
            if i + 1 < self.depth {
                level = level
                    .checked_mul(fanout)
                    .ok_or_else(|| self.invalid("node count overflows u64"))?;
            }
        }
        Ok(total)
    }

    fn invalid(&self, reason: &'static str) -> GenError {
        GenError::InvalidShape {
            fanout: self.fanout,
            depth: self.depth,
            reason,
        }
    }
}

impl Default for DagShape {
    fn default() -> Self {
        Self::new(5, 3)
    }
}

impl std::fmt::Display for DagShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fanout={} depth={}", self.fanout, self.depth)
    }
}
