use mfx_types::ObjectId;

use crate::error::StoreResult;
use crate::node::StoredNode;

/// Sink for content-addressed nodes.
///
/// This is the only capability the generators need. Implementations must
/// commit the node before returning `Ok`: a later lookup by `node.id` has to
/// succeed. Adding a node that is already present is a no-op.
pub trait NodeAdder {
    /// Commit a single node.
    fn add(&self, node: &StoredNode) -> StoreResult<()>;

    /// Commit several nodes in order, stopping at the first failure.
    ///
    /// Default implementation calls `add()` for each node. Backends may
    /// override for better performance.
    fn add_many(&self, nodes: &[StoredNode]) -> StoreResult<()> {
        nodes.iter().try_for_each(|node| self.add(node))
    }
}

/// Read access to stored nodes, used when verifying generated fixtures.
pub trait NodeGetter {
    /// Fetch a node by identifier. Returns `Ok(None)` if it is absent.
    fn get(&self, id: &ObjectId) -> StoreResult<Option<StoredNode>>;

    /// Check whether a node exists.
    fn contains(&self, id: &ObjectId) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }
}

impl<S: NodeAdder + ?Sized> NodeAdder for &S {
    fn add(&self, node: &StoredNode) -> StoreResult<()> {
        (**self).add(node)
    }
}

impl<S: NodeGetter + ?Sized> NodeGetter for &S {
    fn get(&self, id: &ObjectId) -> StoreResult<Option<StoredNode>> {
        (**self).get(id)
    }
}
