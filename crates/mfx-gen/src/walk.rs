//! Reading generated trees back out of a store.

use tracing::warn;

use mfx_crypto::ContentDigest;
use mfx_store::NodeGetter;
use mfx_types::ObjectId;

use crate::error::{GenError, GenResult};
use crate::node::DagNode;

/// Fetch every node reachable from `root`, depth-first in pre-order.
///
/// Each node's stored bytes are re-digested with `digest` and must reproduce
/// the identifier it was linked by. The result lists nodes in the same order
/// [`DagGenerator::make_dag`](crate::DagGenerator::make_dag) returns ids.
pub fn walk_dag<S, D>(
    store: &S,
    digest: &D,
    root: ObjectId,
) -> GenResult<Vec<(ObjectId, DagNode)>>
where
    S: NodeGetter + ?Sized,
    D: ContentDigest + ?Sized,
{
    let mut nodes = Vec::new();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        let stored = store.get(&id)?.ok_or(GenError::NodeNotFound(id))?;
        let computed = digest.digest(&stored.data);
        if computed != id {
            warn!(expected = %id.short_hex(), computed = %computed.short_hex(), "node content does not match its id");
            return Err(GenError::IdentifierMismatch {
                expected: id,
                computed,
            });
        }

        let node = DagNode::decode(id, &stored.data)?;
        // Reversed so the leftmost child is visited first.
        stack.extend(node.links().iter().rev().copied());
        nodes.push((id, node));
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DagGenerator;
    use mfx_crypto::{ContentHasher, Sha256Digest};
    use mfx_store::{InMemoryNodeStore, NodeAdder, StoredNode};

    #[test]
    fn walks_a_single_leaf() {
        let store = InMemoryNodeStore::new();
        let dag = DagGenerator::new().make_dag(&store, 4, 1).unwrap();

        let nodes = walk_dag(&store, &ContentHasher::NODE, dag.root).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].1, DagNode::leaf(1));
    }

    #[test]
    fn missing_root_is_reported() {
        let store = InMemoryNodeStore::new();
        let id = ObjectId::from_hash([4; 32]);
        let err = walk_dag(&store, &ContentHasher::NODE, id).unwrap_err();
        assert!(matches!(err, GenError::NodeNotFound(missing) if missing == id));
    }

    #[test]
    fn dangling_link_is_reported() {
        let store = InMemoryNodeStore::new();
        let dangling = ObjectId::from_hash([5; 32]);
        let data = DagNode::with_links(1, vec![dangling]).encode().unwrap();
        let root = StoredNode::from_data(&ContentHasher::NODE, data);
        store.add(&root).unwrap();

        let err = walk_dag(&store, &ContentHasher::NODE, root.id).unwrap_err();
        assert!(matches!(err, GenError::NodeNotFound(missing) if missing == dangling));
    }

    #[test]
    fn wrong_digest_is_a_mismatch() {
        let store = InMemoryNodeStore::new();
        let dag = DagGenerator::new().make_dag(&store, 2, 2).unwrap();
        let err = walk_dag(&store, &Sha256Digest, dag.root).unwrap_err();
        assert!(matches!(err, GenError::IdentifierMismatch { expected, .. } if expected == dag.root));
    }

    #[test]
    fn tampered_content_is_a_mismatch() {
        let store = InMemoryNodeStore::new();
        let honest = DagNode::leaf(1).encode().unwrap();
        let id = ContentHasher::NODE.hash(&honest);
        store
            .add(&StoredNode::new(id, br#"{"seq":"2"}"#.to_vec()))
            .unwrap();

        let err = walk_dag(&store, &ContentHasher::NODE, id).unwrap_err();
        assert!(matches!(err, GenError::IdentifierMismatch { .. }));
    }

    #[test]
    fn undecodable_content_is_reported() {
        let store = InMemoryNodeStore::new();
        let node = StoredNode::from_data(&ContentHasher::NODE, &b"not a node"[..]);
        store.add(&node).unwrap();

        let err = walk_dag(&store, &ContentHasher::NODE, node.id).unwrap_err();
        assert!(matches!(err, GenError::Decode { .. }));
    }
}
