use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{trace, warn};

use mfx_crypto::ContentDigest;
use mfx_types::ObjectId;

use crate::error::{StoreError, StoreResult};
use crate::node::StoredNode;
use crate::traits::{NodeAdder, NodeGetter};

/// In-memory, HashMap-based node store.
///
/// Intended for tests and embedding. All nodes are held in memory behind a
/// `RwLock` for safe concurrent access. Nodes are cloned on read; the payload
/// is a `Bytes` handle so the clone is cheap.
pub struct InMemoryNodeStore {
    nodes: RwLock<HashMap<ObjectId, StoredNode>>,
}

impl InMemoryNodeStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            nodes: RwLock::new(HashMap::new()),
        }
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.nodes.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored nodes.
    pub fn total_bytes(&self) -> u64 {
        self.nodes
            .read()
            .expect("lock poisoned")
            .values()
            .map(|node| node.size)
            .sum()
    }

    /// Return a sorted list of all node IDs in the store.
    pub fn all_ids(&self) -> Vec<ObjectId> {
        let map = self.nodes.read().expect("lock poisoned");
        let mut ids: Vec<ObjectId> = map.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Re-digest every stored node and fail on the first one whose bytes do
    /// not reproduce its key.
    pub fn verify_all<D: ContentDigest + ?Sized>(&self, digest: &D) -> StoreResult<()> {
        let map = self.nodes.read().expect("lock poisoned");
        for (id, node) in map.iter() {
            let computed = digest.digest(&node.data);
            if computed != *id {
                warn!(id = %id.short_hex(), computed = %computed.short_hex(), "stored node fails verification");
                return Err(StoreError::IdentifierMismatch {
                    id: *id,
                    computed,
                });
            }
        }
        Ok(())
    }
}

impl Default for InMemoryNodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeAdder for InMemoryNodeStore {
    fn add(&self, node: &StoredNode) -> StoreResult<()> {
        if node.id.is_null() {
            return Err(StoreError::NullObjectId);
        }
        let mut map = self.nodes.write().expect("lock poisoned");
        // Same ID always maps to the same content, so an existing entry wins.
        map.entry(node.id).or_insert_with(|| node.clone());
        trace!(id = %node.id.short_hex(), size = node.size, "stored node");
        Ok(())
    }
}

impl NodeGetter for InMemoryNodeStore {
    fn get(&self, id: &ObjectId) -> StoreResult<Option<StoredNode>> {
        let map = self.nodes.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn contains(&self, id: &ObjectId) -> StoreResult<bool> {
        let map = self.nodes.read().expect("lock poisoned");
        Ok(map.contains_key(id))
    }
}

impl std::fmt::Debug for InMemoryNodeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryNodeStore")
            .field("node_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfx_crypto::{ContentHasher, Sha256Digest};

    fn make_node(content: &'static [u8]) -> StoredNode {
        StoredNode::from_data(&ContentHasher::NODE, content)
    }

    // -----------------------------------------------------------------------
    // Add / get
    // -----------------------------------------------------------------------

    #[test]
    fn add_then_get() {
        let store = InMemoryNodeStore::new();
        let node = make_node(b"{\"seq\":\"1\"}");
        store.add(&node).unwrap();

        let read_back = store.get(&node.id).unwrap().expect("should exist");
        assert_eq!(read_back, node);
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryNodeStore::new();
        let id = ObjectId::from_hash([3; 32]);
        assert!(store.get(&id).unwrap().is_none());
        assert!(!store.contains(&id).unwrap());
    }

    #[test]
    fn add_is_idempotent() {
        let store = InMemoryNodeStore::new();
        let node = make_node(b"same");
        store.add(&node).unwrap();
        store.add(&node).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn null_id_is_rejected() {
        let store = InMemoryNodeStore::new();
        let node = StoredNode::new(ObjectId::null(), &b"x"[..]);
        assert!(matches!(store.add(&node), Err(StoreError::NullObjectId)));
        assert!(store.is_empty());
    }

    #[test]
    fn add_many_stores_all() {
        let store = InMemoryNodeStore::new();
        let nodes = vec![make_node(b"a"), make_node(b"b"), make_node(b"c")];
        store.add_many(&nodes).unwrap();
        assert_eq!(store.len(), 3);
        for node in &nodes {
            assert!(store.contains(&node.id).unwrap());
        }
    }

    #[test]
    fn add_through_reference() {
        let store = InMemoryNodeStore::new();
        let by_ref = &store;
        by_ref.add(&make_node(b"r")).unwrap();
        assert_eq!(store.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn total_bytes_sums_node_sizes() {
        let store = InMemoryNodeStore::new();
        assert_eq!(store.total_bytes(), 0);
        store.add(&make_node(b"12345")).unwrap();
        store.add(&make_node(b"123456789")).unwrap();
        assert_eq!(store.total_bytes(), 14);
    }

    #[test]
    fn all_ids_is_sorted() {
        let store = InMemoryNodeStore::new();
        for content in [&b"aaa"[..], &b"bbb"[..], &b"ccc"[..]] {
            store.add(&make_node(content)).unwrap();
        }
        let ids = store.all_ids();
        assert_eq!(ids.len(), 3);
        for w in ids.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    // -----------------------------------------------------------------------
    // Verification
    // -----------------------------------------------------------------------

    #[test]
    fn verify_all_accepts_honest_nodes() {
        let store = InMemoryNodeStore::new();
        store.add(&make_node(b"one")).unwrap();
        store.add(&make_node(b"two")).unwrap();
        store.verify_all(&ContentHasher::NODE).unwrap();
    }

    #[test]
    fn verify_all_rejects_under_other_digest() {
        let store = InMemoryNodeStore::new();
        store.add(&make_node(b"one")).unwrap();
        let err = store.verify_all(&Sha256Digest).unwrap_err();
        assert!(matches!(err, StoreError::IdentifierMismatch { .. }));
    }

    // -----------------------------------------------------------------------
    // Concurrent read safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryNodeStore::new());
        let node = make_node(b"shared");
        store.add(&node).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let id = node.id;
                thread::spawn(move || {
                    let read = store.get(&id).unwrap().expect("should exist");
                    assert!(read.verify(&ContentHasher::NODE));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = InMemoryNodeStore::new();
        store.add(&make_node(b"x")).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryNodeStore"));
        assert!(debug.contains("node_count"));
    }
}
