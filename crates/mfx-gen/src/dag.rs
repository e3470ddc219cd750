//! Merkle DAG generation.
//!
//! [`DagGenerator`] builds a complete tree depth-first without recursion.
//! A node's identifier depends on the identifiers of its children, so
//! children are always encoded and committed before their parent. Every
//! node is handed to the store as soon as it is encoded; the first store
//! failure aborts the whole call and leaves already-committed descendants
//! in place.

use tracing::{debug, trace};

use mfx_crypto::{ContentDigest, ContentHasher};
use mfx_store::{NodeAdder, StoredNode};
use mfx_types::ObjectId;

use crate::error::GenResult;
use crate::node::DagNode;
use crate::shape::DagShape;

/// Upper bound on ids reserved up front; larger trees grow the vector.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Upper bound on links reserved up front for one node.
const LINKS_PREALLOC_LIMIT: usize = 1 << 10;

/// An internal node whose children are still being built.
struct Frame {
    depth: u32,
    slot: usize,
    links: Vec<ObjectId>,
}

/// Result of a successful [`DagGenerator::make_dag`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedDag {
    /// Identifier of the root node.
    pub root: ObjectId,
    /// Every node identifier in pre-order: the root first, then each child
    /// subtree in generation order.
    pub ids: Vec<ObjectId>,
}

impl GeneratedDag {
    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// A successful call always records at least the root.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Generates Merkle trees on demand.
///
/// Each tree from one instance differs from every earlier one, because the
/// counter embedded in each node never repeats. Two fresh instances given the
/// same sequence of calls produce identical trees.
#[derive(Debug)]
pub struct DagGenerator<D = ContentHasher> {
    seq: u64,
    digest: D,
}

impl DagGenerator<ContentHasher> {
    /// A generator using the BLAKE3 node hasher.
    pub fn new() -> Self {
        Self::with_digest(ContentHasher::NODE)
    }
}

impl Default for DagGenerator<ContentHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ContentDigest> DagGenerator<D> {
    pub fn with_digest(digest: D) -> Self {
        Self { seq: 0, digest }
    }

    /// Number of nodes encoded so far, across all calls.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn digest(&self) -> &D {
        &self.digest
    }

    /// Build a tree with `fanout` children per internal node and `depth`
    /// levels, adding every node to `adder`.
    ///
    /// `depth` must be at least 1. A `fanout` of zero yields a single node.
    pub fn make_dag<A>(&mut self, adder: &A, fanout: u32, depth: u32) -> GenResult<GeneratedDag>
    where
        A: NodeAdder + ?Sized,
    {
        self.make_dag_shape(adder, DagShape::new(fanout, depth))
    }

    /// [`make_dag`](Self::make_dag) taking a [`DagShape`].
    pub fn make_dag_shape<A>(&mut self, adder: &A, shape: DagShape) -> GenResult<GeneratedDag>
    where
        A: NodeAdder + ?Sized,
    {
        let expected = shape.node_count()?;
        let capacity = usize::try_from(expected).map_or(PREALLOC_LIMIT, |n| n.min(PREALLOC_LIMIT));
        let mut ids = Vec::with_capacity(capacity);
        let root = self.build(adder, shape.fanout, shape.depth, &mut ids)?;
        debug!(root = %root.short_hex(), %shape, nodes = ids.len(), "generated DAG");
        Ok(GeneratedDag { root, ids })
    }

    /// Build the tree, appending ids to `ids` root-first.
    ///
    /// Post-order over an explicit stack of open internal nodes, so stack
    /// use does not grow with `depth`.
    fn build<A>(
        &mut self,
        adder: &A,
        fanout: u32,
        depth: u32,
        ids: &mut Vec<ObjectId>,
    ) -> GenResult<ObjectId>
    where
        A: NodeAdder + ?Sized,
    {
        let fanout = fanout as usize;
        let mut frames: Vec<Frame> = Vec::new();
        let mut next = Some(depth);

        loop {
            let mut done = match next.take() {
                Some(1) => {
                    let id = self.encode_node(adder, Vec::new())?;
                    ids.push(id);
                    Some(id)
                }
                Some(depth) => {
                    // The parent's slot is reserved now; its id is only known
                    // once every child is built.
                    frames.push(Frame {
                        depth,
                        slot: ids.len(),
                        links: Vec::with_capacity(fanout.min(LINKS_PREALLOC_LIMIT)),
                    });
                    ids.push(ObjectId::null());
                    None
                }
                None => None,
            };

            while let Some(frame) = frames.last_mut() {
                if let Some(id) = done.take() {
                    frame.links.push(id);
                }
                if frame.links.len() < fanout {
                    next = Some(frame.depth - 1);
                    break;
                }
                if let Some(Frame { slot, links, .. }) = frames.pop() {
                    let id = self.encode_node(adder, links)?;
                    ids[slot] = id;
                    done = Some(id);
                }
            }

            if let Some(root) = done {
                return Ok(root);
            }
        }
    }

    /// Bump the counter, encode a node over `links` and commit it.
    fn encode_node<A>(&mut self, adder: &A, links: Vec<ObjectId>) -> GenResult<ObjectId>
    where
        A: NodeAdder + ?Sized,
    {
        self.seq += 1;
        let node = DagNode::with_links(self.seq, links);
        let data = node.encode()?;
        let stored = StoredNode::from_data(&self.digest, data);
        adder.add(&stored)?;
        trace!(seq = self.seq, id = %stored.id.short_hex(), links = node.links().len(), "encoded DAG node");
        Ok(stored.id)
    }
}
