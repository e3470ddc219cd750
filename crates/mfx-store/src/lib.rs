//! Content-addressed node storage for merkle-fixtures.
//!
//! Generators write into an external store through the [`NodeAdder`] trait.
//! Nothing in the generators reads back; [`NodeGetter`] exists for
//! verification and tests.
//!
//! # Storage Backends
//!
//! - [`InMemoryNodeStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Nodes are immutable once added (content-addressing guarantees this).
//! 2. `add` commits before it returns: a successful `add` is immediately
//!    visible to `get`.
//! 3. The store never interprets node contents; it is keyed by the
//!    identifier the caller computed.
//! 4. All errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod node;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryNodeStore;
pub use node::StoredNode;
pub use traits::{NodeAdder, NodeGetter};
