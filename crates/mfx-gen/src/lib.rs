//! Deterministic fixture generators for content-addressed test suites.
//!
//! - [`BlockGenerator`] produces flat blocks whose payloads are the decimal
//!   strings `"1"`, `"2"`, ... of a private counter.
//! - [`DagGenerator`] builds Merkle trees of a given fan-out and depth,
//!   committing every node to a [`NodeAdder`](mfx_store::NodeAdder) as it
//!   goes, children before parents.
//!
//! Both generators own their counter. Two fresh instances driven through the
//! same calls produce identical output; one instance never repeats itself.
//! Generators take `&mut self`, so a single instance cannot be driven from
//! two threads at once, while separate instances are fully independent.
//!
//! [`walk_dag`] reads a generated tree back out of a store and re-derives
//! every identifier along the way.

pub mod block;
pub mod config;
pub mod dag;
pub mod error;
pub mod node;
pub mod shape;
pub mod walk;

pub use block::{Block, BlockGenerator};
pub use config::{DynDigest, GeneratorConfig};
pub use dag::{DagGenerator, GeneratedDag};
pub use error::{GenError, GenResult};
pub use node::DagNode;
pub use shape::DagShape;
pub use walk::walk_dag;
