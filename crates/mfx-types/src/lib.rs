//! Foundation types for merkle-fixtures.
//!
//! Every other crate in the workspace depends on `mfx-types` for the
//! [`ObjectId`] content identifier handed between generators, digests and
//! stores.

pub mod error;
pub mod object;

pub use error::TypeError;
pub use object::ObjectId;
