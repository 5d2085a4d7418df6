//! Foundation types for locrec, the localization-file reconciler.
//!
//! Every other locrec crate depends on `locrec-types`. Documents are modelled
//! as an explicit tagged tree instead of loosely typed JSON values, so the
//! container/leaf distinction is decided by `match` rather than by runtime
//! type inspection.
//!
//! # Key Types
//!
//! - [`Node`] — a document node: either a [`Container`] or a [`Leaf`]
//! - [`Leaf`] — scalar values plus opaque lists
//! - [`KeyPath`] — validated dot-delimited address of a node
//! - [`Document`] — a loaded tree with path lookup helpers

pub mod document;
pub mod error;
pub mod node;
pub mod path;

pub use document::Document;
pub use error::{TypeError, TypeResult};
pub use node::{Container, Leaf, Node};
pub use path::KeyPath;
