//! Document storage for locrec.
//!
//! Localization documents are read wholesale, reconciled in memory, and
//! written back wholesale. This crate owns both ends of that cycle.
//!
//! # Storage Backends
//!
//! All backends implement the [`DocumentStore`] trait:
//!
//! - [`FsDocumentStore`] -- UTF-8 JSON files on disk, replaced atomically
//! - [`InMemoryDocumentStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. A document that is missing or does not parse is reported as
//!    [`StoreError::DocumentUnavailable`] naming the offending path.
//! 2. Output uses stable indentation and keeps non-ASCII text unescaped.
//! 3. A save either fully replaces the previous content or leaves it intact.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod codec;
pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use codec::{decode, encode, DEFAULT_INDENT};
pub use error::{StoreError, StoreResult, Unavailable};
pub use fs::FsDocumentStore;
pub use memory::InMemoryDocumentStore;
pub use traits::DocumentStore;
