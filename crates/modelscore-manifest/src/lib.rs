//! Manifest ingestion adapters.
//!
//! The engine consumes node mappings only; this crate extracts model nodes
//! (and the nodes that depend on them) from an already-parsed manifest
//! document. Reading the document from wherever it lives is the caller's
//! concern.

#![forbid(unsafe_code)]

mod parse;

pub use parse::{parse_manifest, parse_manifest_json};
