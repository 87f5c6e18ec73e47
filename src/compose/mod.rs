//! Compose document editing
//!
//! This module provides read/modify/serialize access to a compose file,
//! touching only the target service's label list.

pub mod document;
pub mod labels;

pub use document::ComposeDocument;
pub use labels::{apply_traefik_labels, upsert_label};
