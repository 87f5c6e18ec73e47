//! traefik-labels - Traefik routing labels for compose files
//!
//! A small deployment helper that stamps routing metadata onto one service
//! of a container-compose YAML document:
//!
//! - Schema-free compose document parsing (unknown keys pass through)
//! - Idempotent label upsert (replace in place, or append)
//! - Traefik enable flag and per-deployment host router rule
//! - Serialization with explicit YAML document markers

pub mod compose;
pub mod error;

pub use error::{LabelError, Result};
