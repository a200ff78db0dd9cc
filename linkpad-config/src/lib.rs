//! Parameter codec for linkpad.
//!
//! This crate is the pure half of linkpad: it translates between a page
//! URL's query string and a typed editor configuration, applying defaults
//! and validation. It performs no I/O and has no side effects. It includes:
//!
//! - Typed configuration model (themes, wrap modes, editor kind)
//! - Default values for every configuration field
//! - Ordered query-string model with host-page search-params semantics
//! - `decode` / `encode` translation between the two representations

pub mod codec;
pub mod defaults;
pub mod query;
mod types;

// Re-export main types for convenience
pub use codec::{Decoded, LinkState, decode, encode, encode_language};
pub use query::Query;
pub use types::{DiffOptions, EditorKind, EditorOptions, MinimapOptions, Theme, WordWrap};
