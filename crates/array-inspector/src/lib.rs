//! # array-inspector
//!
//! Defensive typed accessors over loosely-typed associative data, as produced
//! by decoding JSON into [`serde_json::Value`].
//!
//! Decoded data is hostile: keys go missing, values arrive with unexpected
//! types. Every accessor here answers with an absence marker (`None`, or an
//! empty collection for [`ArrayInspector::get_array`]) instead of panicking
//! or returning an error, so callers branch on presence rather than handle
//! failure paths. There is no error type in this crate.
//!
//! ## Quick start
//!
//! ```rust
//! use array_inspector::{ArrayInspector, ValueKind};
//! use serde_json::json;
//!
//! let data = json!({"title": "Widget", "sequence": 3, "draft": "  "});
//! let inspector = ArrayInspector::new(&data);
//!
//! assert_eq!(inspector.get_string("title"), Some("Widget"));
//! assert_eq!(inspector.get_positive_integer("sequence"), Some(3));
//! assert_eq!(inspector.get_non_empty_string("draft"), None);
//! assert!(inspector.has("missing", ValueKind::Null));
//! ```
//!
//! ## Modules
//!
//! - [`inspector`] — the [`ArrayInspector`] view and its typed getters
//! - [`types`] — [`Key`] (mixed index/name lookup) and [`ValueKind`] (category tags)

pub mod inspector;
pub mod types;

pub use inspector::ArrayInspector;
pub use types::{Key, ValueKind};
