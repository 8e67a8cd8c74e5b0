//! The in-memory record store and its derived views.
//!
//! The [`RecordStore`] owns the record sequence and the identifier counter
//! for one session. Everything else in this module derives from it without
//! mutating it: [`query`] filters, [`view`] renders, [`export`] serializes.

mod memory;
pub use memory::{RecordStore, StoreError};

/// Filter criteria and projection matching.
pub mod query;
pub use query::Query;

/// Escaped, renderable view states derived from the store.
pub mod view;
pub use view::{render, RowView, ViewState};

/// JSON serialization of the filtered view.
pub mod export;
pub use export::{export, export_to_path, ExportError};

mod seed;
