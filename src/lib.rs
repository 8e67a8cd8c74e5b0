//! In-Memory Roster Management
//!
//! Records live in process memory for the lifetime of an interactive session
//! and are discarded on exit.

pub mod domain;
pub use domain::{Config, Record, RecordDraft, RecordFields, RecordId, Role, Status};

pub mod store;
pub use store::{Query, RecordStore, StoreError, ViewState};
