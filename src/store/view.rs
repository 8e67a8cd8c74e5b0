use std::fmt::Write as _;

use crate::{
    domain::{
        record::{Record, RecordId},
        Config,
    },
    store::{Query, RecordStore},
};

/// The empty-state message shown when the projection has no rows.
pub const EMPTY_MESSAGE: &str = "No matching records. Try clearing filters.";

/// A renderable snapshot of the filtered store.
///
/// Rendering is a pure derivation: the same store, query and configuration
/// always produce the same view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// The projection is empty; show [`EMPTY_MESSAGE`].
    Empty,
    /// One row per projected record, in display order.
    Rows(Vec<RowView>),
}

/// One displayable row, keyed by the record's id.
///
/// All user-supplied text arrives here already escaped; consumers may embed
/// it in markup or print it without further treatment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// The record's id, the key for edit and delete actions.
    pub id: RecordId,
    /// Escaped display name.
    pub name: String,
    /// Escaped email.
    pub email: String,
    /// Escaped role string.
    pub role: String,
    /// Escaped status string.
    pub status: String,
    /// Creation date, formatted per configuration.
    pub created: String,
}

impl RowView {
    fn from_record(record: &Record, config: &Config) -> Self {
        let mut created = String::new();
        if write!(created, "{}", record.created().format(config.date_format())).is_err() {
            // An invalid strftime spec falls back to RFC 3339.
            created = record.created().to_rfc3339();
        }

        Self {
            id: record.id(),
            name: escape(record.name()),
            email: escape(record.email()),
            role: escape(record.role().as_str()),
            status: escape(record.status().as_str()),
            created,
        }
    }
}

/// Derives the view state for the current projection.
#[must_use]
pub fn render(store: &RecordStore, query: &Query, config: &Config) -> ViewState {
    let projected = store.project(query);

    if projected.is_empty() {
        return ViewState::Empty;
    }

    ViewState::Rows(
        projected
            .into_iter()
            .map(|record| RowView::from_record(record, config))
            .collect(),
    )
}

/// Escapes user-supplied text for display.
///
/// Markup metacharacters become entities and ASCII control characters are
/// dropped, so escaped text is inert both in markup contexts and on a
/// terminal. Escaping display fields is a required security property, not a
/// presentation choice.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c if c.is_ascii_control() => {}
            c => escaped.push(c),
        }
    }
    escaped
}
