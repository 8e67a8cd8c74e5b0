use crate::domain::{record::Record, Role};

/// Filter criteria applied to the store to derive the displayed projection.
///
/// Both predicates are AND-combined; an empty text or an unset role disables
/// that predicate entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
    role: Option<Role>,
}

impl Query {
    /// An unfiltered query, matching every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text filter. Builder form, for tests and benches.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(Some(text.to_string()));
        self
    }

    /// Sets the role filter. Builder form.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Sets or clears the free-text filter.
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text.map(|text| text.trim().to_string()).unwrap_or_default();
    }

    /// Sets or clears the role filter.
    pub const fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
    }

    /// The active text filter, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        (!self.text.is_empty()).then_some(self.text.as_str())
    }

    /// The active role filter, if any.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    /// Whether no predicate is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.role.is_none()
    }

    /// Whether a record belongs to this query's projection.
    ///
    /// The text predicate is a case-insensitive substring match against
    /// name, email and role; the role predicate is exact equality.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        let matches_text = self.text.is_empty() || {
            let needle = self.text.to_lowercase();
            [record.name(), record.email(), record.role().as_str()]
                .iter()
                .any(|haystack| haystack.to_lowercase().contains(&needle))
        };

        let matches_role = self.role.is_none_or(|role| record.role() == role);

        matches_text && matches_role
    }
}
