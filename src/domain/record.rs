use std::{fmt, num::NonZeroU64, str::FromStr};

use chrono::{DateTime, Utc};
use non_empty_string::NonEmptyString;

use crate::domain::field::{FieldName, ParseRoleError, ParseStatusError, Role, Status};

/// The store-assigned identifier of a record.
///
/// Identifiers are positive integers, unique for the lifetime of a session
/// and never reused after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(NonZeroU64);

impl RecordId {
    /// The first identifier a fresh store hands out.
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Returns the identifier as a plain integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u64 = s
            .trim()
            .parse()
            .map_err(|_| ParseIdError(s.to_string()))?;
        NonZeroU64::new(raw)
            .map(Self)
            .ok_or_else(|| ParseIdError(s.to_string()))
    }
}

/// Error returned when a string is not a positive integer identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid record id '{0}': expected a positive integer")]
pub struct ParseIdError(String);

/// One managed roster entry.
///
/// A record carries a store-assigned identity (`id`, `created`) that is fixed
/// at construction, and four editable fields that an update replaces
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    fields: RecordFields,
    created: DateTime<Utc>,
}

impl Record {
    /// Constructs a record, stamping the creation time.
    ///
    /// Only the store creates records; identity assignment lives there.
    pub(crate) fn new(id: RecordId, fields: RecordFields) -> Self {
        Self {
            id,
            fields,
            created: Utc::now(),
        }
    }

    /// The store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.fields.name.as_str()
    }

    /// The contact email. Treated as opaque text, never validated as a
    /// deliverable address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.fields.email.as_str()
    }

    /// The assigned role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.fields.role
    }

    /// The lifecycle status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.fields.status
    }

    /// When the record was inserted. Immutable after creation.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Replaces the four editable fields, preserving `id` and `created`.
    pub(crate) fn apply(&mut self, fields: RecordFields) {
        self.fields = fields;
    }
}

/// The validated editable fields of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub(crate) name: NonEmptyString,
    pub(crate) email: NonEmptyString,
    pub(crate) role: Role,
    pub(crate) status: Status,
}

/// A record draft as collected from the form, before validation.
///
/// All four fields are raw text; [`RecordDraft::validate`] is the single
/// gate between user input and the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    /// Display name, required.
    pub name: String,
    /// Contact email, required but opaque.
    pub email: String,
    /// Role, must name one of the closed role set.
    pub role: String,
    /// Status, must name one of the closed status set.
    pub status: String,
}

impl RecordDraft {
    /// Validates the draft into typed fields.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first empty field, or the first value
    /// outside its closed set. Nothing is committed on failure.
    pub fn validate(self) -> Result<RecordFields, ValidationError> {
        let name = non_empty(&self.name, FieldName::Name)?;
        let email = non_empty(&self.email, FieldName::Email)?;

        if self.role.trim().is_empty() {
            return Err(ValidationError::MissingField(FieldName::Role));
        }
        let role = self.role.parse()?;

        if self.status.trim().is_empty() {
            return Err(ValidationError::MissingField(FieldName::Status));
        }
        let status = self.status.parse()?;

        Ok(RecordFields {
            name,
            email,
            role,
            status,
        })
    }
}

impl From<&Record> for RecordDraft {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            email: record.email().to_string(),
            role: record.role().to_string(),
            status: record.status().to_string(),
        }
    }
}

fn non_empty(raw: &str, field: FieldName) -> Result<NonEmptyString, ValidationError> {
    NonEmptyString::new(raw.trim().to_string())
        .map_err(|_| ValidationError::MissingField(field))
}

/// Error returned when a draft cannot be turned into a record.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty or unset.
    #[error("missing required field: {0}")]
    MissingField(FieldName),

    /// The role value is outside the closed role set.
    #[error(transparent)]
    Role(#[from] ParseRoleError),

    /// The status value is outside the closed status set.
    #[error(transparent)]
    Status(#[from] ParseStatusError),
}
