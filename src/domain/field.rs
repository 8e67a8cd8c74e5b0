use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The role assigned to a record.
///
/// Roles form a closed set; there is no free-text role. Parsing is
/// case-insensitive at the CLI boundary, display and serialization use the
/// canonical capitalized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Can modify content.
    Editor,
    /// Read-only access.
    Viewer,
}

impl Role {
    /// All roles, in selector order.
    pub const VARIANTS: [Self; 3] = [Self::Admin, Self::Editor, Self::Viewer];

    /// Returns the canonical string for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::Viewer => "Viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            "viewer" => Ok(Self::Viewer),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// Error returned when a string does not name a known role.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown role '{0}': expected Admin, Editor or Viewer")]
pub struct ParseRoleError(String);

/// The lifecycle status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The member is active.
    Active,
    /// The member has been invited but has not joined yet.
    Invited,
    /// The member has been suspended.
    Suspended,
}

impl Status {
    /// All statuses, in selector order.
    pub const VARIANTS: [Self; 3] = [Self::Active, Self::Invited, Self::Suspended];

    /// Returns the canonical string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Invited => "Invited",
            Self::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "invited" => Ok(Self::Invited),
            "suspended" => Ok(Self::Suspended),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Error returned when a string does not name a known status.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown status '{0}': expected Active, Invited or Suspended")]
pub struct ParseStatusError(String);

/// Names the four editable fields, for validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    /// The display name.
    Name,
    /// The contact email.
    Email,
    /// The assigned role.
    Role,
    /// The lifecycle status.
    Status,
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Status => "status",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("EDITOR".parse::<Role>().unwrap(), Role::Editor);
        assert_eq!(" Viewer ".parse::<Role>().unwrap(), Role::Viewer);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let error = "owner".parse::<Role>().unwrap_err();
        assert_eq!(error, ParseRoleError("owner".to_string()));
    }

    #[test]
    fn status_round_trips_through_display() {
        for status in Status::VARIANTS {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn canonical_strings_are_capitalized() {
        assert_eq!(Role::Admin.to_string(), "Admin");
        assert_eq!(Status::Suspended.to_string(), "Suspended");
    }
}
