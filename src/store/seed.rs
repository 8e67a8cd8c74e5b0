//! The fixed sample roster used by the seed operation.

use crate::domain::record::{RecordDraft, RecordFields};

/// One sample entry. Stored as plain text and validated on insertion so the
/// samples take the same path into the store as user input.
pub(crate) struct Sample {
    pub(crate) name: &'static str,
    pub(crate) email: &'static str,
    pub(crate) role: &'static str,
    pub(crate) status: &'static str,
}

impl Sample {
    pub(crate) fn fields(&self) -> RecordFields {
        RecordDraft {
            name: self.name.to_string(),
            email: self.email.to_string(),
            role: self.role.to_string(),
            status: self.status.to_string(),
        }
        .validate()
        .expect("sample records are well-formed")
    }
}

/// The demonstration dataset, inserted in order; the last entry ends up
/// frontmost in the store.
pub(crate) const SAMPLES: [Sample; 8] = [
    Sample {
        name: "Amara Okafor",
        email: "amara@fieldnotes.io",
        role: "Admin",
        status: "Active",
    },
    Sample {
        name: "Lars Eriksen",
        email: "lars@fjordworks.no",
        role: "Editor",
        status: "Invited",
    },
    Sample {
        name: "Priya Raman",
        email: "priya@papertrail.dev",
        role: "Viewer",
        status: "Suspended",
    },
    Sample {
        name: "Tomas Herrera",
        email: "tomas@ensayo.mx",
        role: "Editor",
        status: "Active",
    },
    Sample {
        name: "Mei-Ling Chen",
        email: "meiling@harborlight.app",
        role: "Admin",
        status: "Active",
    },
    Sample {
        name: "Jonas Weber",
        email: "jonas@werkstatt.de",
        role: "Editor",
        status: "Invited",
    },
    Sample {
        name: "Sofia Almeida",
        email: "sofia@mirante.pt",
        role: "Viewer",
        status: "Suspended",
    },
    Sample {
        name: "Noah Fischer",
        email: "noah@atelier.ch",
        role: "Editor",
        status: "Active",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_validates() {
        for sample in &SAMPLES {
            sample.fields();
        }
    }
}
