use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    domain::record::Record,
    store::{Query, RecordStore},
};

/// The wire shape of one exported record.
///
/// Field names and order are part of the artifact contract: `id` and
/// `created` are integers (epoch milliseconds for `created`), the rest are
/// strings.
#[derive(Debug, Serialize)]
struct ExportRecord<'a> {
    id: u64,
    created: i64,
    name: &'a str,
    email: &'a str,
    role: &'a str,
    status: &'a str,
}

impl<'a> From<&'a Record> for ExportRecord<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            id: record.id().get(),
            created: record.created().timestamp_millis(),
            name: record.name(),
            email: record.email(),
            role: record.role().as_str(),
            status: record.status().as_str(),
        }
    }
}

/// Serializes the current projection as a pretty-printed JSON array.
///
/// The export reflects the *filtered* view, not the full store, in display
/// order. Returns the number of records written.
///
/// # Errors
///
/// Returns an error if serialization fails or the writer rejects the output.
pub fn export<W: Write>(
    store: &RecordStore,
    query: &Query,
    mut writer: W,
) -> Result<usize, ExportError> {
    let rows: Vec<ExportRecord<'_>> = store.project(query).into_iter().map(Into::into).collect();

    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writeln!(writer)?;

    Ok(rows.len())
}

/// Writes the current projection to the artifact at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_to_path(
    store: &RecordStore,
    query: &Query,
    path: &Path,
) -> Result<usize, ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let count = export(store, query, &mut writer)?;
    writer.flush()?;

    tracing::info!("exported {count} records to {}", path.display());
    Ok(count)
}

/// Error returned when the export artifact cannot be produced.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The artifact could not be written.
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),

    /// The projection could not be serialized.
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{record::RecordDraft, Role},
        store::Query,
    };

    fn store() -> RecordStore {
        let mut store = RecordStore::new();
        for (name, role) in [
            ("Ann", "Admin"),
            ("Ben", "Editor"),
            ("Cam", "Viewer"),
            ("Dee", "Admin"),
            ("Eli", "Editor"),
        ] {
            let fields = RecordDraft {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                role: role.to_string(),
                status: "Active".to_string(),
            }
            .validate()
            .unwrap();
            store.create(fields);
        }
        store
    }

    #[test]
    fn export_reflects_the_filtered_view() {
        let store = store();
        let query = Query::new().with_role(Role::Admin);

        let mut buffer = Vec::new();
        let count = export(&store, &query, &mut buffer).unwrap();
        assert_eq!(count, 2);

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);

        // Display order: newest matching record first.
        assert_eq!(rows[0]["name"], "Dee");
        assert_eq!(rows[1]["name"], "Ann");
    }

    #[test]
    fn exported_records_carry_all_six_fields() {
        let store = store();
        let mut buffer = Vec::new();
        export(&store, &Query::new(), &mut buffer).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let row = &parsed.as_array().unwrap()[0];

        assert!(row["id"].is_u64());
        assert!(row["created"].is_i64());
        for field in ["name", "email", "role", "status"] {
            assert!(row[field].is_string(), "missing field {field}");
        }
        assert_eq!(row.as_object().unwrap().len(), 6);
    }

    #[test]
    fn export_is_pretty_printed() {
        let store = store();
        let mut buffer = Vec::new();
        export(&store, &Query::new(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("[\n"));
        assert!(text.contains("  {"));
    }

    #[test]
    fn empty_projection_exports_an_empty_array() {
        let store = RecordStore::new();
        let mut buffer = Vec::new();
        let count = export(&store, &Query::new(), &mut buffer).unwrap();

        assert_eq!(count, 0);
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }

    #[test]
    fn export_to_path_writes_the_artifact() {
        let store = store();
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("export.json");

        let count = export_to_path(&store, &Query::new(), &path).unwrap();
        assert_eq!(count, 5);

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 5);
    }
}
