use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Configuration for a roster session.
///
/// Settings control presentation and the export artifact; the record
/// collection itself is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// strftime format used for the created column in rendered rows.
    date_format: String,

    /// Path the export artifact is written to.
    export_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            export_file: default_export_file(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(ConfigError::Write)
    }

    /// Loads the configuration, falling back to defaults.
    ///
    /// An absent path or an unreadable file yields [`Config::default`]; the
    /// failure is logged at debug level rather than surfaced.
    #[must_use]
    pub fn load_or_default(path: Option<&Path>) -> Self {
        path.map_or_else(Self::default, |path| {
            Self::load(path).unwrap_or_else(|e| {
                tracing::debug!("failed to load config: {e}");
                Self::default()
            })
        })
    }

    /// The strftime format for the created column.
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// The path the export artifact is written to.
    #[must_use]
    pub fn export_file(&self) -> &Path {
        &self.export_file
    }

    /// Overrides the export artifact path.
    pub fn set_export_file(&mut self, path: PathBuf) {
        self.export_file = path;
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_export_file() -> PathBuf {
    PathBuf::from("export.json")
}

/// Error returned when configuration cannot be loaded or saved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[source] io::Error),

    /// The config file is not valid TOML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The config file could not be written.
    #[error("failed to write config file: {0}")]
    Write(#[source] io::Error),
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_date_format")]
        date_format: String,

        #[serde(default = "default_export_file")]
        export_file: PathBuf,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                date_format,
                export_file,
            } => Self {
                date_format,
                export_file,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            date_format: config.date_format,
            export_file: config.export_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\ndate_format = \"%d/%m/%Y\"\nexport_file = \"out.json\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.date_format(), "%d/%m/%Y");
        assert_eq!(config.export_file(), Path::new("out.json"));
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read(_)));
    }

    #[test]
    fn load_or_default_swallows_failures() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        assert_eq!(Config::load_or_default(Some(&missing)), Config::default());
        assert_eq!(Config::load_or_default(None), Config::default());
    }

    #[test]
    fn empty_file_returns_default() {
        // Deserialising a file with only the version tag yields the defaults.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let mut config = Config::default();
        config.set_export_file(PathBuf::from("roster.json"));
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
