//! Settings file handling
//!
//! Settings live in an environment-style `KEY=VALUE` file. Loading never
//! touches the process environment; variables that are already set there
//! take precedence over the file.

use crate::error::{Error, Result, ResultExt};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Connection URI key
pub const MONGO_URI: &str = "MONGO_URI";
/// Database name key
pub const MONGO_DATABASE_NAME: &str = "MONGO_DATABASE_NAME";
/// Collection name key
pub const MONGO_COLLECTION_NAME: &str = "MONGO_COLLECTION_NAME";
/// Key field key
pub const MONGO_KEY_COLUMN: &str = "MONGO_KEY_COLUMN";

/// Template written by `init`
pub const DEFAULT_CONFIG: &str = "
MONGO_URI=mongodb://localhost:27017
MONGO_DATABASE_NAME=test
MONGO_COLLECTION_NAME=test
# Large collections are slow to scan in full. Pick a key column whose distinct
# values correspond to distinct record structures (an event name, say); the
# most recent record for each value is sampled instead of the whole collection.
# Leave it blank to skip sampling.
MONGO_KEY_COLUMN=event
";

/// Settings for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Connection URI
    pub uri: String,
    /// Database name
    pub database: String,
    /// Collection name
    pub collection: String,
    /// Key field; empty disables sampling
    pub key_column: String,
}

impl Settings {
    /// Load settings from a file, letting the process environment override it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading settings");

        let mut pairs = Vec::new();
        for item in dotenvy::from_path_iter(path)? {
            pairs.push(item?);
        }
        for key in [
            MONGO_URI,
            MONGO_DATABASE_NAME,
            MONGO_COLLECTION_NAME,
            MONGO_KEY_COLUMN,
        ] {
            if let Ok(value) = std::env::var(key) {
                pairs.push((key.to_string(), value));
            }
        }

        Self::from_pairs(pairs)
    }

    /// Build settings from key/value pairs; later pairs win
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut settings = Settings::default();
        for (key, value) in pairs {
            match key.as_ref() {
                MONGO_URI => settings.uri = value.into(),
                MONGO_DATABASE_NAME => settings.database = value.into(),
                MONGO_COLLECTION_NAME => settings.collection = value.into(),
                MONGO_KEY_COLUMN => settings.key_column = value.into(),
                other => tracing::debug!(key = other, "Ignoring unknown setting"),
            }
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Check required settings
    pub fn validate(&self) -> Result<()> {
        if self.uri.trim().is_empty() {
            return Err(Error::missing_field(MONGO_URI));
        }
        Ok(())
    }
}

/// Default settings file location: `<user config dir>/ggms/.env`
pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| Error::config("Could not determine the user config directory"))?;
    Ok(dir.join("ggms").join(".env"))
}

/// Use `path` if given, otherwise the default location
pub fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

/// Write the default settings template to `path`.
///
/// Fails if anything already exists there. Missing parent directories are
/// created.
pub fn init_config(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(Error::ConfigExists {
                path: path.display().to_string(),
            });
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create {}", path.display()));
        }
    };
    file.write_all(DEFAULT_CONFIG.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Created config file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_from_pairs() {
        let settings = Settings::from_pairs([
            (MONGO_URI, "mongodb://db:27017"),
            (MONGO_DATABASE_NAME, "shop"),
            (MONGO_COLLECTION_NAME, "events"),
            (MONGO_KEY_COLUMN, "type"),
            ("UNRELATED", "x"),
        ])
        .unwrap();

        assert_eq!(
            settings,
            Settings {
                uri: "mongodb://db:27017".to_string(),
                database: "shop".to_string(),
                collection: "events".to_string(),
                key_column: "type".to_string(),
            }
        );
    }

    #[test]
    fn test_later_pairs_win() {
        let settings = Settings::from_pairs([
            (MONGO_URI, "mongodb://a"),
            (MONGO_URI, "mongodb://b"),
        ])
        .unwrap();
        assert_eq!(settings.uri, "mongodb://b");
    }

    #[test]
    fn test_missing_uri() {
        let err = Settings::from_pairs([(MONGO_DATABASE_NAME, "shop")]).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == MONGO_URI));

        let err = Settings::from_pairs([(MONGO_URI, "  ")]).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_blank_key_column() {
        let settings =
            Settings::from_pairs([(MONGO_URI, "mongodb://a"), (MONGO_KEY_COLUMN, "")]).unwrap();
        assert!(settings.key_column.is_empty());
    }

    #[test]
    fn test_init_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("ggms").join(".env");

        init_config(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, DEFAULT_CONFIG);
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "MONGO_URI=keep-me\n").unwrap();

        let err = init_config(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigExists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "MONGO_URI=keep-me\n");
    }

    #[test]
    fn test_init_twice_keeps_first_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ggms").join(".env");

        init_config(&path).unwrap();
        fs::write(&path, "MONGO_URI=edited\n").unwrap();

        let err = init_config(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigExists { ref path } if path.ends_with(".env")));
        assert_eq!(fs::read_to_string(&path).unwrap(), "MONGO_URI=edited\n");
    }

    #[test]
    fn test_init_refuses_existing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();

        let err = init_config(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigExists { .. }));
        assert!(path.is_dir());
    }

    #[test]
    fn test_default_template_parses() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        init_config(&path).unwrap();

        let mut pairs = Vec::new();
        for item in dotenvy::from_path_iter(&path).unwrap() {
            pairs.push(item.unwrap());
        }
        let settings = Settings::from_pairs(pairs).unwrap();

        assert_eq!(settings.uri, "mongodb://localhost:27017");
        assert_eq!(settings.database, "test");
        assert_eq!(settings.collection, "test");
        assert_eq!(settings.key_column, "event");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Settings::load(dir.path().join("absent.env")).unwrap_err();
        assert!(matches!(err, Error::EnvFile(_)));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = Path::new("/tmp/custom.env");
        assert_eq!(resolve_config_path(Some(path)).unwrap(), path);
    }
}
