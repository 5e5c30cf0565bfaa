use crate::migrator::content_index::AmbiguityPolicy;
use serde::Deserialize;
use std::env;
use std::path::Path;

pub const CONFIG_ENV_VAR: &str = "CONTENT_MIGRATE_CONFIG";
pub const ENV_PREFIX: &str = "CONTENT_MIGRATE";
const DEFAULT_CONFIG_NAME: &str = "migrate";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub migration: MigrationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Mapping document, relative to the migration root
    pub mapping_file: String,
    /// Legacy content tree, relative to the migration root
    pub old_dir: String,
    /// Destination directory, relative to the migration root
    pub new_dir: String,
    /// Deepest topic path accepted, in segments
    pub max_depth: usize,
    pub on_ambiguous: AmbiguityPolicy,
    /// Resolve and check every entry without writing destinations
    pub dry_run: bool,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            mapping_file: "migration-mapping.json".to_string(),
            old_dir: "content-old".to_string(),
            new_dir: "content".to_string(),
            max_depth: 3,
            on_ambiguous: AmbiguityPolicy::Reject,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub stdout_level: String,
    pub file_level: String,
    /// Enables the daily rolling file log when set
    pub log_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stdout_level: "info".to_string(),
            file_level: "debug".to_string(),
            log_dir: None,
        }
    }
}

/// Loads settings from the file named by `CONTENT_MIGRATE_CONFIG` (or an
/// optional `migrate.*` file) with `CONTENT_MIGRATE_*` environment overrides.
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    match env::var(CONFIG_ENV_VAR) {
        Ok(path) => load_settings_from(Some(Path::new(&path))),
        Err(_) => load_settings_from(None),
    }
}

/// An explicit `path` must exist; without one the default `migrate` file is
/// picked up only if present.
pub fn load_settings_from(path: Option<&Path>) -> Result<Settings, config::ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let settings: Settings = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
