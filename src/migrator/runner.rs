use crate::migrator::content_index::ContentIndex;
use crate::migrator::errors::MigrateError;
use crate::migrator::mapping::MigrationMapping;
use crate::migrator::outcome::{MigrationOutcome, MigrationReport};
use crate::migrator::topic_path::{TopicPathError, resolve_old_path};
use crate::shared::config::MigrationConfig;
use crate::shared::path::under_root;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Copies legacy markdown files onto their new destinations, one mapping entry at a time.
#[derive(Debug, Clone)]
pub struct Migrator {
    root: PathBuf,
    config: MigrationConfig,
}

impl Migrator {
    pub fn new(root: impl Into<PathBuf>, config: MigrationConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mapping_path(&self) -> PathBuf {
        under_root(&self.root, &self.config.mapping_file)
    }

    pub fn old_root(&self) -> PathBuf {
        under_root(&self.root, &self.config.old_dir)
    }

    pub fn new_root(&self) -> PathBuf {
        under_root(&self.root, &self.config.new_dir)
    }

    pub fn resolve_old_path(&self, topic_path: &str) -> Result<PathBuf, TopicPathError> {
        resolve_old_path(&self.old_root(), topic_path, self.config.max_depth)
    }

    pub fn load_mapping(&self) -> Result<MigrationMapping, MigrateError> {
        MigrationMapping::load(&self.mapping_path())
    }

    pub fn load_index(&self) -> Result<ContentIndex, MigrateError> {
        let dir = self.new_root();
        ContentIndex::load(&dir, self.config.on_ambiguous)
            .map_err(|source| MigrateError::ContentDirUnreadable { path: dir, source })
    }

    /// Loads the mapping and the destination listing, then migrates every entry.
    /// Only the two loads can fail; entry failures end up in the report.
    pub fn run(&self) -> Result<MigrationReport, MigrateError> {
        let mapping = self.load_mapping()?;
        let index = self.load_index()?;
        info!(
            "Migrating {} entries from {} into {} ({} destination files)",
            mapping.len(),
            self.old_root().display(),
            self.new_root().display(),
            index.len()
        );
        Ok(self.migrate(&mapping, &index))
    }

    pub fn migrate(&self, mapping: &MigrationMapping, index: &ContentIndex) -> MigrationReport {
        let mut report = MigrationReport::new(mapping.len());
        for (topic_path, content_id) in mapping.iter() {
            let outcome = self.migrate_entry(topic_path, content_id, index);
            log_outcome(topic_path, content_id, &outcome, self.config.dry_run);
            report.record(topic_path, content_id, outcome);
        }
        debug!("Migration complete: {}", report);
        report
    }

    fn migrate_entry(
        &self,
        topic_path: &str,
        content_id: &str,
        index: &ContentIndex,
    ) -> MigrationOutcome {
        let source = match self.resolve_old_path(topic_path) {
            Ok(path) => path,
            Err(e) => {
                return MigrationOutcome::SkippedMissingOldPath {
                    reason: e.to_string(),
                };
            }
        };

        let Some(destination) = index.resolve_new_path(content_id) else {
            return MigrationOutcome::SkippedMissingNewFile;
        };

        if !source.exists() {
            return MigrationOutcome::SkippedMissingOldFile { source };
        }

        debug!(
            "Copying {} -> {}",
            source.display(),
            destination.display()
        );

        let copied = if self.config.dry_run {
            File::open(&source).map(|_| ())
        } else {
            copy_contents(&source, &destination)
        };

        match copied {
            Ok(()) => MigrationOutcome::Migrated { destination },
            Err(e) => MigrationOutcome::SkippedWriteError {
                message: e.to_string(),
            },
        }
    }
}

/// Replaces the destination's content with the source bytes, unchanged.
fn copy_contents(source: &Path, destination: &Path) -> io::Result<()> {
    let bytes = fs::read(source)?;
    fs::write(destination, bytes)
}

fn log_outcome(topic_path: &str, content_id: &str, outcome: &MigrationOutcome, dry_run: bool) {
    match outcome {
        MigrationOutcome::Migrated { destination } => {
            let name = destination
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if dry_run {
                info!("Would migrate {} -> {}", topic_path, name);
            } else {
                info!("Migrated {} -> {}", topic_path, name);
            }
        }
        MigrationOutcome::SkippedMissingOldPath { reason } => {
            warn!("Skipped {}: cannot resolve old path ({})", topic_path, reason);
        }
        MigrationOutcome::SkippedMissingNewFile => {
            warn!(
                "Skipped {}: no destination file for content id '{}'",
                topic_path, content_id
            );
        }
        MigrationOutcome::SkippedMissingOldFile { source } => {
            warn!(
                "Skipped {}: old file {} does not exist",
                topic_path,
                source.display()
            );
        }
        MigrationOutcome::SkippedWriteError { message } => {
            warn!("Skipped {}: copy failed: {}", topic_path, message);
        }
    }
}
