use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    Migrated { destination: PathBuf },
    /// Topic path could not be turned into a legacy file path.
    SkippedMissingOldPath { reason: String },
    /// No destination carries the content id, or several do and none was picked.
    SkippedMissingNewFile,
    SkippedMissingOldFile { source: PathBuf },
    SkippedWriteError { message: String },
}

impl MigrationOutcome {
    pub fn is_migrated(&self) -> bool {
        matches!(self, MigrationOutcome::Migrated { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MigrationOutcome::Migrated { .. } => "migrated",
            MigrationOutcome::SkippedMissingOldPath { .. } => "missing_old_path",
            MigrationOutcome::SkippedMissingNewFile => "missing_new_file",
            MigrationOutcome::SkippedMissingOldFile { .. } => "missing_old_file",
            MigrationOutcome::SkippedWriteError { .. } => "write_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub topic_path: String,
    pub content_id: String,
    pub outcome: MigrationOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrated: usize,
    pub skipped: usize,
    pub total: usize,
    pub entries: Vec<EntryRecord>,
}

impl MigrationReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            entries: Vec::with_capacity(total),
            ..Self::default()
        }
    }

    pub fn record(&mut self, topic_path: &str, content_id: &str, outcome: MigrationOutcome) {
        if outcome.is_migrated() {
            self.migrated += 1;
        } else {
            self.skipped += 1;
        }
        self.entries.push(EntryRecord {
            topic_path: topic_path.to_string(),
            content_id: content_id.to_string(),
            outcome,
        });
    }

    /// Holds once every mapping entry has been recorded.
    pub fn is_complete(&self) -> bool {
        self.migrated + self.skipped == self.total && self.entries.len() == self.total
    }

    pub fn outcome_of(&self, topic_path: &str) -> Option<&MigrationOutcome> {
        self.entries
            .iter()
            .find(|e| e.topic_path == topic_path)
            .map(|e| &e.outcome)
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "migrated={} skipped={} total={}",
            self.migrated, self.skipped, self.total
        )
    }
}
