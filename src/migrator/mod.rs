pub mod content_index;
pub mod errors;
pub mod mapping;
pub mod outcome;
pub mod runner;
pub mod topic_path;

pub use content_index::{AmbiguityPolicy, ContentIndex, Lookup};
pub use errors::MigrateError;
pub use mapping::MigrationMapping;
pub use outcome::{EntryRecord, MigrationOutcome, MigrationReport};
pub use runner::Migrator;
pub use topic_path::{TopicPath, TopicPathError, resolve_old_path};

#[cfg(test)]
mod mapping_test;
