use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Startup failures. Any of these aborts the run before an entry is processed.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("failed to read mapping document {}: {source}", path.display())]
    MappingRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed mapping document {}: {source}", path.display())]
    MappingParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to list content directory {}: {source}", path.display())]
    ContentDirUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
