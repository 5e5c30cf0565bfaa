use crate::migrator::errors::MigrateError;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Topic paths to content ids, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationMapping {
    entries: IndexMap<String, String>,
}

impl MigrationMapping {
    pub fn load(path: &Path) -> Result<Self, MigrateError> {
        let raw = fs::read_to_string(path).map_err(|source| MigrateError::MappingRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| MigrateError::MappingParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Accepts only a flat object of string values.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: IndexMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, topic_path: &str) -> Option<&str> {
        self.entries.get(topic_path).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(topic, id)| (topic.as_str(), id.as_str()))
    }
}

impl FromIterator<(String, String)> for MigrationMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
