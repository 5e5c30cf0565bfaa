use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What to do when more than one destination file carries the same content id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Treat the content id as unresolvable.
    #[default]
    Reject,
    /// Take the first candidate in file-name order.
    FirstMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(PathBuf),
    Missing,
    Ambiguous(Vec<PathBuf>),
}

/// File names of the destination directory, listed once per run.
#[derive(Debug, Clone)]
pub struct ContentIndex {
    dir: PathBuf,
    names: Vec<String>,
    policy: AmbiguityPolicy,
}

impl ContentIndex {
    /// Lists `dir` non-recursively. Only regular files (or links to them) are indexed and names are
    /// sorted so lookups do not depend on directory iteration order.
    pub fn load(dir: &Path, policy: AmbiguityPolicy) -> io::Result<Self> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Follows symlinks; dangling links are left out.
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!("Skipping non UTF-8 file name {:?}", raw),
            }
        }
        names.sort();

        debug!("Indexed {} files in {}", names.len(), dir.display());
        Ok(Self::from_names(dir, names, policy))
    }

    pub fn from_names(dir: &Path, names: Vec<String>, policy: AmbiguityPolicy) -> Self {
        Self {
            dir: dir.to_path_buf(),
            names,
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn policy(&self) -> AmbiguityPolicy {
        self.policy
    }

    /// Every file whose name contains `@{content_id}.md`, in name order.
    pub fn candidates(&self, content_id: &str) -> Vec<PathBuf> {
        let needle = format!("@{content_id}.md");
        self.names
            .iter()
            .filter(|name| name.contains(&needle))
            .map(|name| self.dir.join(name))
            .collect()
    }

    pub fn lookup(&self, content_id: &str) -> Lookup {
        let mut candidates = self.candidates(content_id);
        match candidates.len() {
            0 => Lookup::Missing,
            1 => Lookup::Found(candidates.remove(0)),
            _ => Lookup::Ambiguous(candidates),
        }
    }

    /// Resolves a content id to its destination file under the configured policy.
    pub fn resolve_new_path(&self, content_id: &str) -> Option<PathBuf> {
        match self.lookup(content_id) {
            Lookup::Found(path) => Some(path),
            Lookup::Missing => None,
            Lookup::Ambiguous(mut candidates) => {
                let names = display_names(&candidates);
                match self.policy {
                    AmbiguityPolicy::Reject => {
                        warn!(
                            "Content id '{}' matches {} files, refusing to pick one: {}",
                            content_id,
                            candidates.len(),
                            names
                        );
                        None
                    }
                    AmbiguityPolicy::FirstMatch => {
                        warn!(
                            "Content id '{}' matches {} files, using the first: {}",
                            content_id,
                            candidates.len(),
                            names
                        );
                        Some(candidates.remove(0))
                    }
                }
            }
        }
    }
}

fn display_names(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}
