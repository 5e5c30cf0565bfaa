use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

pub const MAPPING_FILE: &str = "migration-mapping.json";
pub const OLD_DIR: &str = "content-old";
pub const NEW_DIR: &str = "content";

/// Lays out a migration root in a temp dir: mapping document, legacy tree and destination dir.
pub struct ContentTreeFactory {
    mapping: IndexMap<String, String>,
    raw_mapping: Option<String>,
    old_files: Vec<(String, Vec<u8>)>,
    new_files: Vec<(String, Vec<u8>)>,
    content_dir: bool,
}

impl ContentTreeFactory {
    pub fn new() -> Self {
        Self {
            mapping: IndexMap::new(),
            raw_mapping: None,
            old_files: Vec::new(),
            new_files: Vec::new(),
            content_dir: true,
        }
    }

    pub fn with_entry(mut self, topic_path: &str, content_id: &str) -> Self {
        self.mapping
            .insert(topic_path.to_string(), content_id.to_string());
        self
    }

    /// Writes `raw` verbatim as the mapping document instead of the collected entries.
    pub fn with_raw_mapping(mut self, raw: &str) -> Self {
        self.raw_mapping = Some(raw.to_string());
        self
    }

    /// `relative` is taken from `content-old/`, e.g. `basics/syntax.md`.
    pub fn with_old_file(mut self, relative: &str, content: &str) -> Self {
        self.old_files
            .push((relative.to_string(), content.as_bytes().to_vec()));
        self
    }

    pub fn with_new_file(mut self, name: &str, content: &str) -> Self {
        self.new_files
            .push((name.to_string(), content.as_bytes().to_vec()));
        self
    }

    pub fn without_content_dir(mut self) -> Self {
        self.content_dir = false;
        self
    }

    pub fn create(self) -> ContentTree {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();

        let mapping = match self.raw_mapping {
            Some(raw) => raw,
            None => serde_json::to_string_pretty(&self.mapping).expect("Failed to encode mapping"),
        };
        fs::write(root.join(MAPPING_FILE), mapping).expect("Failed to write mapping");

        let old_root = root.join(OLD_DIR);
        fs::create_dir_all(&old_root).expect("Failed to create old dir");
        for (relative, content) in &self.old_files {
            let path = old_root.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create old subdir");
            }
            fs::write(path, content).expect("Failed to write old file");
        }

        if self.content_dir {
            let new_root = root.join(NEW_DIR);
            fs::create_dir_all(&new_root).expect("Failed to create content dir");
            for (name, content) in &self.new_files {
                fs::write(new_root.join(name), content).expect("Failed to write new file");
            }
        }

        ContentTree { dir }
    }
}

pub struct ContentTree {
    dir: TempDir,
}

impl ContentTree {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn new_file(&self, name: &str) -> PathBuf {
        self.root().join(NEW_DIR).join(name)
    }

    pub fn old_file(&self, relative: &str) -> PathBuf {
        self.root().join(OLD_DIR).join(relative)
    }

    pub fn read_new(&self, name: &str) -> String {
        fs::read_to_string(self.new_file(name)).expect("Failed to read new file")
    }

    pub fn read_old(&self, relative: &str) -> String {
        fs::read_to_string(self.old_file(relative)).expect("Failed to read old file")
    }
}
