use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SEGMENT_SEPARATOR: char = ':';
pub const INDEX_FILE: &str = "index.md";
pub const MARKDOWN_EXT: &str = "md";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicPathError {
    #[error("topic path is empty")]
    Empty,

    #[error("topic path '{path}' has {depth} segments, at most {max_depth} supported")]
    TooDeep {
        path: String,
        depth: usize,
        max_depth: usize,
    },

    #[error("topic path '{path}' has an invalid segment '{segment}'")]
    InvalidSegment { path: String, segment: String },
}

/// Colon-delimited address of a content unit in the legacy tree, e.g. `basics:syntax`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPath {
    raw: String,
    segments: Vec<String>,
}

impl TopicPath {
    pub fn parse(raw: &str, max_depth: usize) -> Result<Self, TopicPathError> {
        if raw.is_empty() {
            return Err(TopicPathError::Empty);
        }

        let segments: Vec<String> = raw.split(SEGMENT_SEPARATOR).map(str::to_string).collect();
        if segments.len() > max_depth {
            return Err(TopicPathError::TooDeep {
                path: raw.to_string(),
                depth: segments.len(),
                max_depth,
            });
        }

        if let Some(bad) = segments.iter().find(|s| !is_valid_segment(s)) {
            return Err(TopicPathError::InvalidSegment {
                path: raw.to_string(),
                segment: bad.clone(),
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Location of the legacy file relative to the old content directory.
    ///
    /// A single segment names a section and maps to its `index.md`; otherwise
    /// the leading segments are directories and the last one is the file stem.
    pub fn relative_file(&self) -> PathBuf {
        let mut path = PathBuf::new();
        match self.segments.split_last() {
            Some((only, [])) => {
                path.push(only);
                path.push(INDEX_FILE);
            }
            Some((stem, dirs)) => {
                for dir in dirs {
                    path.push(dir);
                }
                path.push(format!("{stem}.{MARKDOWN_EXT}"));
            }
            None => {}
        }
        path
    }
}

impl fmt::Display for TopicPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
        && !segment.contains('\0')
}

/// Resolves a topic path to its legacy file under `old_root`. Pure, no I/O.
pub fn resolve_old_path(
    old_root: &Path,
    topic_path: &str,
    max_depth: usize,
) -> Result<PathBuf, TopicPathError> {
    let topic = TopicPath::parse(topic_path, max_depth)?;
    Ok(old_root.join(topic.relative_file()))
}
