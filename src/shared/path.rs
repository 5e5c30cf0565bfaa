use std::path::{Path, PathBuf};

/// Returns the migration root: `explicit` made absolute against `cwd`, or `cwd`
/// itself when no root was given. Does not touch the filesystem.
pub fn resolve_root(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    }
}

/// Places a configured location under the root. Absolute locations are kept as is.
pub fn under_root<P: AsRef<Path>>(root: &Path, location: P) -> PathBuf {
    let location = location.as_ref();
    if location.is_absolute() {
        return location.to_path_buf();
    }
    root.join(location)
}
