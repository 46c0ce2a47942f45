use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Upper bound on the upward walk, matching the deepest tree any real
/// filesystem allows.
const MAX_ANCESTOR_HOPS: usize = 1000;

#[derive(Error, Debug)]
pub enum RootFindError {
    #[error("No {marker} found in {start} or any ancestor")]
    MarkerNotFound { marker: String, start: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Walk upward from `start` until a directory containing the marker
/// file is found, and return that directory.
///
/// `start` is canonicalized first so the walk sees real ancestors, not
/// `..` components of a relative invocation path.
pub fn find_project_root(start: &Path, marker: &str) -> Result<PathBuf, RootFindError> {
    let canonical = start.canonicalize().map_err(|source| RootFindError::Io {
        path: start.to_path_buf(),
        source,
    })?;

    let mut current = canonical.clone();
    for _ in 0..MAX_ANCESTOR_HOPS {
        if current.join(marker).is_file() {
            debug!(root = %current.display(), "Found project root");
            return Ok(current);
        }
        if !current.pop() {
            break;
        }
    }

    Err(RootFindError::MarkerNotFound {
        marker: marker.to_string(),
        start: canonical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_finds_marker_in_start_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("MyProjectTemplate.sln"), "").unwrap();

        let found = find_project_root(root, "MyProjectTemplate.sln").unwrap();
        assert_eq!(found, root.canonicalize().unwrap());
    }

    #[test]
    fn test_finds_marker_in_ancestor() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("MyProjectTemplate.sln"), "").unwrap();
        let nested = root.join("src/deep/module");
        fs::create_dir_all(&nested).unwrap();

        let found = find_project_root(&nested, "MyProjectTemplate.sln").unwrap();
        assert_eq!(found, root.canonicalize().unwrap());
    }

    #[test]
    fn test_marker_must_be_a_file() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("MyProjectTemplate.sln")).unwrap();

        let err = find_project_root(root, "MyProjectTemplate.sln").unwrap_err();
        assert!(matches!(err, RootFindError::MarkerNotFound { .. }));
    }

    #[test]
    fn test_missing_marker_reports_canonical_start() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir(&nested).unwrap();

        let err = find_project_root(&nested, "Absent.sln").unwrap_err();
        match err {
            RootFindError::MarkerNotFound { marker, start } => {
                assert_eq!(marker, "Absent.sln");
                assert_eq!(start, nested.canonicalize().unwrap());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nonexistent_start_is_io_error() {
        let err =
            find_project_root(Path::new("/nonexistent/rootfind-probe"), "X.sln").unwrap_err();
        assert!(matches!(err, RootFindError::Io { .. }));
    }
}
