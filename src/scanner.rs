use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Version-control directory that is never entered.
const VCS_MARKER: &str = ".git";

/// Build-output directory stems that are never entered.
const BUILD_MARKERS: &[&str] = &["bin", "obj"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Project root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("Project root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to walk project tree: {0}")]
    Io(#[from] walkdir::Error),
}

/// One pass over the project tree, taken before each rename pass so
/// that paths moved by an earlier pass are seen at their new location.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Every file under the root, pruned directories excluded.
    pub files: Vec<PathBuf>,
    /// Files whose name contains the search token.
    pub matching_files: Vec<PathBuf>,
    /// Directories whose name contains the search token.
    pub matching_dirs: Vec<PathBuf>,
}

/// Walk the tree under `root` and collect the paths relevant to one
/// rename pass. All returned paths are relative to `root`.
///
/// Matching is a case-sensitive substring test against the final path
/// segment only; each pass supplies its own case form of the token.
pub fn scan(root: &Path, token: &str) -> Result<ScanResult, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut result = ScanResult::default();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_pruned(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err.depth() == 0 {
                    return Err(ScanError::Io(err));
                }
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        // Every walked entry sits under the walk root.
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative = relative.to_path_buf();

        let name_matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.contains(token));

        if entry.file_type().is_dir() {
            if name_matches {
                result.matching_dirs.push(relative);
            }
        } else {
            if name_matches {
                result.matching_files.push(relative.clone());
            }
            result.files.push(relative);
        }
    }

    debug!(
        files = result.files.len(),
        matching_files = result.matching_files.len(),
        matching_dirs = result.matching_dirs.len(),
        "Scan complete"
    );

    Ok(result)
}

fn is_pruned(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    if name == VCS_MARKER {
        return true;
    }

    // "bin" and "obj" stems also cover suffixed forms like "obj.backup".
    Path::new(name.as_ref())
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| BUILD_MARKERS.contains(&stem))
}
