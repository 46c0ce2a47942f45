use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::engine::FailedEntry;
use crate::token::TokenVariant;
use crate::ui::Ui;

/// Suffix appended to a collision target while it is moved aside.
const DISPLACED_SUFFIX: &str = ".retemplate-displaced";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Destination escapes the project root: {destination}")]
    EscapesRoot { destination: PathBuf },
}

/// One planned move, both sides relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PlanEntry {
    source: PathBuf,
    destination: PathBuf,
}

/// Rename every path whose final segment contains the variant's search
/// token, deepest path first.
///
/// Deepest-first ordering keeps parent directories stable while their
/// children move. The token is substituted in the final segment only;
/// ancestor segments are handled by their own entries. Entries whose
/// substitution is a no-op are skipped. Returns the number of paths
/// moved; per-entry I/O failures are recorded in `failures` and the
/// pass continues. A destination outside the project root aborts the
/// pass before anything under it is touched.
pub fn rename_paths(
    root: &Path,
    paths: &[PathBuf],
    variant: &TokenVariant,
    kind: PathKind,
    ui: &mut Ui,
    failures: &mut Vec<FailedEntry>,
) -> Result<usize, RenameError> {
    let entries = plan(paths, variant);

    for entry in &entries {
        let destination = normalize(&root.join(&entry.destination));
        if !destination.starts_with(root) {
            return Err(RenameError::EscapesRoot { destination });
        }
    }

    let mut renamed = 0;
    for entry in &entries {
        let source = root.join(&entry.source);
        let destination = root.join(&entry.destination);

        match move_over(&source, &destination, kind) {
            Ok(()) => {
                debug!(
                    from = %entry.source.display(),
                    to = %entry.destination.display(),
                    "Renamed"
                );
                ui.list_item(
                    &entry.source.display().to_string(),
                    &entry.destination.display().to_string(),
                );
                renamed += 1;
            }
            Err(err) => {
                warn!(path = %entry.source.display(), error = %err, "Skipping rename");
                ui.error(&format!(
                    "Could not rename {}: {}",
                    entry.source.display(),
                    err
                ));
                failures.push(FailedEntry {
                    path: entry.source.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(renamed)
}

/// Substitute the token in each path's final segment and order the
/// result deepest path first.
fn plan(paths: &[PathBuf], variant: &TokenVariant) -> Vec<PlanEntry> {
    let mut entries: Vec<PlanEntry> = paths
        .iter()
        .filter_map(|source| {
            let name = source.file_name()?.to_str()?;
            let new_name = name.replace(&variant.search, &variant.replace);
            if new_name == name {
                return None;
            }
            Some(PlanEntry {
                source: source.clone(),
                destination: source.with_file_name(new_name),
            })
        })
        .collect();

    entries.sort_by_key(|entry| {
        std::cmp::Reverse(entry.source.to_string_lossy().chars().count())
    });
    entries
}

/// Resolve `.` and `..` components lexically.
///
/// The destination does not exist yet, so filesystem canonicalization
/// is not an option. A `..` that climbs past the front of the path is
/// preserved so that the containment check still fails.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Move `source` to `destination`, displacing an existing target.
///
/// The existing target is first renamed aside; if the main move then
/// fails it is restored, so a failed entry leaves the tree as it was.
/// The displaced copy is deleted only after the move succeeds.
fn move_over(source: &Path, destination: &Path, kind: PathKind) -> std::io::Result<()> {
    if !destination.exists() {
        return fs::rename(source, destination);
    }

    let mut displaced = destination.as_os_str().to_os_string();
    displaced.push(DISPLACED_SUFFIX);
    let displaced = PathBuf::from(displaced);

    fs::rename(destination, &displaced)?;

    if let Err(err) = fs::rename(source, destination) {
        if let Err(restore_err) = fs::rename(&displaced, destination) {
            warn!(
                path = %destination.display(),
                error = %restore_err,
                "Failed to restore displaced path"
            );
        }
        return Err(err);
    }

    match kind {
        PathKind::File => fs::remove_file(&displaced),
        PathKind::Directory => fs::remove_dir_all(&displaced),
    }
}
