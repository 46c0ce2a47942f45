use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::classify::is_binary;
use crate::engine::FailedEntry;
use crate::token::TokenVariant;
use crate::ui::Ui;

/// Rewrite one variant's token in the contents of every candidate file.
///
/// Returns the number of files whose contents changed. A file that
/// cannot be read or written is recorded in `failures` and skipped; one
/// broken file never stops the pass.
pub fn rewrite_all(
    root: &Path,
    files: &[std::path::PathBuf],
    variant: &TokenVariant,
    ui: &mut Ui,
    failures: &mut Vec<FailedEntry>,
) -> usize {
    let mut rewritten = 0;

    for relative in files {
        let path = root.join(relative);
        match rewrite_file(&path, variant) {
            Ok(true) => {
                debug!(path = %relative.display(), "Rewrote contents");
                rewritten += 1;
            }
            Ok(false) => {}
            Err(err) => {
                warn!(path = %relative.display(), error = %err, "Skipping file");
                ui.error(&format!("Could not rewrite {}: {}", relative.display(), err));
                failures.push(FailedEntry {
                    path: relative.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    rewritten
}

/// Rewrite a single file in place, returning whether it changed.
///
/// Binary files are left untouched. The file is only written back when
/// the replacement actually produced different contents, so unmatched
/// files keep their timestamps.
fn rewrite_file(path: &Path, variant: &TokenVariant) -> std::io::Result<bool> {
    if is_binary(path)? {
        debug!(path = %path.display(), "Binary file, contents untouched");
        return Ok(false);
    }

    let contents = fs::read_to_string(path)?;
    let replaced = contents.replace(&variant.search, &variant.replace);
    if replaced == contents {
        return Ok(false);
    }

    fs::write(path, replaced)?;
    Ok(true)
}
