mod types;

pub use types::{FailedEntry, RunSummary, VariantSummary};

use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::AppError;
use crate::renamer::{self, PathKind};
use crate::rewrite;
use crate::scanner;
use crate::token::{variant_pairs, TokenVariant};
use crate::ui::Ui;

/// Everything a full rename needs to know.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub root: PathBuf,
    pub template: String,
    pub new_name: String,
}

/// Run all variant passes over the project tree.
///
/// Passes run strictly in sequence. A later pass must see the tree as
/// the previous pass left it, so each pass starts with a fresh scan.
/// Only an escaping rename destination aborts the run; every other
/// per-path failure is collected into the summary.
pub fn full_rename(ctx: &RunContext, ui: &mut Ui) -> Result<RunSummary, AppError> {
    let mut summary = RunSummary::default();

    for variant in variant_pairs(&ctx.template, &ctx.new_name) {
        if variant.is_noop() {
            debug!(token = %variant.search, "Skipping no-op pass");
            continue;
        }
        summary.variants.push(run_pass(ctx, &variant, ui)?);
    }

    info!(
        changes = summary.total_changes(),
        failures = summary.total_failures(),
        "Rename complete"
    );

    Ok(summary)
}

fn run_pass(
    ctx: &RunContext,
    variant: &TokenVariant,
    ui: &mut Ui,
) -> Result<VariantSummary, AppError> {
    info!(search = %variant.search, replace = %variant.replace, "Starting pass");
    ui.section(&format!("{} -> {}", variant.search, variant.replace));

    let scan = scanner::scan(&ctx.root, &variant.search)?;
    ui.dim(&format!(
        "{} files, {} matching names, {} matching directories",
        scan.files.len(),
        scan.matching_files.len(),
        scan.matching_dirs.len()
    ));

    let mut failures = Vec::new();

    ui.step("Rewriting file contents");
    let files_rewritten = rewrite::rewrite_all(&ctx.root, &scan.files, variant, ui, &mut failures);
    ui.step_done(&format!("{files_rewritten} files rewritten"));

    ui.step("Renaming files");
    let files_renamed = renamer::rename_paths(
        &ctx.root,
        &scan.matching_files,
        variant,
        PathKind::File,
        ui,
        &mut failures,
    )?;
    ui.step_done(&format!("{files_renamed} files renamed"));

    ui.step("Renaming directories");
    let dirs_renamed = renamer::rename_paths(
        &ctx.root,
        &scan.matching_dirs,
        variant,
        PathKind::Directory,
        ui,
        &mut failures,
    )?;
    ui.step_done(&format!("{dirs_renamed} directories renamed"));

    Ok(VariantSummary {
        search: variant.search.clone(),
        replace: variant.replace.clone(),
        files_seen: scan.files.len(),
        files_rewritten,
        files_renamed,
        dirs_renamed,
        failures,
    })
}
