use crate::engine::RunSummary;
use std::io::{self, Write};

/// Display the per-pass and aggregate outcome of a full rename
pub fn display_run_summary(summary: &RunSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              RESULTS")?;
    writeln!(writer, "========================================")?;

    for variant in &summary.variants {
        writeln!(writer)?;
        writeln!(writer, "{} -> {}", variant.search, variant.replace)?;
        writeln!(writer, "  Files scanned:       {}", variant.files_seen)?;
        writeln!(writer, "  Contents rewritten:  {}", variant.files_rewritten)?;
        writeln!(writer, "  Files renamed:       {}", variant.files_renamed)?;
        writeln!(writer, "  Directories renamed: {}", variant.dirs_renamed)?;

        for failure in &variant.failures {
            writeln!(
                writer,
                "  [!] {}: {}",
                failure.path.display(),
                failure.error
            )?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(writer, "  {} entries changed", summary.total_changes())?;

    let failures = summary.total_failures();
    if failures > 0 {
        writeln!(writer, "  {} entries failed", failures)?;
    }

    Ok(())
}
