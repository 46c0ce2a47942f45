use clap::Parser;
use retemplate::cli::Args;
use retemplate::engine::{self, RunContext};
use retemplate::error::AppError;
use retemplate::output::display_run_summary;
use retemplate::ui::{Ui, UiConfig};
use retemplate::{logging, platform, prompt, rootfind};
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut ui = Ui::new(UiConfig::new(args.verbose > 0));
    ui.print_header(env!("CARGO_PKG_VERSION"));

    let marker = format!("{}.sln", args.template);
    let root = rootfind::find_project_root(&args.root, &marker)?;
    info!(root = %root.display(), "Project root located");

    ui.kv("Project root", &root.display().to_string());
    ui.kv("Template token", &args.template);

    if !args.ignore_editor {
        match platform::editor_running(platform::EDITOR_PROCESS) {
            Ok(true) => {
                return Err(AppError::EditorOpen {
                    process: platform::EDITOR_PROCESS.to_string(),
                })
            }
            Ok(false) => {}
            Err(err) => warn!("Editor check failed, continuing: {err}"),
        }
    }

    let stdin = io::stdin();
    let new_name = resolve_name(&args, &mut stdin.lock(), &mut io::stderr())?;
    let Some(new_name) = new_name else {
        ui.warning("Aborted, nothing changed.");
        return Ok(());
    };

    ui.kv("New name", &new_name);

    let ctx = RunContext {
        root,
        template: args.template,
        new_name,
    };
    let summary = engine::full_rename(&ctx, &mut ui)?;

    display_run_summary(&summary, &mut io::stdout())
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    ui.blank();
    if summary.is_clean() {
        ui.success(&format!("Renamed {} entries.", summary.total_changes()));
    } else {
        ui.warning(&format!(
            "Completed with {} failed entries, see the list above.",
            summary.total_failures()
        ));
    }

    Ok(())
}

/// Work out the new name from the arguments or the interactive prompt.
///
/// `Ok(None)` means the user declined the confirmation; the caller
/// exits successfully without touching anything.
fn resolve_name(
    args: &Args,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<String>, AppError> {
    match &args.new_name {
        Some(raw) => {
            let name = prompt::validate_name(raw).map_err(|e| AppError::InvalidName {
                name: raw.clone(),
                reason: e.to_string(),
            })?;

            if args.yes {
                return Ok(Some(name));
            }

            let confirmed = prompt::confirm(input, output, &args.template, &name)
                .map_err(|e| AppError::Other(format!("Failed to read input: {}", e)))?;
            Ok(confirmed.then_some(name))
        }
        None => {
            if args.yes {
                return Err(AppError::InvalidName {
                    name: String::new(),
                    reason: "--yes requires a name argument".to_string(),
                });
            }

            let name = prompt::run_prompt(input, output, &args.template)
                .map_err(|e| AppError::Other(format!("Failed to read input: {}", e)))?;
            name.map(Some).ok_or(AppError::InvalidName {
                name: String::new(),
                reason: "input ended before a name was given".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use retemplate::error::ExitCode;
    use std::io::Cursor;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(argv)
    }

    #[test]
    fn test_resolve_name_with_yes_skips_prompt() {
        let args = args(&["retemplate", "Acme", "--yes"]);
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let name = resolve_name(&args, &mut input, &mut output).unwrap();

        assert_eq!(name, Some("Acme".to_string()));
        assert!(output.is_empty());
    }

    #[test]
    fn test_resolve_name_asks_for_confirmation() {
        let args = args(&["retemplate", "Acme"]);
        let mut input = Cursor::new("y\n");
        let mut output = Vec::new();

        let name = resolve_name(&args, &mut input, &mut output).unwrap();

        assert_eq!(name, Some("Acme".to_string()));
        assert!(String::from_utf8(output).unwrap().contains("Rename"));
    }

    #[test]
    fn test_resolve_name_declined_returns_none() {
        let args = args(&["retemplate", "Acme"]);
        let mut input = Cursor::new("n\n");
        let mut output = Vec::new();

        let name = resolve_name(&args, &mut input, &mut output).unwrap();
        assert_eq!(name, None);
    }

    #[test]
    fn test_resolve_name_invalid_cli_name_is_error() {
        let args = args(&["retemplate", "acme", "--yes"]);
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = resolve_name(&args, &mut input, &mut output).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::InvalidName);
    }

    #[test]
    fn test_resolve_name_yes_without_name_is_error() {
        let args = args(&["retemplate", "--yes"]);
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = resolve_name(&args, &mut input, &mut output).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::InvalidName);
    }
}
