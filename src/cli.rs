use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "retemplate")]
#[command(author, version, about, long_about = None)]
#[command(about = "Rename a project template's identifier across file contents and paths")]
pub struct Args {
    /// New project name; prompted for interactively when omitted
    pub new_name: Option<String>,

    /// Directory to start the project root search from
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Template token to replace
    #[arg(short, long, default_value = "UniversalHybridTemplate")]
    pub template: String,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Proceed even if the editor process is running
    #[arg(long)]
    pub ignore_editor: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
