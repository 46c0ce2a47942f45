pub mod classify;
pub mod cli;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod platform;
pub mod prompt;
pub mod renamer;
pub mod rewrite;
pub mod rootfind;
pub mod scanner;
pub mod token;
pub mod ui;

pub use engine::{full_rename, FailedEntry, RunContext, RunSummary, VariantSummary};
pub use error::{AppError, ExitCode};
pub use scanner::{scan, ScanError, ScanResult};
pub use token::{variant_pairs, TokenVariant};
