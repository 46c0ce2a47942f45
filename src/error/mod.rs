mod codes;

pub use codes::ExitCode;

use crate::renamer::RenameError;
use crate::rootfind::RootFindError;
use crate::scanner::ScanError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Project root not found: no {marker} in {start} or any ancestor")]
    RootNotFound { marker: String, start: PathBuf },

    #[error("Invalid project name: {name}")]
    InvalidName { name: String, reason: String },

    #[error("Editor process '{process}' is running")]
    EditorOpen { process: String },

    #[error("Destination escapes the project root: {destination}")]
    EscapesRoot { destination: PathBuf },

    #[error("Failed to scan project tree: {source}")]
    ScanFailed {
        #[from]
        source: ScanError,
    },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::RootNotFound { .. } => ExitCode::RootNotFound,
            AppError::InvalidName { .. } => ExitCode::InvalidName,
            AppError::EditorOpen { .. } => ExitCode::EditorOpen,
            AppError::EscapesRoot { .. } => ExitCode::EscapesRoot,
            AppError::ScanFailed { .. } => ExitCode::ScanFailed,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::RootNotFound { marker, start } => {
                format!(
                    "Could not locate the project root.\n\
                     Searched for {} in {} and every ancestor directory.\n\n\
                     Run the tool from inside the template checkout, or point\n\
                     --root at a directory beneath it.",
                    marker,
                    start.display()
                )
            }

            AppError::InvalidName { name, reason } => {
                if name.is_empty() {
                    format!("No project name given: {}.", reason)
                } else {
                    format!(
                        "The name '{}' cannot be used: {}.\n\n\
                         Names must start with an uppercase-compatible character;\n\
                         spaces are replaced with underscores.",
                        name, reason
                    )
                }
            }

            AppError::EditorOpen { process } => {
                format!(
                    "The editor process '{}' is currently running and may hold\n\
                     files in the project tree open.\n\n\
                     Close the editor and run again, or pass --ignore-editor to\n\
                     proceed anyway.",
                    process
                )
            }

            AppError::EscapesRoot { destination } => {
                format!(
                    "Refusing to rename: the computed destination\n  {}\n\
                     falls outside the project root. No files were moved for\n\
                     this entry. Check the replacement name for path separators\n\
                     or parent-directory components.",
                    destination.display()
                )
            }

            AppError::ScanFailed { source } => {
                format!(
                    "Failed to scan the project tree:\n  {}\n\n\
                     Verify the project root is readable and try again.",
                    source
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<RootFindError> for AppError {
    fn from(err: RootFindError) -> Self {
        match err {
            RootFindError::MarkerNotFound { marker, start } => {
                AppError::RootNotFound { marker, start }
            }
            RootFindError::Io { path, source } => {
                AppError::Other(format!("I/O error at {}: {}", path.display(), source))
            }
        }
    }
}

impl From<RenameError> for AppError {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::EscapesRoot { destination } => AppError::EscapesRoot { destination },
        }
    }
}
