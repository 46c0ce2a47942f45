use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NameError {
    #[error("the name is empty")]
    Empty,

    #[error("the name starts with a lowercase character")]
    LowercaseStart,

    #[error("the name contains a path separator")]
    PathSeparator,
}

/// Normalize and validate a candidate project name.
///
/// Spaces become underscores so the name is usable in identifiers and
/// file names. The first character must not be lowercase; the derived
/// case forms would otherwise collide with the canonical one. Path
/// separators are rejected outright because the name ends up in file
/// and directory names.
pub fn validate_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim().replace(' ', "_");

    let first = name.chars().next().ok_or(NameError::Empty)?;
    if first.is_lowercase() {
        return Err(NameError::LowercaseStart);
    }
    if name.contains('/') || name.contains('\\') {
        return Err(NameError::PathSeparator);
    }

    Ok(name)
}

enum State {
    AwaitName,
    AwaitConfirm(String),
}

/// Interactively ask for a new project name and a confirmation.
///
/// Declining the confirmation loops back to the name question, as does
/// an invalid name. End of input returns `None`.
pub fn run_prompt(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    template: &str,
) -> std::io::Result<Option<String>> {
    let mut state = State::AwaitName;

    loop {
        match state {
            State::AwaitName => {
                write!(writer, "New project name: ")?;
                writer.flush()?;

                let Some(line) = read_line(reader)? else {
                    return Ok(None);
                };
                match validate_name(&line) {
                    Ok(name) => state = State::AwaitConfirm(name),
                    Err(err) => {
                        writeln!(writer, "Invalid name: {err}.")?;
                    }
                }
            }
            State::AwaitConfirm(name) => {
                write!(writer, "Rename '{template}' to '{name}'? [y/N] ")?;
                writer.flush()?;

                let Some(line) = read_line(reader)? else {
                    return Ok(None);
                };
                if is_affirmative(&line) {
                    return Ok(Some(name));
                }
                state = State::AwaitName;
            }
        }
    }
}

/// Ask a single yes/no confirmation for a name supplied on the command
/// line.
pub fn confirm(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    template: &str,
    name: &str,
) -> std::io::Result<bool> {
    write!(writer, "Rename '{template}' to '{name}'? [y/N] ")?;
    writer.flush()?;

    Ok(read_line(reader)?.as_deref().is_some_and(is_affirmative))
}

fn is_affirmative(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

fn read_line(reader: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
