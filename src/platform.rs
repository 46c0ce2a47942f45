use anyhow::Result;

/// Editor process that typically holds template files open.
pub const EDITOR_PROCESS: &str = "devenv";

/// Check whether the named editor process is currently running.
///
/// Only meaningful on Windows, where Visual Studio locks project files.
/// Elsewhere there is no equivalent lock to worry about, so the answer
/// is always no.
#[cfg(windows)]
pub fn editor_running(process: &str) -> Result<bool> {
    use anyhow::Context;
    use std::process::Command;

    let image = format!("{process}.exe");
    let output = Command::new("tasklist")
        .args(["/FI", &format!("IMAGENAME eq {image}"), "/NH", "/FO", "CSV"])
        .output()
        .context("Failed to run tasklist")?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.contains(&image))
}

#[cfg(not(windows))]
pub fn editor_running(_process: &str) -> Result<bool> {
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_editor_never_running_off_windows() {
        assert!(!editor_running(EDITOR_PROCESS).unwrap());
    }
}
