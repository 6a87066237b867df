//! Opening the rendered page with the platform's default handler.

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::path::Path;
use std::process::Command;

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// Launch the default browser on `path` without waiting for it to exit
pub fn open_in_browser(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(eyre!("Cannot open '{}': file does not exist", path.display()));
    }

    let mut cmd = opener_command(path);
    cmd.spawn()
        .wrap_err_with(|| format!("Failed to launch {:?} for '{}'", cmd.get_program(), path.display()))?;

    log::info!("Opened {} in the default browser", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_is_error() {
        assert!(open_in_browser(Path::new("/nonexistent/topology.html")).is_err());
    }

    #[test]
    fn test_opener_targets_path() {
        let cmd = opener_command(Path::new("out.html"));
        assert!(cmd.get_args().any(|a| a == "out.html"));
    }
}
