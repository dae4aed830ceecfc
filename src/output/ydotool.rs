//! ydotool keystroke backend
//!
//! Works on X11, Wayland, and the TTY because ydotool goes through the
//! uinput kernel interface. The soft break is sent as raw key events:
//! 42 is KEY_LEFTSHIFT, 28 is KEY_ENTER.
//!
//! Requires:
//! - ydotool installed
//! - ydotoold daemon running (systemctl --user start ydotool)

use super::KeyTyper;
use crate::error::OutputError;
use std::process::{Command, Stdio};

/// ydotool-based keystroke backend
pub struct YdotoolTyper {
    /// Delay between keypresses in milliseconds
    interval_ms: u32,
}

impl YdotoolTyper {
    pub fn new(interval_ms: u32) -> Self {
        Self { interval_ms }
    }

    fn run(&self, args: &[&str]) -> Result<std::process::Output, OutputError> {
        Command::new("ydotool")
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    OutputError::YdotoolNotFound
                } else {
                    OutputError::InjectionFailed(e.to_string())
                }
            })
    }
}

impl KeyTyper for YdotoolTyper {
    fn type_line(&self, line: &str) -> Result<(), OutputError> {
        if line.is_empty() {
            return Ok(());
        }

        let mut cmd = Command::new("ydotool");
        cmd.arg("type");

        if self.interval_ms > 0 {
            cmd.arg("--key-delay").arg(self.interval_ms.to_string());
        }

        // The -- ensures text starting with - isn't treated as an option
        cmd.arg("--").arg(line);

        let output = cmd
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    OutputError::YdotoolNotFound
                } else {
                    OutputError::InjectionFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);

            if stderr.contains("socket") || stderr.contains("connect") || stderr.contains("daemon")
            {
                return Err(OutputError::YdotoolNotRunning);
            }

            return Err(OutputError::InjectionFailed(stderr.to_string()));
        }

        Ok(())
    }

    fn soft_line_break(&self) -> Result<(), OutputError> {
        // press shift, press enter, release enter, release shift
        let output = self.run(&["key", "42:1", "28:1", "28:0", "42:0"])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OutputError::SoftBreakFailed(format!(
                "ydotool Shift+Enter failed: {}",
                stderr
            )));
        }

        Ok(())
    }

    fn is_available(&self) -> bool {
        let found = Command::new("which")
            .arg("ydotool")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);

        if !found {
            return false;
        }

        // A no-op type succeeds quickly iff ydotoold is reachable.
        Command::new("ydotool")
            .args(["type", ""])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "ydotool"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let typer = YdotoolTyper::new(10);
        assert_eq!(typer.interval_ms, 10);
    }

    #[test]
    fn test_empty_line_is_noop() {
        let typer = YdotoolTyper::new(0);
        assert!(typer.type_line("").is_ok());
    }
}
