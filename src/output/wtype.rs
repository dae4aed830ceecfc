//! wtype keystroke backend (Wayland)
//!
//! Preferred on Wayland: no daemon required, good Unicode coverage.
//! The soft break presses Return while shift is held, releasing shift after.
//!
//! Requires: wtype installed, running on Wayland

use super::KeyTyper;
use crate::error::OutputError;
use std::process::{Command, Stdio};

/// wtype-based keystroke backend
pub struct WtypeTyper {
    /// Delay between keypresses in milliseconds (0 = wtype default, fastest)
    interval_ms: u32,
}

impl WtypeTyper {
    pub fn new(interval_ms: u32) -> Self {
        Self { interval_ms }
    }
}

impl KeyTyper for WtypeTyper {
    fn type_line(&self, line: &str) -> Result<(), OutputError> {
        if line.is_empty() {
            return Ok(());
        }

        let mut cmd = Command::new("wtype");
        if self.interval_ms > 0 {
            cmd.arg("-d").arg(self.interval_ms.to_string());
        }
        // The -- ensures text starting with - isn't treated as an option
        cmd.arg("--").arg(line);

        let output = cmd
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    OutputError::WtypeNotFound
                } else {
                    OutputError::InjectionFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OutputError::InjectionFailed(format!(
                "wtype failed: {}",
                stderr
            )));
        }

        Ok(())
    }

    fn soft_line_break(&self) -> Result<(), OutputError> {
        let output = Command::new("wtype")
            .args(["-M", "shift", "-k", "Return", "-m", "shift"])
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| OutputError::SoftBreakFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OutputError::SoftBreakFailed(format!(
                "wtype Shift+Enter failed: {}",
                stderr
            )));
        }

        Ok(())
    }

    fn is_available(&self) -> bool {
        // Just check if wtype exists in PATH; it will fail naturally if
        // Wayland isn't available.
        Command::new("which")
            .arg("wtype")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "wtype"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let typer = WtypeTyper::new(5);
        assert_eq!(typer.interval_ms, 5);
    }

    #[test]
    fn test_empty_line_is_noop() {
        // Must not spawn anything for an empty batch.
        let typer = WtypeTyper::new(0);
        assert!(typer.type_line("").is_ok());
    }
}
