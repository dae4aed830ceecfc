//! macOS keystroke backend via osascript/AppleScript
//!
//! Uses System Events to simulate keyboard input. The soft break sends
//! key code 36 (Return) with shift held. System Events types a string as a
//! whole, so the inter-keystroke interval does not apply on this backend.
//!
//! Requires Accessibility permission for the terminal/app running copycat.

use super::KeyTyper;
use crate::error::OutputError;
use std::process::{Command, Stdio};

/// macOS keystroke backend using osascript
pub struct OsascriptTyper;

impl OsascriptTyper {
    pub fn new() -> Self {
        Self
    }

    /// Escape text for an AppleScript string literal
    fn escape_for_applescript(text: &str) -> String {
        text.replace('\\', "\\\\").replace('"', "\\\"")
    }

    fn run_script(&self, script: &str) -> Result<(), OutputError> {
        let output = Command::new("osascript")
            .args(["-e", script])
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    OutputError::InjectionFailed("osascript not found".to_string())
                } else {
                    OutputError::InjectionFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("not allowed") || stderr.contains("accessibility") {
                return Err(OutputError::InjectionFailed(
                    "Accessibility permission required. Grant access in System Settings > \
                     Privacy & Security > Accessibility"
                        .to_string(),
                ));
            }
            return Err(OutputError::InjectionFailed(format!(
                "osascript failed: {}",
                stderr
            )));
        }

        Ok(())
    }
}

impl Default for OsascriptTyper {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTyper for OsascriptTyper {
    fn type_line(&self, line: &str) -> Result<(), OutputError> {
        if line.is_empty() {
            return Ok(());
        }

        let escaped = Self::escape_for_applescript(line);
        let script = format!(
            r#"tell application "System Events" to keystroke "{}""#,
            escaped
        );
        self.run_script(&script)
    }

    fn soft_line_break(&self) -> Result<(), OutputError> {
        // 36 = Return key
        self.run_script(r#"tell application "System Events" to key code 36 using shift down"#)
            .map_err(|e| OutputError::SoftBreakFailed(e.to_string()))
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
            && Command::new("which")
                .arg("osascript")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map(|s| s.success())
                .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "osascript (macOS)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_for_applescript() {
        assert_eq!(
            OsascriptTyper::escape_for_applescript(r#"hello "world""#),
            r#"hello \"world\""#
        );
        assert_eq!(
            OsascriptTyper::escape_for_applescript(r#"path\to\file"#),
            r#"path\\to\\file"#
        );
    }

    #[test]
    fn test_empty_line_is_noop() {
        let typer = OsascriptTyper::new();
        assert!(typer.type_line("").is_ok());
    }
}
