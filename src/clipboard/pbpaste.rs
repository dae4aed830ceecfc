//! macOS clipboard source via pbpaste
//!
//! pbpaste ships with macOS. An empty clipboard produces empty stdout with a
//! zero exit status, which already matches the "empty is not an error"
//! contract.

use super::ClipboardSource;
use crate::error::ClipboardError;
use std::process::{Command, Stdio};

/// macOS clipboard source using pbpaste
pub struct PbpasteSource;

impl ClipboardSource for PbpasteSource {
    fn read(&self) -> Result<String, ClipboardError> {
        let output = Command::new("pbpaste")
            .env("LANG", "en_US.UTF-8")
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClipboardError::ReadFailed(stderr.trim().to_string()));
        }

        String::from_utf8(output.stdout).map_err(|e| ClipboardError::ReadFailed(e.to_string()))
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
            && Command::new("which")
                .arg("pbpaste")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map(|s| s.success())
                .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "pbpaste"
    }
}
