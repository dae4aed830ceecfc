//! wl-paste clipboard source (Wayland)
//!
//! Preferred on Wayland. An empty clipboard makes wl-paste exit non-zero
//! with "No selection"; that is reported as empty text, not as an error.
//!
//! Requires: wl-clipboard package installed

use super::ClipboardSource;
use crate::error::ClipboardError;
use std::process::{Command, Stdio};

/// wl-paste clipboard source
pub struct WlPasteSource;

impl ClipboardSource for WlPasteSource {
    fn read(&self) -> Result<String, ClipboardError> {
        let output = Command::new("wl-paste")
            .args(["--no-newline", "--type", "text"])
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::WlPasteNotFound
                } else {
                    ClipboardError::ReadFailed(e.to_string())
                }
            })?;

        if output.status.success() {
            return String::from_utf8(output.stdout)
                .map_err(|e| ClipboardError::ReadFailed(e.to_string()));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains("No selection") {
            Ok(String::new())
        } else {
            Err(ClipboardError::ReadFailed(stderr.trim().to_string()))
        }
    }

    fn is_available(&self) -> bool {
        Command::new("which")
            .arg("wl-paste")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "wl-paste"
    }
}
