//! xclip clipboard source (X11)
//!
//! Fallback for X11 sessions where wl-paste is absent. xclip exits non-zero
//! when the clipboard holds no text target; that is reported as empty text.
//!
//! Requires: xclip installed and a DISPLAY

use super::ClipboardSource;
use crate::error::ClipboardError;
use std::process::{Command, Stdio};

/// xclip clipboard source
pub struct XclipSource;

impl ClipboardSource for XclipSource {
    fn read(&self) -> Result<String, ClipboardError> {
        let output = Command::new("xclip")
            .args(["-selection", "clipboard", "-o"])
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::XclipNotFound
                } else {
                    ClipboardError::ReadFailed(e.to_string())
                }
            })?;

        if output.status.success() {
            return String::from_utf8(output.stdout)
                .map_err(|e| ClipboardError::ReadFailed(e.to_string()));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains("target STRING not available") {
            Ok(String::new())
        } else {
            Err(ClipboardError::ReadFailed(stderr.trim().to_string()))
        }
    }

    fn is_available(&self) -> bool {
        Command::new("which")
            .arg("xclip")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "xclip"
    }
}
