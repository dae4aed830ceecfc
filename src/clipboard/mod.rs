//! Clipboard text access
//!
//! Read-only: copycat never writes the clipboard. Reads shell out to the
//! platform clipboard tools, the same way keystroke output shells out to the
//! platform typing tools.
//!
//! Fallback chain on Linux:
//! 1. wl-paste - Wayland-native (wl-clipboard package)
//! 2. xclip - X11 fallback
//!
//! macOS uses pbpaste, which is always present.

#[cfg(target_os = "linux")]
pub mod wl_paste;
#[cfg(target_os = "linux")]
pub mod xclip;

#[cfg(target_os = "macos")]
pub mod pbpaste;

use crate::error::ClipboardError;

/// Trait for clipboard read implementations
pub trait ClipboardSource: Send + Sync {
    /// Read the clipboard as text. An empty clipboard is `Ok("")`, not an
    /// error.
    fn read(&self) -> Result<String, ClipboardError>;

    /// Check if this source's tool is present
    fn is_available(&self) -> bool;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}

/// Factory function that returns the platform's fallback chain of sources
#[cfg(target_os = "linux")]
pub fn create_sources() -> Vec<Box<dyn ClipboardSource>> {
    vec![
        Box::new(wl_paste::WlPasteSource),
        Box::new(xclip::XclipSource),
    ]
}

/// Factory function that returns the platform's fallback chain of sources
#[cfg(target_os = "macos")]
pub fn create_sources() -> Vec<Box<dyn ClipboardSource>> {
    vec![Box::new(pbpaste::PbpasteSource)]
}

/// No clipboard tooling on other targets; reads fail with NoToolAvailable.
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn create_sources() -> Vec<Box<dyn ClipboardSource>> {
    Vec::new()
}

/// Try each source in the chain until one reads successfully
pub fn read_with_fallback(
    sources: &[Box<dyn ClipboardSource>],
) -> Result<String, ClipboardError> {
    for source in sources {
        if !source.is_available() {
            tracing::debug!("{} not available, trying next", source.name());
            continue;
        }

        match source.read() {
            Ok(text) => {
                tracing::debug!(
                    "Clipboard read via {} ({} chars)",
                    source.name(),
                    text.chars().count()
                );
                return Ok(text);
            }
            Err(e) => {
                tracing::warn!("{} failed: {}, trying next", source.name(), e);
            }
        }
    }

    Err(ClipboardError::NoToolAvailable)
}
