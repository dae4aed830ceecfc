//! Error types for copycat
//!
//! Uses thiserror for ergonomic error definitions with clear messages
//! that guide users toward fixing common issues.

use thiserror::Error;

/// Top-level error type for the copycat application
#[derive(Error, Debug)]
pub enum CopycatError {
    #[error("Hotkey error: {0}")]
    Hotkey(#[from] HotkeyError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to hotkey parsing and the global key listener
#[derive(Error, Debug)]
pub enum HotkeyError {
    #[error("Unknown key name: '{0}'. Use names like CONTROL, ALT, SHIFT, META, A-Z, 0-9, F1-F12.")]
    UnknownKey(String),

    #[error("Hotkey chord is empty")]
    EmptyChord,

    #[error("Global key listener failed: {0}")]
    Listen(String),
}

/// Errors related to reading clipboard text
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("wl-paste not found in PATH. Install wl-clipboard via your package manager.")]
    WlPasteNotFound,

    #[error("xclip not found in PATH. Install via your package manager.")]
    XclipNotFound,

    #[error("Clipboard read failed: {0}")]
    ReadFailed(String),

    #[error("No clipboard tool available. Install wl-clipboard or xclip.")]
    NoToolAvailable,
}

/// Errors related to synthesized keystroke output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("ydotool daemon not running.\n  Start with: systemctl --user start ydotool\n  Enable at boot: systemctl --user enable ydotool")]
    YdotoolNotRunning,

    #[error("ydotool not found in PATH. Install via your package manager.")]
    YdotoolNotFound,

    #[error("wtype not found in PATH. Install via your package manager.")]
    WtypeNotFound,

    #[error("Keystroke injection failed: {0}")]
    InjectionFailed(String),

    #[error("Shift+Enter injection failed: {0}")]
    SoftBreakFailed(String),

    #[error("All typing backends failed. Ensure wtype or ydotool is available.")]
    AllBackendsFailed,
}

/// Result type alias using CopycatError
pub type Result<T> = std::result::Result<T, CopycatError>;
