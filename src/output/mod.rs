//! Synthesized keystroke output
//!
//! Text is emitted line by line: embedded line feeds become a Shift+Enter
//! combination so the target application inserts a soft break instead of
//! treating Enter as submit. No break follows the final line.
//!
//! Fallback chain on Linux:
//! 1. wtype - Wayland-native, best Unicode support, no daemon needed
//! 2. ydotool - Works on X11/Wayland/TTY, requires daemon
//!
//! macOS types through osascript (System Events).

#[cfg(target_os = "linux")]
pub mod wtype;
#[cfg(target_os = "linux")]
pub mod ydotool;

#[cfg(target_os = "macos")]
pub mod osascript;

use crate::config::TypingConfig;
use crate::error::OutputError;

/// Trait for keystroke emission implementations
pub trait KeyTyper: Send + Sync {
    /// Emit keystrokes for one line of text, no trailing line break.
    /// An empty line emits nothing and succeeds.
    fn type_line(&self, line: &str) -> Result<(), OutputError>;

    /// Emit the Shift+Enter soft line break combination
    fn soft_line_break(&self) -> Result<(), OutputError>;

    /// Check if this backend is usable right now
    fn is_available(&self) -> bool;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}

/// Factory function that returns the platform's fallback chain of backends
#[cfg(target_os = "linux")]
pub fn create_typers(config: &TypingConfig) -> Vec<Box<dyn KeyTyper>> {
    vec![
        Box::new(wtype::WtypeTyper::new(config.keystroke_interval_ms)),
        Box::new(ydotool::YdotoolTyper::new(config.keystroke_interval_ms)),
    ]
}

/// Factory function that returns the platform's fallback chain of backends
#[cfg(target_os = "macos")]
pub fn create_typers(_config: &TypingConfig) -> Vec<Box<dyn KeyTyper>> {
    vec![Box::new(osascript::OsascriptTyper::new())]
}

/// No typing backend on other targets; runs fail with AllBackendsFailed.
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn create_typers(_config: &TypingConfig) -> Vec<Box<dyn KeyTyper>> {
    Vec::new()
}

/// Type `text` through one backend, one line at a time with soft breaks
/// between lines and none after the last.
pub fn type_segments(typer: &dyn KeyTyper, text: &str) -> Result<(), OutputError> {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;

    for (i, line) in lines.iter().enumerate() {
        typer.type_line(line)?;
        if i < last {
            typer.soft_line_break()?;
        }
    }

    Ok(())
}

/// Try each backend in the chain until one types the whole text
pub fn type_with_fallback(chain: &[Box<dyn KeyTyper>], text: &str) -> Result<(), OutputError> {
    for typer in chain {
        if !typer.is_available() {
            tracing::debug!("{} not available, trying next", typer.name());
            continue;
        }

        match type_segments(typer.as_ref(), text) {
            Ok(()) => {
                tracing::debug!("Text typed via {}", typer.name());
                return Ok(());
            }
            Err(e) => {
                tracing::warn!("{} failed: {}, trying next", typer.name(), e);
            }
        }
    }

    Err(OutputError::AllBackendsFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Emission {
        Line(String),
        SoftBreak,
    }

    #[derive(Default)]
    struct RecordingTyper {
        emissions: Mutex<Vec<Emission>>,
        available: bool,
    }

    impl RecordingTyper {
        fn new() -> Self {
            Self {
                emissions: Mutex::new(Vec::new()),
                available: true,
            }
        }

        fn emissions(&self) -> Vec<Emission> {
            self.emissions.lock().unwrap().clone()
        }
    }

    impl KeyTyper for RecordingTyper {
        fn type_line(&self, line: &str) -> Result<(), OutputError> {
            self.emissions
                .lock()
                .unwrap()
                .push(Emission::Line(line.to_string()));
            Ok(())
        }

        fn soft_line_break(&self) -> Result<(), OutputError> {
            self.emissions.lock().unwrap().push(Emission::SoftBreak);
            Ok(())
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    struct FailingTyper;

    impl KeyTyper for FailingTyper {
        fn type_line(&self, _line: &str) -> Result<(), OutputError> {
            Err(OutputError::InjectionFailed("boom".to_string()))
        }

        fn soft_line_break(&self) -> Result<(), OutputError> {
            Err(OutputError::SoftBreakFailed("boom".to_string()))
        }

        fn is_available(&self) -> bool {
            true
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_single_line_no_break() {
        let typer = RecordingTyper::new();
        type_segments(&typer, "hello").unwrap();
        assert_eq!(typer.emissions(), vec![Emission::Line("hello".to_string())]);
    }

    #[test]
    fn test_two_lines_one_break() {
        let typer = RecordingTyper::new();
        type_segments(&typer, "line1\nline2").unwrap();
        assert_eq!(
            typer.emissions(),
            vec![
                Emission::Line("line1".to_string()),
                Emission::SoftBreak,
                Emission::Line("line2".to_string()),
            ]
        );
    }

    #[test]
    fn test_k_newlines_give_k_breaks() {
        let typer = RecordingTyper::new();
        type_segments(&typer, "a\nb\nc\nd").unwrap();

        let emissions = typer.emissions();
        let breaks = emissions
            .iter()
            .filter(|e| **e == Emission::SoftBreak)
            .count();
        let lines = emissions.len() - breaks;
        assert_eq!(breaks, 3);
        assert_eq!(lines, 4);
        // No break after the final batch.
        assert_eq!(*emissions.last().unwrap(), Emission::Line("d".to_string()));
    }

    #[test]
    fn test_consecutive_empty_lines_keep_breaks() {
        let typer = RecordingTyper::new();
        type_segments(&typer, "a\n\n\nb").unwrap();
        assert_eq!(
            typer.emissions(),
            vec![
                Emission::Line("a".to_string()),
                Emission::SoftBreak,
                Emission::Line(String::new()),
                Emission::SoftBreak,
                Emission::Line(String::new()),
                Emission::SoftBreak,
                Emission::Line("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_newline_ends_with_empty_batch() {
        let typer = RecordingTyper::new();
        type_segments(&typer, "x\n").unwrap();
        assert_eq!(
            typer.emissions(),
            vec![
                Emission::Line("x".to_string()),
                Emission::SoftBreak,
                Emission::Line(String::new()),
            ]
        );
    }

    #[test]
    fn test_fallback_skips_unavailable() {
        let mut offline = RecordingTyper::new();
        offline.available = false;
        let online = RecordingTyper::new();

        let chain: Vec<Box<dyn KeyTyper>> = vec![Box::new(offline), Box::new(online)];
        type_with_fallback(&chain, "hi").unwrap();
    }

    #[test]
    fn test_fallback_moves_past_failure() {
        let chain: Vec<Box<dyn KeyTyper>> =
            vec![Box::new(FailingTyper), Box::new(RecordingTyper::new())];
        assert!(type_with_fallback(&chain, "hi").is_ok());
    }

    #[test]
    fn test_all_backends_failed() {
        let chain: Vec<Box<dyn KeyTyper>> = vec![Box::new(FailingTyper)];
        assert!(matches!(
            type_with_fallback(&chain, "hi"),
            Err(OutputError::AllBackendsFailed)
        ));
    }
}
