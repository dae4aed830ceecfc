//! Clipboard-to-keystrokes pipeline
//!
//! On each activation: wait out the pre-typing grace delay, read the
//! clipboard, then replay it as synthesized keystrokes with Shift+Enter
//! soft breaks for embedded newlines.

use crate::clipboard::{self, ClipboardSource};
use crate::config::TypingConfig;
use crate::output::{self, KeyTyper};
use std::thread;
use std::time::Duration;

/// Owns the clipboard sources and typing backends for the process lifetime.
pub struct ClipboardTyper {
    pre_type_delay: Duration,
    sources: Vec<Box<dyn ClipboardSource>>,
    typers: Vec<Box<dyn KeyTyper>>,
}

impl ClipboardTyper {
    pub fn new(config: &TypingConfig) -> Self {
        Self {
            pre_type_delay: config.pre_type_delay,
            sources: clipboard::create_sources(),
            typers: output::create_typers(config),
        }
    }

    #[cfg(test)]
    fn with_parts(
        pre_type_delay: Duration,
        sources: Vec<Box<dyn ClipboardSource>>,
        typers: Vec<Box<dyn KeyTyper>>,
    ) -> Self {
        Self {
            pre_type_delay,
            sources,
            typers,
        }
    }

    /// Type the current clipboard text into the focused application.
    ///
    /// Runs synchronously on the caller's thread and never propagates
    /// failures: the hotkey listener must survive to serve the next press.
    /// An empty or unavailable clipboard is a logged no-op, not an error.
    pub fn type_clipboard(&self) {
        // Grace delay so the user can refocus the target window.
        thread::sleep(self.pre_type_delay);

        let text = match clipboard::read_with_fallback(&self.sources) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Clipboard read failed: {}", e);
                return;
            }
        };

        if text.is_empty() {
            tracing::info!("Clipboard empty, nothing to type");
            return;
        }

        tracing::info!("Typing {} chars from clipboard", text.chars().count());
        if let Err(e) = output::type_with_fallback(&self.typers, &text) {
            tracing::error!("Typing failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClipboardError, OutputError};
    use std::sync::{Arc, Mutex};

    struct FixedSource(Result<&'static str, ()>);

    impl ClipboardSource for FixedSource {
        fn read(&self) -> Result<String, ClipboardError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(ClipboardError::ReadFailed("unavailable".to_string())),
            }
        }

        fn is_available(&self) -> bool {
            true
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Emission {
        Line(String),
        SoftBreak,
    }

    struct SharedTyper(Arc<Mutex<Vec<Emission>>>);

    impl KeyTyper for SharedTyper {
        fn type_line(&self, line: &str) -> Result<(), OutputError> {
            self.0.lock().unwrap().push(Emission::Line(line.to_string()));
            Ok(())
        }

        fn soft_line_break(&self) -> Result<(), OutputError> {
            self.0.lock().unwrap().push(Emission::SoftBreak);
            Ok(())
        }

        fn is_available(&self) -> bool {
            true
        }

        fn name(&self) -> &'static str {
            "shared"
        }
    }

    fn typer_with(
        clipboard: Result<&'static str, ()>,
    ) -> (ClipboardTyper, Arc<Mutex<Vec<Emission>>>) {
        let emissions = Arc::new(Mutex::new(Vec::new()));
        let typer = ClipboardTyper::with_parts(
            Duration::ZERO,
            vec![Box::new(FixedSource(clipboard))],
            vec![Box::new(SharedTyper(emissions.clone()))],
        );
        (typer, emissions)
    }

    #[test]
    fn test_single_line_types_without_break() {
        let (typer, emissions) = typer_with(Ok("hello"));
        typer.type_clipboard();
        assert_eq!(
            *emissions.lock().unwrap(),
            vec![Emission::Line("hello".to_string())]
        );
    }

    #[test]
    fn test_multiline_types_with_soft_breaks() {
        let (typer, emissions) = typer_with(Ok("line1\nline2"));
        typer.type_clipboard();
        assert_eq!(
            *emissions.lock().unwrap(),
            vec![
                Emission::Line("line1".to_string()),
                Emission::SoftBreak,
                Emission::Line("line2".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_clipboard_emits_nothing() {
        let (typer, emissions) = typer_with(Ok(""));
        typer.type_clipboard();
        assert!(emissions.lock().unwrap().is_empty());
    }

    #[test]
    fn test_clipboard_failure_emits_nothing() {
        let (typer, emissions) = typer_with(Err(()));
        typer.type_clipboard();
        assert!(emissions.lock().unwrap().is_empty());
    }
}
