//! Global hotkey listener
//!
//! Subscribes to system-wide raw key events via rdev on a dedicated
//! background thread and runs the activation handler synchronously on that
//! thread. The handler blocking further event processing is accepted: typing
//! runs are short and bounded, and events arriving meanwhile are queued by
//! the subscription, not dropped.
//!
//! On macOS this requires Accessibility permission for the terminal/app.

pub mod chord;

use crate::config::HotkeyConfig;
use crate::error::HotkeyError;
use chord::ChordTracker;
use rdev::{listen, Event, EventType};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Parse the configured chord and start the listener thread.
///
/// The returned handle's `join` blocks until the underlying event
/// subscription ends, which under normal operation only happens at process
/// teardown; callers keep the handle alive and never join it.
pub fn spawn<F>(config: &HotkeyConfig, handler: F) -> Result<JoinHandle<()>, HotkeyError>
where
    F: Fn() + Send + 'static,
{
    let target = chord::parse_chord(&config.chord)?;
    let debounce = config.debounce;
    let chord_desc = config.chord.clone();

    let handle = thread::Builder::new()
        .name("hotkey-listener".into())
        .spawn(move || {
            let mut tracker = ChordTracker::new(target);
            let mut last_fired: Option<Instant> = None;

            tracing::info!("Listening for hotkey: {}", chord_desc);

            let callback = move |event: Event| match event.event_type {
                EventType::KeyPress(key) => {
                    if tracker.key_pressed(key) {
                        let now = Instant::now();
                        // Rapid double-press guard: activations completing
                        // inside the debounce window are dropped.
                        if last_fired.map_or(true, |t| now.duration_since(t) >= debounce) {
                            last_fired = Some(now);
                            tracing::debug!("Hotkey chord completed");
                            handler();
                        } else {
                            tracing::debug!("Chord re-completed within debounce window, ignored");
                        }
                    }
                }
                EventType::KeyRelease(key) => tracker.key_released(key),
                _ => {}
            };

            // Blocks for the lifetime of the process under normal operation.
            if let Err(e) = listen(callback) {
                tracing::error!("Global key listener failed: {:?}", e);
                #[cfg(target_os = "macos")]
                tracing::warn!(
                    "Grant Accessibility permission in System Settings > \
                     Privacy & Security > Accessibility, then restart copycat"
                );
            }
        })
        .map_err(|e| HotkeyError::Listen(e.to_string()))?;

    Ok(handle)
}
