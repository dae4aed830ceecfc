//! Fixed runtime constants for copycat
//!
//! There is deliberately no config file, environment variable, or CLI
//! override surface: the chord, the pre-typing delay, and the inter-keystroke
//! interval are compile-time defaults read once at startup.

use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    pub hotkey: HotkeyConfig,
    pub typing: TypingConfig,
}

/// Hotkey detection configuration
#[derive(Debug, Clone)]
pub struct HotkeyConfig {
    /// Chord specification, e.g. "control+alt+t". Left/right modifier
    /// variants are treated as equivalent.
    pub chord: String,

    /// Minimum time between two activations. A completed chord inside this
    /// window (rapid double-press) is dropped, not queued.
    pub debounce: Duration,
}

/// Typing pipeline configuration
#[derive(Debug, Clone)]
pub struct TypingConfig {
    /// Pause before typing starts so the user can refocus the target window
    /// after releasing the hotkey. A UX affordance, not a technical need.
    pub pre_type_delay: Duration,

    /// Delay between synthesized keystrokes in milliseconds.
    /// 0 = fastest possible, increase if the target drops characters.
    pub keystroke_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotkey: HotkeyConfig {
                chord: "control+alt+t".to_string(),
                debounce: Duration::from_millis(100),
            },
            typing: TypingConfig {
                pre_type_delay: Duration::from_millis(500),
                keystroke_interval_ms: 0,
            },
        }
    }
}

impl Config {
    /// Lock file guarding the single running instance. Contents are
    /// irrelevant; only the advisory lock on the open handle matters.
    pub fn lock_path() -> PathBuf {
        std::env::temp_dir().join("copycat.lock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.hotkey.chord, "control+alt+t");
        assert_eq!(config.typing.pre_type_delay, Duration::from_millis(500));
        assert_eq!(config.typing.keystroke_interval_ms, 0);
    }

    #[test]
    fn test_lock_path() {
        let path = Config::lock_path();
        assert_eq!(path.file_name().unwrap(), "copycat.lock");
        assert!(path.starts_with(std::env::temp_dir()));
    }
}
