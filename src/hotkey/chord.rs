//! Hotkey chord parsing and press-state tracking
//!
//! Raw keys are canonicalized before comparison: physical left/right modifier
//! variants count as the same chord member. The tracker fires exactly on the
//! press that completes the chord and stays quiet until at least one member
//! is released again, so auto-repeat while the chord is held never re-fires.

use crate::error::HotkeyError;
use rdev::Key;
use std::collections::HashSet;

/// Canonical identity of one chord member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordKey {
    Control,
    Alt,
    Shift,
    Meta,
    Key(Key),
}

/// Collapse platform/layout key variants into one chord member identity.
pub fn canonicalize(key: Key) -> ChordKey {
    match key {
        Key::ControlLeft | Key::ControlRight => ChordKey::Control,
        Key::Alt | Key::AltGr => ChordKey::Alt,
        Key::ShiftLeft | Key::ShiftRight => ChordKey::Shift,
        Key::MetaLeft | Key::MetaRight => ChordKey::Meta,
        other => ChordKey::Key(other),
    }
}

/// Parse a chord specification like "control+alt+t" into its member set.
pub fn parse_chord(spec: &str) -> Result<HashSet<ChordKey>, HotkeyError> {
    let mut chord = HashSet::new();
    for token in spec.split('+').map(str::trim).filter(|t| !t.is_empty()) {
        chord.insert(parse_token(token)?);
    }
    if chord.is_empty() {
        return Err(HotkeyError::EmptyChord);
    }
    Ok(chord)
}

/// Parse one chord token to its canonical key.
fn parse_token(token: &str) -> Result<ChordKey, HotkeyError> {
    let key = match token.to_uppercase().as_str() {
        // Modifiers, already canonical
        "CONTROL" | "CTRL" => return Ok(ChordKey::Control),
        "ALT" | "OPTION" => return Ok(ChordKey::Alt),
        "SHIFT" => return Ok(ChordKey::Shift),
        "META" | "CMD" | "COMMAND" | "SUPER" | "WIN" => return Ok(ChordKey::Meta),

        // Letters
        "A" => Key::KeyA,
        "B" => Key::KeyB,
        "C" => Key::KeyC,
        "D" => Key::KeyD,
        "E" => Key::KeyE,
        "F" => Key::KeyF,
        "G" => Key::KeyG,
        "H" => Key::KeyH,
        "I" => Key::KeyI,
        "J" => Key::KeyJ,
        "K" => Key::KeyK,
        "L" => Key::KeyL,
        "M" => Key::KeyM,
        "N" => Key::KeyN,
        "O" => Key::KeyO,
        "P" => Key::KeyP,
        "Q" => Key::KeyQ,
        "R" => Key::KeyR,
        "S" => Key::KeyS,
        "T" => Key::KeyT,
        "U" => Key::KeyU,
        "V" => Key::KeyV,
        "W" => Key::KeyW,
        "X" => Key::KeyX,
        "Y" => Key::KeyY,
        "Z" => Key::KeyZ,

        // Digits (top row)
        "0" => Key::Num0,
        "1" => Key::Num1,
        "2" => Key::Num2,
        "3" => Key::Num3,
        "4" => Key::Num4,
        "5" => Key::Num5,
        "6" => Key::Num6,
        "7" => Key::Num7,
        "8" => Key::Num8,
        "9" => Key::Num9,

        // Function keys
        "F1" => Key::F1,
        "F2" => Key::F2,
        "F3" => Key::F3,
        "F4" => Key::F4,
        "F5" => Key::F5,
        "F6" => Key::F6,
        "F7" => Key::F7,
        "F8" => Key::F8,
        "F9" => Key::F9,
        "F10" => Key::F10,
        "F11" => Key::F11,
        "F12" => Key::F12,

        // Special keys
        "SPACE" => Key::Space,
        "TAB" => Key::Tab,
        "ESCAPE" | "ESC" => Key::Escape,
        "ENTER" | "RETURN" => Key::Return,
        "BACKSPACE" => Key::Backspace,
        "CAPSLOCK" => Key::CapsLock,
        "SCROLLLOCK" => Key::ScrollLock,
        "PAUSE" => Key::Pause,

        // Navigation
        "UP" | "UPARROW" => Key::UpArrow,
        "DOWN" | "DOWNARROW" => Key::DownArrow,
        "LEFT" | "LEFTARROW" => Key::LeftArrow,
        "RIGHT" | "RIGHTARROW" => Key::RightArrow,
        "HOME" => Key::Home,
        "END" => Key::End,
        "PAGEUP" => Key::PageUp,
        "PAGEDOWN" => Key::PageDown,
        "INSERT" => Key::Insert,
        "DELETE" => Key::Delete,

        _ => return Err(HotkeyError::UnknownKey(token.to_string())),
    };
    Ok(ChordKey::Key(key))
}

/// Press-state machine for one chord.
///
/// Only chord members are tracked; unrelated keys pass through without
/// touching the state.
pub struct ChordTracker {
    target: HashSet<ChordKey>,
    pressed: HashSet<ChordKey>,
    complete: bool,
}

impl ChordTracker {
    pub fn new(target: HashSet<ChordKey>) -> Self {
        Self {
            target,
            pressed: HashSet::new(),
            complete: false,
        }
    }

    /// Feed a raw key press. Returns `true` exactly on the transition into
    /// "all chord members pressed".
    pub fn key_pressed(&mut self, key: Key) -> bool {
        let key = canonicalize(key);
        if !self.target.contains(&key) {
            return false;
        }
        self.pressed.insert(key);
        if self.complete {
            // Held keys arrive again as auto-repeat presses.
            return false;
        }
        if self.pressed.len() == self.target.len() {
            self.complete = true;
            true
        } else {
            false
        }
    }

    /// Feed a raw key release.
    pub fn key_released(&mut self, key: Key) {
        let key = canonicalize(key);
        if self.pressed.remove(&key) {
            self.complete = false;
        }
    }
}
