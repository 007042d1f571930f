//! Keyboard traversal across cards.
//!
//! Enter and Space activate the focused card. Arrow keys move focus through
//! cards in document order, clamped at both ends.

/// Keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Space,
    ArrowRight,
    ArrowDown,
    ArrowLeft,
    ArrowUp,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Enter" => NavKey::Enter,
            " " | "Spacebar" => NavKey::Space,
            "ArrowRight" => NavKey::ArrowRight,
            "ArrowDown" => NavKey::ArrowDown,
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowUp" => NavKey::ArrowUp,
            _ => NavKey::Other,
        }
    }
}

/// What the renderer should do in response to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub prevent_default: bool,
    /// Card to activate (equivalent to clicking it).
    pub activate: Option<usize>,
    /// Card to move focus to.
    pub focus: Option<usize>,
}

/// Stateless key handler over `len` cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardNavigator;

impl KeyboardNavigator {
    /// Handle `key` pressed while card `index` of `len` has focus.
    pub fn on_key(&self, len: usize, index: usize, key: NavKey) -> KeyOutcome {
        if index >= len {
            tracing::trace!(index, len, "Ignoring key on unknown card");
            return KeyOutcome::default();
        }
        let last = len - 1;
        match key {
            NavKey::Enter | NavKey::Space => KeyOutcome {
                prevent_default: true,
                activate: Some(index),
                focus: None,
            },
            NavKey::ArrowRight | NavKey::ArrowDown => KeyOutcome {
                prevent_default: true,
                activate: None,
                focus: Some((index + 1).min(last)),
            },
            NavKey::ArrowLeft | NavKey::ArrowUp => KeyOutcome {
                prevent_default: true,
                activate: None,
                focus: Some(index.saturating_sub(1)),
            },
            NavKey::Other => KeyOutcome::default(),
        }
    }
}
