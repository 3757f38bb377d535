//! Keyboard contract for the viewer.
//!
//! Active only while no text-input field holds focus; the embedding UI is
//! responsible for telling us. Arrow bindings must suppress the platform's
//! default scroll behavior, so each binding carries that flag.

/// Seconds jumped by one arrow-key press.
pub const JUMP_SECS: f64 = 5.0;

/// Action a key press maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePlayback,
    JumpBack,
    JumpForward,
}

impl KeyCommand {
    /// Signed jump delta for the jump commands.
    pub fn jump_delta(self) -> Option<f64> {
        match self {
            KeyCommand::JumpBack => Some(-JUMP_SECS),
            KeyCommand::JumpForward => Some(JUMP_SECS),
            KeyCommand::TogglePlayback => None,
        }
    }
}

/// A matched key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub command: KeyCommand,
    /// Whether the platform's default handling of this key must be
    /// suppressed (scrolling, for the arrows).
    pub suppress_default: bool,
}

/// Map a key identifier to its viewer command. Returns `None` for unbound
/// keys and whenever a text input holds focus.
pub fn command_for_key(key: &str, text_input_focused: bool) -> Option<KeyBinding> {
    if text_input_focused {
        return None;
    }

    match key {
        " " | "Space" => Some(KeyBinding {
            command: KeyCommand::TogglePlayback,
            suppress_default: false,
        }),
        "ArrowLeft" => Some(KeyBinding {
            command: KeyCommand::JumpBack,
            suppress_default: true,
        }),
        "ArrowRight" => Some(KeyBinding {
            command: KeyCommand::JumpForward,
            suppress_default: true,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_toggles_playback() {
        let binding = command_for_key(" ", false).unwrap();
        assert_eq!(binding.command, KeyCommand::TogglePlayback);
        assert!(!binding.suppress_default);
    }

    #[test]
    fn test_arrows_jump_and_suppress_default() {
        let left = command_for_key("ArrowLeft", false).unwrap();
        assert_eq!(left.command.jump_delta(), Some(-JUMP_SECS));
        assert!(left.suppress_default);

        let right = command_for_key("ArrowRight", false).unwrap();
        assert_eq!(right.command.jump_delta(), Some(JUMP_SECS));
        assert!(right.suppress_default);
    }

    #[test]
    fn test_focused_text_input_disables_shortcuts() {
        assert!(command_for_key(" ", true).is_none());
        assert!(command_for_key("ArrowRight", true).is_none());
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert!(command_for_key("KeyQ", false).is_none());
    }
}
