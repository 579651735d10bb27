//! Input mapping
//!
//! Key-down events become discrete game commands. Every key-down yields one
//! command; key repeat is whatever the host delivers.

use super::state::Steer;

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Steer(Steer),
    Restart,
    /// Demo mode on/off
    ToggleAutopilot,
}

impl InputEvent {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(InputEvent::Steer(Steer::Left)),
            "ArrowRight" | "d" | "D" => Some(InputEvent::Steer(Steer::Right)),
            "Enter" | "r" | "R" => Some(InputEvent::Restart),
            "i" | "I" => Some(InputEvent::ToggleAutopilot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            InputEvent::from_key("ArrowLeft"),
            Some(InputEvent::Steer(Steer::Left))
        );
        assert_eq!(
            InputEvent::from_key("ArrowRight"),
            Some(InputEvent::Steer(Steer::Right))
        );
        assert_eq!(InputEvent::from_key("d"), Some(InputEvent::Steer(Steer::Right)));
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(InputEvent::from_key("Enter"), Some(InputEvent::Restart));
        assert_eq!(InputEvent::from_key("I"), Some(InputEvent::ToggleAutopilot));
        assert_eq!(InputEvent::from_key("ArrowUp"), None);
        assert_eq!(InputEvent::from_key(" "), None);
    }
}
