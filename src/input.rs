use crate::config::{JUMP_KEY_CODES, JUMP_KEY_LEGACY_CODES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Jump,
    Start,
}

/// Both bound keys do both things: jump while running, start while stopped.
/// Jump comes first so the press that starts a run does not also jump.
const BOUND_ACTIONS: &[Action] = &[Action::Jump, Action::Start];

/// Maps a `KeyboardEvent.code`, falling back to the legacy `keyCode` for
/// browsers that leave `code` empty.
pub fn actions_for_key(code: &str, legacy_key_code: u32) -> &'static [Action] {
    if JUMP_KEY_CODES.contains(&code) {
        return BOUND_ACTIONS;
    }
    if code.is_empty() && JUMP_KEY_LEGACY_CODES.contains(&legacy_key_code) {
        return BOUND_ACTIONS;
    }
    &[]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_up_and_space_are_bound() {
        assert_eq!(actions_for_key("ArrowUp", 38), &[Action::Jump, Action::Start]);
        assert_eq!(actions_for_key("Space", 32), &[Action::Jump, Action::Start]);
    }

    #[test]
    fn other_keys_do_nothing() {
        assert!(actions_for_key("ArrowDown", 40).is_empty());
        assert!(actions_for_key("KeyW", 87).is_empty());
        assert!(actions_for_key("Enter", 13).is_empty());
    }

    #[test]
    fn legacy_key_code_used_only_without_code() {
        assert_eq!(actions_for_key("", 32), &[Action::Jump, Action::Start]);
        assert!(actions_for_key("", 40).is_empty());
        // A numpad key reporting keyCode 38 is not ArrowUp.
        assert!(actions_for_key("Numpad8", 38).is_empty());
    }
}
