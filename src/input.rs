//! Key codes to intents, latched between ticks.

use crate::types::Intents;

/// Abstract action a key can be bound to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Jump,
    Reset,
}

/// Default bindings over DOM `KeyboardEvent.code` values.
pub fn intent_for_code(code: &str) -> Option<Intent> {
    match code {
        "ArrowLeft" | "KeyA" => Some(Intent::MoveLeft),
        "ArrowRight" | "KeyD" => Some(Intent::MoveRight),
        "ArrowUp" | "Space" | "KeyW" => Some(Intent::Jump),
        "KeyR" => Some(Intent::Reset),
        _ => None,
    }
}

/// Keys whose default browser action (page scroll) must be suppressed.
pub fn blocks_default(code: &str) -> bool {
    matches!(code, "Space" | "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight")
        || intent_for_code(code).is_some()
}

/// Key state collected between ticks.
///
/// Movement is level-triggered. Jump and reset latch on the press edge and
/// are consumed by the next `sample`; auto-repeat key-downs do not re-latch.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    jump_held: bool,
    reset_held: bool,
    jump_edge: bool,
    reset_edge: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns true if the host should prevent its default action.
    pub fn key_down(&mut self, code: &str) -> bool {
        match intent_for_code(code) {
            Some(Intent::MoveLeft) => self.left = true,
            Some(Intent::MoveRight) => self.right = true,
            Some(Intent::Jump) => {
                if !self.jump_held {
                    self.jump_edge = true;
                }
                self.jump_held = true;
            }
            Some(Intent::Reset) => {
                if !self.reset_held {
                    self.reset_edge = true;
                }
                self.reset_held = true;
            }
            None => {}
        }
        blocks_default(code)
    }

    pub fn key_up(&mut self, code: &str) {
        match intent_for_code(code) {
            Some(Intent::MoveLeft) => self.left = false,
            Some(Intent::MoveRight) => self.right = false,
            Some(Intent::Jump) => self.jump_held = false,
            Some(Intent::Reset) => self.reset_held = false,
            None => {}
        }
    }

    /// Snapshot for the coming tick. Clears latched edges.
    pub fn sample(&mut self) -> Intents {
        let intents = Intents {
            left: self.left,
            right: self.right,
            jump: self.jump_edge,
            reset: self.reset_edge,
        };
        self.jump_edge = false;
        self.reset_edge = false;
        intents
    }

    /// Release everything, e.g. when the host window loses focus.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
