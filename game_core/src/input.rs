//! Per-tick input snapshot and keyboard helpers

use crate::{Intent, Side};

/// Input sampled once at the start of a tick. Nothing in it changes mid-tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: Intent,
    pub right: Intent,
    /// Edge-triggered: true only on the tick a restart was requested
    pub restart: bool,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_intent(mut self, side: Side, intent: Intent) -> Self {
        match side {
            Side::Left => self.left = intent,
            Side::Right => self.right = intent,
        }
        self
    }

    pub fn with_restart(mut self) -> Self {
        self.restart = true;
        self
    }

    pub fn intent(&self, side: Side) -> Intent {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Turns a held restart button into a single rising-edge trigger
#[derive(Debug, Clone, Copy, Default)]
pub struct RestartEdge {
    was_down: bool,
}

impl RestartEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current button level; returns true only on the press
    pub fn sample(&mut self, down: bool) -> bool {
        let fired = down && !self.was_down;
        self.was_down = down;
        fired
    }
}

/// Held-key state for one human paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    /// Handle key down event
    pub fn key_down(&mut self, key: &str) {
        match key {
            "ArrowUp" | "w" | "W" => self.up = true,
            "ArrowDown" | "s" | "S" => self.down = true,
            _ => {}
        }
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) {
        match key {
            "ArrowUp" | "w" | "W" => self.up = false,
            "ArrowDown" | "s" | "S" => self.down = false,
            _ => {}
        }
    }

    pub fn intent(&self) -> Intent {
        Intent::from_keys(self.up, self.down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_edge_fires_once_while_held() {
        let mut edge = RestartEdge::new();
        let fired: Vec<bool> = [false, true, true, true, false, true]
            .into_iter()
            .map(|down| edge.sample(down))
            .collect();
        assert_eq!(fired, vec![false, true, false, false, false, true]);
    }

    #[test]
    fn test_key_state_intent() {
        let mut keys = KeyState::default();
        keys.key_down("ArrowUp");
        assert_eq!(keys.intent(), Intent::Up);
        keys.key_down("s");
        assert_eq!(keys.intent(), Intent::None, "Opposite keys cancel");
        keys.key_up("ArrowUp");
        assert_eq!(keys.intent(), Intent::Down);
        keys.key_up("S");
        keys.key_down("Enter");
        assert_eq!(keys.intent(), Intent::None);
    }

    #[test]
    fn test_input_frame_builders() {
        let frame = InputFrame::new()
            .with_intent(Side::Right, Intent::Down)
            .with_restart();
        assert_eq!(frame.intent(Side::Left), Intent::None);
        assert_eq!(frame.intent(Side::Right), Intent::Down);
        assert!(frame.restart);
    }
}
