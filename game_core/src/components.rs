use serde::{Deserialize, Serialize};

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of horizontal velocity that carries the ball toward this side
    pub fn incoming_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    /// Whether a ball with horizontal velocity `vx` is heading at this side
    pub fn is_incoming(self, vx: f32) -> bool {
        vx * self.incoming_sign() > 0.0
    }
}

/// How a paddle is driven
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Control {
    /// Follows directional intents from the input collaborator
    Human,
    /// Tracks the ball; `difficulty` in [0, 1] sets both aim and pursuit speed
    Ai { difficulty: f32 },
}

/// Directional intent for a human paddle (sampled once per tick)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Up,
    Down,
    #[default]
    None,
}

impl Intent {
    /// Build an intent from held keys; both held cancel out
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => Intent::Up,
            (false, true) => Intent::Down,
            _ => Intent::None,
        }
    }

    /// Y direction (screen coordinates: up is negative)
    pub fn dir(self) -> f32 {
        match self {
            Intent::Up => -1.0,
            Intent::Down => 1.0,
            Intent::None => 0.0,
        }
    }
}

/// Result of advancing the ball one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    None,
    /// The ball left the table; the point goes to this side
    Scored(Side),
}
