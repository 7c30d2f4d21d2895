//! Read-only views published once per tick.
//!
//! `BallView` doubles as the observation handed to AI paddles, so a paddle
//! never holds a reference to the live ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Control, Phase, Score, Side};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub control: Control,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub ball: BallView,
    pub left: PaddleView,
    pub right: PaddleView,
    pub score: Score,
    pub phase: Phase,
    pub winner: Option<Side>,
}

impl MatchSnapshot {
    pub fn paddle(&self, side: Side) -> &PaddleView {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}
