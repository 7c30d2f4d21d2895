use rand::Rng;

use crate::{BallView, Config, Control, GameRng, Intent, Side};

/// Paddle component - one player's bat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Fixed for the whole match
    pub y: f32, // Clamped to the playable band
    pub control: Control,
}

impl Paddle {
    /// Spawn at the arena's mid-height, driven as the config says for this side
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.clamp_paddle_y(config.arena_height / 2.0),
            control: config.control(side),
        }
    }

    /// X of the edge facing the centre line
    pub fn face_x(&self, config: &Config) -> f32 {
        match self.side {
            Side::Left => self.x + config.paddle_width / 2.0,
            Side::Right => self.x - config.paddle_width / 2.0,
        }
    }

    /// Advance one tick.
    ///
    /// Human paddles follow `intent`; AI paddles ignore it and react to `ball`,
    /// which must be the ball as it was before this tick's physics.
    pub fn update(&mut self, intent: Intent, ball: &BallView, config: &Config, rng: &mut GameRng) {
        match self.control {
            Control::Human => self.apply_intent(intent, config),
            Control::Ai { difficulty } => self.track(ball, difficulty, config, rng),
        }
    }

    fn apply_intent(&mut self, intent: Intent, config: &Config) {
        let delta = intent.dir() * config.paddle_speed;
        self.y = config.clamp_paddle_y(self.y + delta);
    }

    /// Reactive tracking: chase the ball's current height plus aim noise, only
    /// while the ball is heading this way.
    fn track(&mut self, ball: &BallView, difficulty: f32, config: &Config, rng: &mut GameRng) {
        if !self.side.is_incoming(ball.vel.x) {
            return;
        }

        let jitter = config.ai_jitter;
        let noise = rng.0.gen_range(-jitter..=jitter) * (1.0 - difficulty);
        let target = ball.pos.y + noise;

        let (min, max) = config.paddle_limits();
        self.y = step_toward(self.y, target, config.paddle_speed * difficulty, min, max);
    }
}

/// Move `y` a full `step` toward `target`, stopping only at `min`/`max`.
/// A paddle within one step of its target overshoots it.
pub fn step_toward(y: f32, target: f32, step: f32, min: f32, max: f32) -> f32 {
    if y < target && y < max {
        y + step.min(max - y)
    } else if y > target && y > min {
        y - step.min(y - min)
    } else {
        y
    }
}
