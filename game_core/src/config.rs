use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Control, Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub band_top: f32,
    pub band_bottom: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_offset: f32,
    pub ball_radius: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y_max: f32,
    pub ball_speed_increase: f32,
    /// Cap on horizontal ball speed. `None` lets every volley compound.
    pub max_ball_speed_x: Option<f32>,
    pub serve_angle_max_deg: f32,
    pub serve_damping: f32,
    pub ai_jitter: f32,
    pub win_score: u32,
    pub left: Control,
    pub right: Control,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            band_top: Params::BAND_TOP,
            band_bottom: Params::BAND_BOTTOM,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_offset: Params::PADDLE_OFFSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y_max: Params::BALL_SPEED_Y_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            max_ball_speed_x: None,
            serve_angle_max_deg: Params::SERVE_ANGLE_MAX_DEG,
            serve_damping: Params::SERVE_DAMPING,
            ai_jitter: Params::AI_JITTER,
            win_score: Params::WIN_SCORE,
            left: Control::Ai {
                difficulty: Params::AI_DIFFICULTY,
            },
            right: Control::Human,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that make the clamp or win logic unsatisfiable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if !(self.arena_width.is_finite()
            && self.arena_height.is_finite()
            && self.arena_width > 0.0
            && self.arena_height > 0.0)
        {
            return Err(ConfigError::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if !(self.band_top.is_finite()
            && self.band_bottom.is_finite()
            && self.band_top >= 0.0
            && self.band_top < self.band_bottom
            && self.band_bottom <= self.arena_height)
        {
            return Err(ConfigError::InvalidBand {
                top: self.band_top,
                bottom: self.band_bottom,
            });
        }

        let band_height = self.band_height();
        if !(self.paddle_height > 0.0 && self.paddle_height < band_height) {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                band_height,
            });
        }
        if !(self.paddle_width.is_finite() && self.paddle_width > 0.0) {
            return Err(ConfigError::InvalidPaddleWidth(self.paddle_width));
        }
        if !(self.paddle_speed.is_finite() && self.paddle_speed >= 0.0) {
            return Err(ConfigError::NegativePaddleSpeed(self.paddle_speed));
        }
        let half_width = self.arena_width / 2.0;
        if !(self.paddle_offset > self.paddle_width / 2.0 && self.paddle_offset < half_width) {
            return Err(ConfigError::InvalidPaddleOffset {
                offset: self.paddle_offset,
            });
        }

        if !(self.ball_radius > 0.0) {
            return Err(ConfigError::InvalidBallRadius(self.ball_radius));
        }
        if self.ball_radius * 2.0 >= band_height {
            return Err(ConfigError::BallTooLarge {
                diameter: self.ball_radius * 2.0,
                band_height,
            });
        }
        if !(self.ball_speed_x.is_finite()
            && self.ball_speed_y_max.is_finite()
            && self.ball_speed_x > 0.0
            && self.ball_speed_y_max > 0.0)
        {
            return Err(ConfigError::InvalidBallSpeed {
                speed_x: self.ball_speed_x,
                speed_y_max: self.ball_speed_y_max,
            });
        }
        if !(self.ball_speed_increase.is_finite() && self.ball_speed_increase >= 1.0) {
            return Err(ConfigError::InvalidSpeedUp(self.ball_speed_increase));
        }
        if let Some(max) = self.max_ball_speed_x {
            if !(max.is_finite() && max >= self.ball_speed_x) {
                return Err(ConfigError::InvalidSpeedCap {
                    max,
                    serve: self.ball_speed_x,
                });
            }
        }
        if !((0.0..90.0).contains(&self.serve_angle_max_deg)
            && (0.0..=1.0).contains(&self.serve_damping))
        {
            return Err(ConfigError::InvalidServe);
        }

        // Noise is drawn from [-jitter, jitter]; keep it a sane finite range
        if !(self.ai_jitter >= 0.0 && self.ai_jitter <= band_height) {
            return Err(ConfigError::InvalidJitter {
                jitter: self.ai_jitter,
                max: band_height,
            });
        }
        for control in [self.left, self.right] {
            if let Control::Ai { difficulty } = control {
                if !(0.0..=1.0).contains(&difficulty) {
                    return Err(ConfigError::InvalidDifficulty(difficulty));
                }
            }
        }

        Ok(())
    }

    pub fn band_height(&self) -> f32 {
        self.band_bottom - self.band_top
    }

    /// Arena centre, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        let center_x = self.arena_width / 2.0;
        match side {
            Side::Left => center_x - self.paddle_offset,
            Side::Right => center_x + self.paddle_offset,
        }
    }

    pub fn control(&self, side: Side) -> Control {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Lowest and highest Y a paddle centre may occupy
    pub fn paddle_limits(&self) -> (f32, f32) {
        let half_height = self.paddle_height / 2.0;
        (self.band_top + half_height, self.band_bottom - half_height)
    }

    /// Clamp paddle Y to the playable band
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let (min, max) = self.paddle_limits();
        y.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 100.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 800.0, "Right paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let half_height = config.paddle_height / 2.0;
        assert_eq!(config.clamp_paddle_y(0.0), config.band_top + half_height);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.band_bottom - half_height
        );
        let valid_y = 250.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_rejects_zero_win_score() {
        let config = Config {
            win_score: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroWinScore)));
    }

    #[test]
    fn test_rejects_paddle_taller_than_band() {
        let config = Config {
            paddle_height: 370.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_band() {
        let config = Config {
            band_top: 450.0,
            band_bottom: 80.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBand { .. })
        ));
    }

    #[test]
    fn test_rejects_difficulty_out_of_range() {
        let config = Config {
            right: Control::Ai { difficulty: 1.5 },
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDifficulty(_))
        ));

        let config = Config {
            left: Control::Ai {
                difficulty: f32::NAN,
            },
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDifficulty(_))
        ));
    }

    #[test]
    fn test_rejects_nan_ball_radius() {
        let config = Config {
            ball_radius: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBallRadius(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_jitter() {
        for jitter in [f32::INFINITY, f32::NAN, 3.0e38, -1.0] {
            let config = Config {
                ai_jitter: jitter,
                ..Config::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidJitter { .. })),
                "jitter {} should be rejected",
                jitter
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_sizes_and_speeds() {
        let config = Config {
            arena_width: f32::INFINITY,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidArena { .. })));

        let config = Config {
            band_bottom: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBand { .. })));

        let config = Config {
            ball_speed_y_max: f32::INFINITY,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBallSpeed { .. })
        ));

        let config = Config {
            ball_speed_increase: f32::INFINITY,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeedUp(_))));

        let config = Config {
            max_ball_speed_x: Some(f32::INFINITY),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeedCap { .. })
        ));
    }

    #[test]
    fn test_rejects_speed_cap_below_serve_speed() {
        let config = Config {
            max_ball_speed_x: Some(3.0),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeedCap { .. })
        ));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = Config::from_json(r#"{ "win_score": 5, "right": { "Ai": { "difficulty": 0.5 } } }"#)
            .expect("valid config");
        assert_eq!(config.win_score, 5);
        assert_eq!(config.right, Control::Ai { difficulty: 0.5 });
        assert_eq!(config.arena_width, Params::ARENA_WIDTH);
    }

    #[test]
    fn test_from_json_validates() {
        let result = Config::from_json(r#"{ "win_score": 0 }"#);
        assert!(matches!(result, Err(ConfigError::ZeroWinScore)));

        let result = Config::from_json("not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
