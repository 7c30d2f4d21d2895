use thiserror::Error;

/// Reasons a [`Config`](crate::Config) is rejected at match construction
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("win score must be at least 1")]
    ZeroWinScore,

    #[error("arena must have finite positive size, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },

    #[error("playable band [{top}, {bottom}] must be non-empty and inside the arena")]
    InvalidBand { top: f32, bottom: f32 },

    #[error("paddle height {paddle_height} must be smaller than band height {band_height}")]
    PaddleTooTall { paddle_height: f32, band_height: f32 },

    #[error("paddle width must be positive, got {0}")]
    InvalidPaddleWidth(f32),

    #[error("paddle speed must not be negative, got {0}")]
    NegativePaddleSpeed(f32),

    #[error("paddle offset {offset} puts paddles outside the arena or across the centre line")]
    InvalidPaddleOffset { offset: f32 },

    #[error("ball radius must be positive, got {0}")]
    InvalidBallRadius(f32),

    #[error("ball diameter {diameter} must be smaller than band height {band_height}")]
    BallTooLarge { diameter: f32, band_height: f32 },

    #[error("ball speeds must be positive, got x={speed_x} y_max={speed_y_max}")]
    InvalidBallSpeed { speed_x: f32, speed_y_max: f32 },

    #[error("paddle speed-up must be at least 1.0, got {0}")]
    InvalidSpeedUp(f32),

    #[error("max ball speed {max} must not be below serve speed {serve}")]
    InvalidSpeedCap { max: f32, serve: f32 },

    #[error("serve angle must be within [0, 90) degrees and damping within [0, 1]")]
    InvalidServe,

    #[error("AI difficulty must be within [0, 1], got {0}")]
    InvalidDifficulty(f32),

    #[error("AI jitter {jitter} must be within [0, {max}]")]
    InvalidJitter { jitter: f32, max: f32 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
