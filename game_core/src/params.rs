/// Game tuning parameters for table tennis
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Playable band (the table surface)
    pub const BAND_TOP: f32 = 80.0;
    pub const BAND_BOTTOM: f32 = 450.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 7.0; // units per tick
    pub const PADDLE_OFFSET: f32 = 350.0; // distance from centre line

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 6.0;
    pub const BALL_SPEED_Y_MAX: f32 = 8.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply vx on paddle hit

    // Serve
    pub const SERVE_ANGLE_MAX_DEG: f32 = 45.0;
    pub const SERVE_DAMPING: f32 = 0.8;

    // AI
    pub const AI_DIFFICULTY: f32 = 0.85;
    pub const AI_JITTER: f32 = 20.0;

    // Score
    pub const WIN_SCORE: u32 = 11; // First to 11 wins
}
