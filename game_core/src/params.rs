/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table
    pub const TABLE_WIDTH: f32 = 3.2;
    pub const TABLE_HEIGHT: f32 = 2.0;
    pub const TABLE_COLOR: u32 = 0xffffff;
    pub const TABLE_DASHES: u32 = 15;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 0.05;
    pub const PADDLE_HEIGHT: f32 = 0.3;
    pub const PADDLE_SPEED: f32 = 1.25; // units per second
    pub const PADDLE_BASELINE: f32 = 0.9; // fraction of the table's half-width
    pub const PADDLE_COLOR: u32 = 0xffffff;

    // Ball
    pub const BALL_RADIUS: f32 = 0.025;
    pub const BALL_SPEED: f32 = 1.2;
    pub const BALL_DIRECTION_MAX: f32 = std::f32::consts::FRAC_PI_6;
    pub const BALL_COLOR: u32 = 0xffffff;

    // Push-out applied after a contact so the ball is strictly clear next frame
    pub const CONTACT_EPSILON: f32 = 1e-6;

    // Score
    pub const WIN_SCORE: u32 = 5;

    // Frame stepping
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
