//! Power Pong - two-player paddle contest with timed power-ups
//!
//! Core modules:
//! - `sim`: Deterministic match simulation (paddles, balls, scoring, power-ups)
//! - `settings`: Match configuration loaded from JSON
//!
//! Rendering, audio and device polling belong to the host. The host feeds a
//! [`sim::TickInput`] into [`sim::tick`] once per frame and draws the
//! resulting [`sim::MatchState`].

pub mod settings;
pub mod sim;

pub use settings::{ConfigError, MatchConfig};

/// Game configuration constants
pub mod consts {
    /// Default simulation step in milliseconds (~60 Hz)
    pub const SIM_DT_MS: u32 = 16;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1024.0;
    pub const ARENA_HEIGHT: f32 = 768.0;

    /// Distance from a side wall at which the ball counts as a point
    pub const SCORE_MARGIN: f32 = 30.0;

    /// Paddle defaults
    pub const LEFT_PADDLE_X: f32 = 50.0;
    pub const RIGHT_PADDLE_X: f32 = 974.0;
    pub const PADDLE_START_Y: f32 = 384.0;
    /// Units moved per tick while a key is held
    pub const PADDLE_STEP: f32 = 5.0;
    /// Paddle sprite size at scale (1, 1)
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;

    /// Ball defaults
    pub const BALL_SPRITE_SIZE: f32 = 400.0;
    pub const BALL_START_SCALE: f32 = 0.05;
    /// Per-axis launch speed (units/sec)
    pub const LAUNCH_SPEED: f32 = 300.0;
    /// Vertical offset the ball returns to after a point
    pub const BALL_RESET_Y: f32 = 384.0;

    /// Power-up defaults
    pub const POWERUP_SPRITE_SIZE: f32 = 500.0;
    pub const POWERUP_SCALE: f32 = 0.1;
    pub const POWERUP_SPAWN_INTERVAL_MS: u64 = 10_000;
    /// Inset from every arena edge for spawn positions
    pub const POWERUP_SPAWN_INSET: f32 = 100.0;
    pub const EFFECT_DURATION_MS: u64 = 5_000;
    pub const SPEED_BOOST: f32 = 1.5;
    pub const SPEED_DEBOOST: f32 = 0.5;
    pub const PADDLE_GROW_SCALE: f32 = 2.0;
    pub const PADDLE_SHRINK_SCALE: f32 = 0.5;
    pub const BALL_RESIZE_MIN: f32 = 0.03;
    pub const BALL_RESIZE_MAX: f32 = 0.1;
}
