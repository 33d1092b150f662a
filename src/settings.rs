//! Match configuration
//!
//! Loaded from a JSON file by the native driver. Every field falls back to
//! the value in [`crate::consts`] when omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a [`MatchConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable match parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Scoring band measured from each side wall
    pub score_margin: f32,

    // === Paddles ===
    pub left_paddle_x: f32,
    pub right_paddle_x: f32,
    pub paddle_start_y: f32,
    pub paddle_step: f32,

    // === Ball ===
    pub launch_speed: f32,
    pub ball_start_scale: f32,
    pub ball_reset_y: f32,

    // === Power-ups ===
    pub spawn_interval_ms: u64,
    pub spawn_inset: f32,
    pub effect_duration_ms: u64,
    pub speed_boost: f32,
    pub speed_deboost: f32,
    pub paddle_grow_scale: f32,
    pub paddle_shrink_scale: f32,
    pub ball_resize_min: f32,
    pub ball_resize_max: f32,

    /// Apply the scoring margin to multi-ball spawns as well as the primary
    /// ball. Off by default: extra balls never score.
    pub score_all_balls: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            score_margin: SCORE_MARGIN,

            left_paddle_x: LEFT_PADDLE_X,
            right_paddle_x: RIGHT_PADDLE_X,
            paddle_start_y: PADDLE_START_Y,
            paddle_step: PADDLE_STEP,

            launch_speed: LAUNCH_SPEED,
            ball_start_scale: BALL_START_SCALE,
            ball_reset_y: BALL_RESET_Y,

            spawn_interval_ms: POWERUP_SPAWN_INTERVAL_MS,
            spawn_inset: POWERUP_SPAWN_INSET,
            effect_duration_ms: EFFECT_DURATION_MS,
            speed_boost: SPEED_BOOST,
            speed_deboost: SPEED_DEBOOST,
            paddle_grow_scale: PADDLE_GROW_SCALE,
            paddle_shrink_scale: PADDLE_SHRINK_SCALE,
            ball_resize_min: BALL_RESIZE_MIN,
            ball_resize_max: BALL_RESIZE_MAX,

            score_all_balls: false,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file, falling back to defaults if it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded match config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(invalid("arena", "dimensions must be positive"));
        }
        if self.score_margin < 0.0 || self.score_margin * 2.0 >= self.arena_width {
            return Err(invalid(
                "score_margin",
                format!("must be in [0, {})", self.arena_width / 2.0),
            ));
        }
        if self.spawn_inset < 0.0
            || self.spawn_inset * 2.0 > self.arena_width
            || self.spawn_inset * 2.0 > self.arena_height
        {
            return Err(invalid("spawn_inset", "leaves no room to spawn power-ups"));
        }
        if self.spawn_interval_ms == 0 {
            return Err(invalid("spawn_interval_ms", "must be non-zero"));
        }
        if self.ball_resize_min <= 0.0 || self.ball_resize_min > self.ball_resize_max {
            return Err(invalid(
                "ball_resize_min",
                format!(
                    "range [{}, {}] is empty or non-positive",
                    self.ball_resize_min, self.ball_resize_max
                ),
            ));
        }
        Ok(())
    }

    pub fn arena_center_x(&self) -> f32 {
        self.arena_width / 2.0
    }

    pub fn arena_center_y(&self) -> f32 {
        self.arena_height / 2.0
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = MatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.arena_center_x(), 512.0);
        assert!(!config.score_all_balls);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MatchConfig::from_json(r#"{ "score_all_balls": true, "paddle_step": 8.0 }"#)
            .expect("valid config");
        assert!(config.score_all_balls);
        assert_eq!(config.paddle_step, 8.0);
        assert_eq!(config.arena_width, ARENA_WIDTH);
        assert_eq!(config.spawn_interval_ms, POWERUP_SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_rejects_bad_margin() {
        let err = MatchConfig::from_json(r#"{ "score_margin": 600.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "score_margin",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_resize_range() {
        let config = MatchConfig {
            ball_resize_min: 0.2,
            ball_resize_max: 0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = MatchConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = MatchConfig::load("/nonexistent/power-pong.json").expect("defaults");
        assert_eq!(config, MatchConfig::default());
    }
}
