//! Deterministic match simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep supplied by the host
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod events;
pub mod input;
pub mod launch;
pub mod physics;
pub mod powerup;
pub mod scoring;
pub mod state;
pub mod tick;

pub use events::{CollisionEvent, EventQueue, GameEvent};
pub use input::{TickInput, move_paddles};
pub use launch::{launch_ball, random_diagonal_velocity, reset_ball};
pub use physics::{Aabb, step_physics};
pub use powerup::{collect_power_up, spawn_due_power_ups, spawn_power_up, sweep_effects};
pub use scoring::{check_scoring, record_paddle_hit, scoring_side};
pub use state::{
    Ball, MatchState, MotionState, Paddle, PowerUp, PowerUpKind, ScheduledEffect, Score, Side,
};
pub use tick::{resolve_collisions, tick};
