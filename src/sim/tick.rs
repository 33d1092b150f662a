//! Fixed timestep match tick
//!
//! Order within a tick:
//! 1. Expired paddle effects revert, due power-ups spawn
//! 2. Launch key, then paddle keys
//! 3. Physics step queues collisions
//! 4. Collisions are resolved in FIFO order
//! 5. Scoring check

use super::events::{CollisionEvent, EventQueue, GameEvent};
use super::input::{TickInput, move_paddles};
use super::launch::launch_ball;
use super::physics::step_physics;
use super::powerup::{collect_power_up, spawn_due_power_ups, sweep_effects};
use super::scoring::{check_scoring, record_paddle_hit};
use super::state::MatchState;

/// Advance the match by `dt_ms` of simulated time
pub fn tick(state: &mut MatchState, input: &TickInput, dt_ms: u32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.time_ms += u64::from(dt_ms);
    state.tick_count += 1;

    sweep_effects(state, &mut events);
    spawn_due_power_ups(state, &mut events);

    if input.launch {
        let primary = state.primary_ball;
        launch_ball(state, primary, &mut events);
    }
    move_paddles(state, input);

    let mut queue = EventQueue::new();
    step_physics(state, dt_ms as f32 / 1000.0, &mut queue);
    resolve_collisions(state, &mut queue, &mut events);

    check_scoring(state, &mut events);

    events
}

/// Drain the collision queue in arrival order
pub fn resolve_collisions(
    state: &mut MatchState,
    queue: &mut EventQueue,
    events: &mut Vec<GameEvent>,
) {
    while let Some(event) = queue.pop() {
        match event {
            CollisionEvent::PaddleHit { side, .. } => record_paddle_hit(state, side),
            CollisionEvent::PowerUpCollect { ball, power_up } => {
                collect_power_up(state, ball, power_up, events);
            }
        }
    }
}
