//! Power-up spawning, collection and timed paddle effects

use glam::Vec2;
use rand::Rng;

use super::events::GameEvent;
use super::launch::random_diagonal_velocity;
use super::state::{MatchState, MotionState, Paddle, PowerUp, PowerUpKind, ScheduledEffect, Side};
use crate::consts::POWERUP_SCALE;

/// Run the repeating spawn timer up to the current match time
pub fn spawn_due_power_ups(state: &mut MatchState, events: &mut Vec<GameEvent>) {
    while state.time_ms >= state.next_spawn_ms {
        spawn_power_up(state, events);
        state.next_spawn_ms += state.config.spawn_interval_ms;
    }
}

/// Drop one power-up of a random kind inside the spawn inset
pub fn spawn_power_up(state: &mut MatchState, events: &mut Vec<GameEvent>) -> u32 {
    let inset = state.config.spawn_inset;
    let (width, height) = (state.config.arena_width, state.config.arena_height);

    let x = state.rng.random_range(inset..=width - inset);
    let y = state.rng.random_range(inset..=height - inset);
    let kind = PowerUpKind::ALL[state.rng.random_range(0..PowerUpKind::ALL.len())];

    let id = state.next_entity_id();
    let pos = Vec2::new(x, y);
    state.power_ups.push(PowerUp {
        id,
        kind,
        pos,
        scale: POWERUP_SCALE,
    });

    log::info!("Spawned {kind:?} power-up {id} at {pos}");
    events.push(GameEvent::PowerUpSpawned { id, kind, pos });
    id
}

/// Collect a power-up for `ball_id` and apply its effect.
///
/// Returns false if the power-up was already collected; its effect is never
/// applied twice.
pub fn collect_power_up(
    state: &mut MatchState,
    ball_id: u32,
    power_up_id: u32,
    events: &mut Vec<GameEvent>,
) -> bool {
    let Some(power_up) = state.take_power_up(power_up_id) else {
        return false;
    };

    log::debug!(
        "Ball {ball_id} collected {:?} power-up {power_up_id}",
        power_up.kind
    );
    events.push(GameEvent::PowerUpCollected {
        id: power_up_id,
        kind: power_up.kind,
        ball: ball_id,
    });
    apply_effect(state, power_up.kind, ball_id, events);
    true
}

fn apply_effect(
    state: &mut MatchState,
    kind: PowerUpKind,
    ball_id: u32,
    events: &mut Vec<GameEvent>,
) {
    let config = state.config.clone();
    match kind {
        PowerUpKind::SpeedBoost => scale_ball_speed(state, ball_id, config.speed_boost),
        PowerUpKind::SpeedDeboost => scale_ball_speed(state, ball_id, config.speed_deboost),
        PowerUpKind::PaddleGrow => {
            if let Some(side) = state.last_hit {
                resize_paddle(state, side, config.paddle_grow_scale);
            }
        }
        PowerUpKind::PaddleShrinkOpponent => {
            if let Some(side) = state.last_hit {
                resize_paddle(state, side.opponent(), config.paddle_shrink_scale);
            }
        }
        PowerUpKind::BallResize => {
            let scale = state
                .rng
                .random_range(config.ball_resize_min..=config.ball_resize_max);
            if let Some(ball) = state.ball_mut(ball_id) {
                ball.scale = Vec2::splat(scale);
            }
        }
        PowerUpKind::MultiBall => spawn_extra_ball(state, events),
    }
}

fn scale_ball_speed(state: &mut MatchState, ball_id: u32, factor: f32) {
    if let Some(ball) = state.ball_mut(ball_id) {
        ball.vel *= factor;
    }
}

/// Set a paddle's vertical scale and schedule its return to baseline
fn resize_paddle(state: &mut MatchState, side: Side, factor: f32) {
    state.paddle_mut(side).scale = Vec2::new(Paddle::BASELINE_SCALE.x, factor);

    let id = state.next_entity_id();
    let applied_at_ms = state.time_ms;
    state.effects.push(ScheduledEffect {
        id,
        target: side,
        applied_at_ms,
        revert_at_ms: applied_at_ms + state.config.effect_duration_ms,
        revert_scale: Paddle::BASELINE_SCALE.y,
    });
    log::debug!("{side:?} paddle scaled to {factor} (effect {id})");
}

fn spawn_extra_ball(state: &mut MatchState, events: &mut Vec<GameEvent>) {
    let center = state.arena_center();
    let vel = random_diagonal_velocity(&mut state.rng, state.config.launch_speed);
    let id = state.spawn_ball(center);
    if let Some(ball) = state.ball_mut(id) {
        ball.vel = vel;
        ball.motion = MotionState::Moving;
    }

    log::debug!("Extra ball {id} spawned with velocity {vel}");
    events.push(GameEvent::BallSpawned { ball: id });
}

/// Revert every effect whose timer has expired.
///
/// Each effect forces its paddle back to baseline on its own schedule, even
/// if a newer effect on the same paddle is still running.
pub fn sweep_effects(state: &mut MatchState, events: &mut Vec<GameEvent>) {
    let now = state.time_ms;
    let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut state.effects)
        .into_iter()
        .partition(|e| e.revert_at_ms <= now);
    state.effects = pending;

    for effect in due {
        let paddle = state.paddle_mut(effect.target);
        paddle.scale = Vec2::new(Paddle::BASELINE_SCALE.x, effect.revert_scale);
        log::debug!("{:?} paddle back to baseline (effect {})", effect.target, effect.id);
        events.push(GameEvent::EffectReverted {
            effect: effect.id,
            side: effect.target,
        });
    }
}
