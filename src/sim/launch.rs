//! Ball launch and point-restart state machine
//!
//! `Idle --launch--> Moving --reset--> Idle --launch--> Moving`. A reset
//! always relaunches immediately; there is no pause between points.

use glam::Vec2;
use rand::Rng;

use super::events::GameEvent;
use super::state::{MatchState, MotionState};

/// Velocity with |vx| = |vy| = `speed` and independently random signs
pub fn random_diagonal_velocity<R: Rng>(rng: &mut R, speed: f32) -> Vec2 {
    let sign = |heads: bool| -> f32 { if heads { 1.0 } else { -1.0 } };
    let vx = speed * sign(rng.random_bool(0.5));
    let vy = speed * sign(rng.random_bool(0.5));
    Vec2::new(vx, vy)
}

/// Launch an idle ball. No-op for a moving or unknown ball.
pub fn launch_ball(state: &mut MatchState, ball_id: u32, events: &mut Vec<GameEvent>) -> bool {
    match state.ball(ball_id) {
        Some(ball) if ball.motion == MotionState::Idle => {}
        _ => return false,
    }

    let vel = random_diagonal_velocity(&mut state.rng, state.config.launch_speed);
    let Some(ball) = state.ball_mut(ball_id) else {
        return false;
    };
    ball.vel = vel;
    ball.motion = MotionState::Moving;

    log::debug!("Ball {ball_id} launched with velocity {vel}");
    events.push(GameEvent::BallLaunched { ball: ball_id, vel });
    true
}

/// Put a ball back at the restart spot and relaunch it
pub fn reset_ball(state: &mut MatchState, ball_id: u32, events: &mut Vec<GameEvent>) {
    let restart = Vec2::new(state.config.arena_center_x(), state.config.ball_reset_y);
    let Some(ball) = state.ball_mut(ball_id) else {
        return;
    };
    ball.pos = restart;
    ball.vel = Vec2::ZERO;
    ball.motion = MotionState::Idle;

    launch_ball(state, ball_id, events);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MatchConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_launch_from_idle() {
        let mut state = MatchState::new(11, MatchConfig::default());
        let mut events = Vec::new();
        let id = state.primary_ball;

        assert!(launch_ball(&mut state, id, &mut events));

        let ball = state.primary().unwrap();
        assert_eq!(ball.motion, MotionState::Moving);
        assert_eq!(ball.vel.x.abs(), 300.0);
        assert_eq!(ball.vel.y.abs(), 300.0);
        assert!(matches!(events[0], GameEvent::BallLaunched { ball, .. } if ball == id));
    }

    #[test]
    fn test_launch_when_moving_is_noop() {
        let mut state = MatchState::new(11, MatchConfig::default());
        let mut events = Vec::new();
        let id = state.primary_ball;
        launch_ball(&mut state, id, &mut events);
        let vel = state.primary().unwrap().vel;

        assert!(!launch_ball(&mut state, id, &mut events));
        assert_eq!(state.primary().unwrap().vel, vel);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_launch_unknown_ball_is_noop() {
        let mut state = MatchState::new(11, MatchConfig::default());
        let mut events = Vec::new();
        assert!(!launch_ball(&mut state, 999, &mut events));
        assert!(events.is_empty());
    }

    #[test]
    fn test_reset_relaunches_from_restart_spot() {
        let mut state = MatchState::new(5, MatchConfig::default());
        let mut events = Vec::new();
        let id = state.primary_ball;
        launch_ball(&mut state, id, &mut events);
        state.balls[0].pos = Vec2::new(1010.0, 100.0);

        reset_ball(&mut state, id, &mut events);

        let ball = state.primary().unwrap();
        assert_eq!(ball.pos, Vec2::new(512.0, 384.0));
        assert_eq!(ball.motion, MotionState::Moving);
        assert_ne!(ball.vel, Vec2::ZERO);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_all_four_diagonals_are_drawn() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut counts = [0u32; 4];
        let n = 8000;
        for _ in 0..n {
            let v = random_diagonal_velocity(&mut rng, 300.0);
            assert_eq!(v.x.abs(), 300.0);
            assert_eq!(v.y.abs(), 300.0);
            let quadrant = (v.x > 0.0) as usize * 2 + (v.y > 0.0) as usize;
            counts[quadrant] += 1;
        }
        for count in counts {
            let freq = count as f32 / n as f32;
            assert!((freq - 0.25).abs() < 0.03, "diagonal frequency {freq}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_launch_is_diagonal(seed in any::<u64>()) {
                let mut state = MatchState::new(seed, MatchConfig::default());
                let mut events = Vec::new();
                let id = state.primary_ball;
                launch_ball(&mut state, id, &mut events);
                let ball = state.primary().unwrap();
                prop_assert_eq!(ball.vel.x.abs(), 300.0);
                prop_assert_eq!(ball.vel.y.abs(), 300.0);
                prop_assert!(ball.is_moving());
            }
        }
    }
}
