//! Paddle-hit tracking and point scoring

use super::events::GameEvent;
use super::launch::reset_ball;
use super::state::{MatchState, Side};

/// Remember which paddle touched a ball most recently (any ball)
pub fn record_paddle_hit(state: &mut MatchState, side: Side) {
    state.last_hit = Some(side);
}

/// Side that wins the point when a ball is at `x`, if it is inside a
/// scoring band
pub fn scoring_side(x: f32, margin: f32, arena_width: f32) -> Option<Side> {
    if x < margin {
        Some(Side::Right)
    } else if x > arena_width - margin {
        Some(Side::Left)
    } else {
        None
    }
}

/// Award points for balls inside a scoring band and restart them.
///
/// Only the primary ball is checked unless `score_all_balls` is set.
pub fn check_scoring(state: &mut MatchState, events: &mut Vec<GameEvent>) {
    let candidates: Vec<u32> = if state.config.score_all_balls {
        state.balls.iter().map(|b| b.id).collect()
    } else {
        vec![state.primary_ball]
    };

    for ball_id in candidates {
        let Some(ball) = state.ball(ball_id) else {
            continue;
        };
        let Some(side) = scoring_side(ball.pos.x, state.config.score_margin, state.config.arena_width)
        else {
            continue;
        };

        state.score.increment(side);
        let (left, right) = (state.score.left, state.score.right);
        log::info!("{side:?} scores ({left} - {right})");
        events.push(GameEvent::Scored { side, left, right });

        reset_ball(state, ball_id, events);
    }
}
