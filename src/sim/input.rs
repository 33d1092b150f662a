//! Keyboard state to paddle motion

use super::state::{MatchState, Side};

/// Key states for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// W
    pub left_up: bool,
    /// S
    pub left_down: bool,
    /// Arrow up
    pub right_up: bool,
    /// Arrow down
    pub right_down: bool,
    /// Space
    pub launch: bool,
}

impl TickInput {
    /// (up, down) for one paddle
    pub fn keys(&self, side: Side) -> (bool, bool) {
        match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        }
    }
}

/// Step each paddle one increment toward its held key.
///
/// Up wins when both keys are held. Only the paddle center is bounded, so a
/// paddle may hang half outside the arena.
pub fn move_paddles(state: &mut MatchState, input: &TickInput) {
    let step = state.config.paddle_step;
    let height = state.config.arena_height;

    for side in Side::BOTH {
        let (up, down) = input.keys(side);
        let paddle = state.paddle_mut(side);
        if up && paddle.y > 0.0 {
            paddle.y = (paddle.y - step).max(0.0);
        } else if down && paddle.y < height {
            paddle.y = (paddle.y + step).min(height);
        }
    }
}
