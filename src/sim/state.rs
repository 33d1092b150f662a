//! Match state and core simulation types
//!
//! Everything the host renderer reads lives here. The registry holds data
//! only; the systems in the sibling modules keep its invariants.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::MatchConfig;

/// Which side of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Ball motion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    /// At rest, waiting for a launch (velocity is zero)
    Idle,
    /// Free-moving
    Moving,
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub scale: Vec2,
    pub motion: MotionState,
}

impl Ball {
    /// Create an idle ball
    pub fn new(id: u32, pos: Vec2, scale: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            scale: Vec2::splat(scale),
            motion: MotionState::Idle,
        }
    }

    /// Collision box size in arena units
    pub fn size(&self) -> Vec2 {
        self.scale * BALL_SPRITE_SIZE
    }

    pub fn is_moving(&self) -> bool {
        self.motion == MotionState::Moving
    }
}

/// A player's paddle (x is fixed, y follows input)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub scale: Vec2,
}

impl Paddle {
    /// Default rendering scale; timed effects always revert to this
    pub const BASELINE_SCALE: Vec2 = Vec2::ONE;

    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self {
            side,
            x,
            y,
            scale: Self::BASELINE_SCALE,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Collision box size in arena units
    pub fn size(&self) -> Vec2 {
        Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT) * self.scale
    }
}

/// Power-up types (wire values 1-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    SpeedBoost = 1,
    PaddleGrow = 2,
    PaddleShrinkOpponent = 3,
    BallResize = 4,
    SpeedDeboost = 5,
    MultiBall = 6,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::SpeedBoost,
        PowerUpKind::PaddleGrow,
        PowerUpKind::PaddleShrinkOpponent,
        PowerUpKind::BallResize,
        PowerUpKind::SpeedDeboost,
        PowerUpKind::MultiBall,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.index() == index)
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A collectible power-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub scale: f32,
}

impl PowerUp {
    pub fn size(&self) -> Vec2 {
        Vec2::splat(POWERUP_SPRITE_SIZE * self.scale)
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) -> u32 {
        let points = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *points += 1;
        *points
    }

    /// Text shown by the score display for one side
    pub fn readout(&self, side: Side) -> String {
        self.get(side).to_string()
    }
}

/// A pending paddle-scale reversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEffect {
    pub id: u32,
    pub target: Side,
    pub applied_at_ms: u64,
    pub revert_at_ms: u64,
    /// Vertical scale forced on the target when the effect expires
    pub revert_scale: f32,
}

fn detached_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete match state (deterministic, serializable snapshot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Seed the match RNG was created from
    pub seed: u64,
    pub config: MatchConfig,
    /// Simulated time since match start
    pub time_ms: u64,
    pub tick_count: u64,
    pub score: Score,
    /// Most recent paddle to touch any ball
    pub last_hit: Option<Side>,
    paddles: [Paddle; 2],
    /// Active balls, ordered by id
    pub balls: Vec<Ball>,
    /// Id of the ball launched by the launch key and reset after points
    pub primary_ball: u32,
    /// Uncollected power-ups, ordered by id
    pub power_ups: Vec<PowerUp>,
    /// Pending paddle reversions, ordered by id
    pub effects: Vec<ScheduledEffect>,
    /// Simulated time of the next power-up spawn
    pub next_spawn_ms: u64,
    #[serde(skip, default = "detached_rng")]
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl MatchState {
    /// Create a match with an idle primary ball at the arena center
    pub fn new(seed: u64, config: MatchConfig) -> Self {
        let paddles = [
            Paddle::new(Side::Left, config.left_paddle_x, config.paddle_start_y),
            Paddle::new(Side::Right, config.right_paddle_x, config.paddle_start_y),
        ];
        let mut state = Self {
            seed,
            time_ms: 0,
            tick_count: 0,
            score: Score::default(),
            last_hit: None,
            paddles,
            balls: Vec::new(),
            primary_ball: 0,
            power_ups: Vec::new(),
            effects: Vec::new(),
            next_spawn_ms: config.spawn_interval_ms,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            config,
        };

        let center = state.arena_center();
        state.primary_ball = state.spawn_ball(center);
        log::info!("Match started (seed {seed})");

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an idle ball and return its id
    pub fn spawn_ball(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.balls
            .push(Ball::new(id, pos, self.config.ball_start_scale));
        id
    }

    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.config.arena_center_x(), self.config.arena_center_y())
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn paddles(&self) -> &[Paddle; 2] {
        &self.paddles
    }

    pub fn ball(&self, id: u32) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn ball_mut(&mut self, id: u32) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id)
    }

    pub fn primary(&self) -> Option<&Ball> {
        self.ball(self.primary_ball)
    }

    pub fn power_up(&self, id: u32) -> Option<&PowerUp> {
        self.power_ups.iter().find(|p| p.id == id)
    }

    /// Remove a power-up, returning it if it was still active
    pub fn take_power_up(&mut self, id: u32) -> Option<PowerUp> {
        let index = self.power_ups.iter().position(|p| p.id == id)?;
        Some(self.power_ups.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_has_idle_primary_ball() {
        let state = MatchState::new(1, MatchConfig::default());
        assert_eq!(state.balls.len(), 1);
        let ball = state.primary().expect("primary ball");
        assert_eq!(ball.motion, MotionState::Idle);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.pos, Vec2::new(512.0, 384.0));
        assert_eq!(state.last_hit, None);
        assert_eq!(state.next_spawn_ms, POWERUP_SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_paddles_start_at_baseline() {
        let state = MatchState::new(1, MatchConfig::default());
        let left = state.paddle(Side::Left);
        let right = state.paddle(Side::Right);
        assert_eq!(left.x, LEFT_PADDLE_X);
        assert_eq!(right.x, RIGHT_PADDLE_X);
        assert_eq!(left.scale, Paddle::BASELINE_SCALE);
        assert_eq!(right.y, PADDLE_START_Y);
    }

    #[test]
    fn test_power_up_kind_indices() {
        for (i, kind) in PowerUpKind::ALL.iter().enumerate() {
            assert_eq!(kind.index() as usize, i + 1);
            assert_eq!(PowerUpKind::from_index(kind.index()), Some(*kind));
        }
        assert_eq!(PowerUpKind::from_index(0), None);
        assert_eq!(PowerUpKind::from_index(7), None);
    }

    #[test]
    fn test_score_readout() {
        let mut score = Score::default();
        assert_eq!(score.increment(Side::Right), 1);
        assert_eq!(score.increment(Side::Right), 2);
        assert_eq!(score.readout(Side::Right), "2");
        assert_eq!(score.readout(Side::Left), "0");
    }

    #[test]
    fn test_take_power_up_once() {
        let mut state = MatchState::new(1, MatchConfig::default());
        let id = state.next_entity_id();
        state.power_ups.push(PowerUp {
            id,
            kind: PowerUpKind::SpeedBoost,
            pos: Vec2::new(200.0, 200.0),
            scale: POWERUP_SCALE,
        });
        assert!(state.take_power_up(id).is_some());
        assert!(state.take_power_up(id).is_none());
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = MatchState::new(7, MatchConfig::default());
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
        assert_ne!(a, state.primary_ball);
    }
}
