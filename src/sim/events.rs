//! Collision events and host-facing game events

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{PowerUpKind, Side};

/// A contact detected by the physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// A ball touched a paddle
    PaddleHit { ball: u32, side: Side },
    /// A ball overlapped a power-up
    PowerUpCollect { ball: u32, power_up: u32 },
}

/// FIFO queue of collisions for one tick
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<CollisionEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: CollisionEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<CollisionEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Something the host may want to react to (score text, sounds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// `side` won a point; totals after the increment
    Scored { side: Side, left: u32, right: u32 },
    BallLaunched { ball: u32, vel: Vec2 },
    BallSpawned { ball: u32 },
    PowerUpSpawned { id: u32, kind: PowerUpKind, pos: Vec2 },
    PowerUpCollected { id: u32, kind: PowerUpKind, ball: u32 },
    /// A paddle scale effect expired and the paddle returned to baseline
    EffectReverted { effect: u32, side: Side },
}
