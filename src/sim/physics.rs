//! Arcade physics for the match
//!
//! Integrates ball motion, bounces balls off the world bounds and the
//! immovable paddles, and reports contacts as [`CollisionEvent`]s. It never
//! touches score or power-up state itself.

use glam::Vec2;

use super::events::{CollisionEvent, EventQueue};
use super::state::{Ball, MatchState, Side};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Penetration depth on each axis (only meaningful when intersecting)
    pub fn overlap(&self, other: &Aabb) -> Vec2 {
        Vec2::new(
            self.max.x.min(other.max.x) - self.min.x.max(other.min.x),
            self.max.y.min(other.max.y) - self.min.y.max(other.min.y),
        )
    }
}

fn ball_box(ball: &Ball) -> Aabb {
    Aabb::from_center_size(ball.pos, ball.size())
}

/// Advance every ball by `dt` seconds and queue the contacts found
pub fn step_physics(state: &mut MatchState, dt: f32, queue: &mut EventQueue) {
    let arena = Vec2::new(state.config.arena_width, state.config.arena_height);
    let paddles: Vec<(Side, Aabb)> = state
        .paddles()
        .iter()
        .map(|p| (p.side, Aabb::from_center_size(p.pos(), p.size())))
        .collect();
    let power_ups: Vec<(u32, Aabb)> = state
        .power_ups
        .iter()
        .map(|p| (p.id, Aabb::from_center_size(p.pos, p.size())))
        .collect();

    for ball in &mut state.balls {
        ball.pos += ball.vel * dt;
        bounce_off_world(ball, arena);

        for (side, paddle) in &paddles {
            if ball_box(ball).intersects(paddle) {
                separate_from(ball, paddle);
                log::trace!("Ball {} hit {:?} paddle", ball.id, side);
                queue.push(CollisionEvent::PaddleHit {
                    ball: ball.id,
                    side: *side,
                });
            }
        }

        let hitbox = ball_box(ball);
        for (id, power_up) in &power_ups {
            if hitbox.intersects(power_up) {
                log::trace!("Ball {} overlaps power-up {}", ball.id, id);
                queue.push(CollisionEvent::PowerUpCollect {
                    ball: ball.id,
                    power_up: *id,
                });
            }
        }
    }
}

/// Elastic bounce off all four arena edges
fn bounce_off_world(ball: &mut Ball, arena: Vec2) {
    let half = ball.size() * 0.5;

    if ball.pos.x - half.x < 0.0 {
        ball.pos.x = half.x;
        ball.vel.x = ball.vel.x.abs();
    } else if ball.pos.x + half.x > arena.x {
        ball.pos.x = arena.x - half.x;
        ball.vel.x = -ball.vel.x.abs();
    }

    if ball.pos.y - half.y < 0.0 {
        ball.pos.y = half.y;
        ball.vel.y = ball.vel.y.abs();
    } else if ball.pos.y + half.y > arena.y {
        ball.pos.y = arena.y - half.y;
        ball.vel.y = -ball.vel.y.abs();
    }
}

/// Push the ball out of an immovable box along the shallowest axis and
/// reflect the matching velocity component away from it
fn separate_from(ball: &mut Ball, solid: &Aabb) {
    let hitbox = ball_box(ball);
    let overlap = hitbox.overlap(solid);
    let away = hitbox.center() - solid.center();

    if overlap.x <= overlap.y {
        let dir = if away.x >= 0.0 { 1.0 } else { -1.0 };
        ball.pos.x += overlap.x * dir;
        ball.vel.x = ball.vel.x.abs() * dir;
    } else {
        let dir = if away.y >= 0.0 { 1.0 } else { -1.0 };
        ball.pos.y += overlap.y * dir;
        ball.vel.y = ball.vel.y.abs() * dir;
    }
}
