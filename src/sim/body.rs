//! Shared kinematic capability for simulated entities
//!
//! `Player` and `Blimp` compose a [`Body`] rather than inheriting from a
//! common sprite type: position, velocity, and a bounding box are the only
//! things the sim needs from an entity, and the renderer reads the same
//! fields as its projection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle centered at `center` with the given half-extents
    pub fn centered(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Position, velocity, and collision extents for one entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Half-extents of the collision box (already scaled)
    pub half_extents: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, half_extents: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            half_extents,
        }
    }

    /// Current axis-aligned bounding box
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.half_extents)
    }

    /// Advance position by the current velocity
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}
