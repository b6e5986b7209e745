//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space (pixels). Origin is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// 2D velocity in arena space (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frame counter (increments by 1 each tick).
    pub tick: u64,
    /// Accumulated frame time in seconds.
    pub elapsed_secs: f64,
    /// Number of fixed-interval timer firings handled.
    pub intervals: u64,
}

/// Axis-aligned arena rectangle, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.as_vec2().distance(other.as_vec2())
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` along the heading `angle` (radians from +x).
    pub fn from_angle(angle: f32, speed: f32) -> Self {
        (Vec2::from_angle(angle) * speed).into()
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f32 {
        self.as_vec2().length()
    }
}

impl From<Vec2> for Velocity {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether `pos` lies inside the rectangle grown by `margin` on every side.
    pub fn contains(&self, pos: &Position, margin: f32) -> bool {
        pos.x >= -margin
            && pos.x <= self.width + margin
            && pos.y >= -margin
            && pos.y <= self.height + margin
    }

    /// Clamp a position into the rectangle.
    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(pos.x.clamp(0.0, self.width), pos.y.clamp(0.0, self.height))
    }

    /// The four corners, clockwise from the origin.
    pub fn corners(&self) -> [Position; 4] {
        [
            Position::new(0.0, 0.0),
            Position::new(self.width, 0.0),
            Position::new(self.width, self.height),
            Position::new(0.0, self.height),
        ]
    }
}
