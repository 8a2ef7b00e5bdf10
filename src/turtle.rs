//! Turtle state and operations for planar interpretation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Screen convention: heading `0` points along `+X`, and positive turns rotate towards `+Y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    /// Current position of the "pen".
    pub position: Vec2,

    /// Current heading in radians.
    pub heading: f32,
}

impl Cursor {
    /// Returns the unit vector the turtle is facing.
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// Moves the turtle `distance` units along its heading.
    pub fn advance(&mut self, distance: f32) {
        self.position += self.forward() * distance;
    }

    /// Adds `angle` radians to the heading.
    pub fn turn(&mut self, angle: f32) {
        self.heading += angle;
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Move forward and emit the new position (`F`).
    Draw,
    /// Move forward without emitting a point (`f`).
    Move,
    /// Turn by the configured angle times the sign. `+` is `Turn(-1.0)`, `-` is `Turn(1.0)`.
    Turn(f32),
    /// Save the cursor onto the stack (`[`).
    Push,
    /// Restore the most recently pushed cursor and emit its position (`]`).
    Pop,
    /// No-op. Symbol has no registered meaning.
    Ignore,
}
