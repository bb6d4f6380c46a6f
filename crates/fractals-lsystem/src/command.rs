//! Drawing commands and the cursor ([`Turtle`]) they act upon.
//!
//! A [`Command`] is the only thing the linear expander hands to a renderer.
//! The branching expander skips commands and drives a [`Turtle`] directly,
//! because `[` / `]` must observe the cursor in between two moves.
//!
//! ## Conventions
//!
//! | Quantity | Unit    | Direction                                     |
//! |----------|---------|-----------------------------------------------|
//! | heading  | degrees | `0` = +x, counter-clockwise positive, unbounded |
//! | position | world   | `y` grows upward                              |

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Command
// ─────────────────────────────────────────────

/// A single turtle instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Move forward by `length`, drawing if the pen is down.
    Forward(f64),
    /// Rotate counter-clockwise by `degrees`.
    TurnLeft(f64),
    /// Rotate clockwise by `degrees`.
    TurnRight(f64),
}

impl Command {
    pub fn is_forward(&self) -> bool {
        matches!(self, Command::Forward(_))
    }
}

// ─────────────────────────────────────────────
// Cursor
// ─────────────────────────────────────────────

/// Snapshot of a cursor: position and heading.
///
/// Pushed on `[` and restored on `]` by the branching expander.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorState {
    pub x:       f64,
    pub y:       f64,
    /// Degrees, not normalized.
    pub heading: f64,
}

impl CursorState {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    /// Position reached by walking `length` along the current heading.
    pub fn advanced(&self, length: f64) -> (f64, f64) {
        let rad = self.heading.rem_euclid(360.0).to_radians();
        (self.x + length * rad.cos(), self.y + length * rad.sin())
    }
}

/// Anything that can be steered by drawing commands.
///
/// Implemented by the raster turtle in `fractals-canvas` and by
/// [`CursorState`] itself (pure geometry, nothing drawn), so that
/// branching runs can be checked without a canvas.
pub trait Turtle {
    fn forward(&mut self, length: f64);
    fn turn_left(&mut self, degrees: f64);
    fn turn_right(&mut self, degrees: f64);

    /// Current position and heading.
    fn state(&self) -> CursorState;

    /// Jump to `state` without drawing.
    fn restore(&mut self, state: CursorState);

    fn apply(&mut self, command: Command) {
        match command {
            Command::Forward(length)   => self.forward(length),
            Command::TurnLeft(degrees)  => self.turn_left(degrees),
            Command::TurnRight(degrees) => self.turn_right(degrees),
        }
    }
}

impl Turtle for CursorState {
    fn forward(&mut self, length: f64) {
        let (x, y) = self.advanced(length);
        self.x = x;
        self.y = y;
    }

    fn turn_left(&mut self, degrees: f64) {
        self.heading += degrees;
    }

    fn turn_right(&mut self, degrees: f64) {
        self.heading -= degrees;
    }

    fn state(&self) -> CursorState {
        *self
    }

    fn restore(&mut self, state: CursorState) {
        *self = state;
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
