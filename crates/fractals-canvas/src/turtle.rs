//! [`TurtleDraw`] — a pen-carrying cursor that plots onto a [`Canvas`].
//!
//! Implements [`fractals_lsystem::Turtle`], so it can be fed from a
//! `CommandStream` (linear grammars) or handed to `expand_branching`
//! (bracketed grammars). Headings accumulate unbounded and are normalized
//! only for trigonometry.

use fractals_lsystem::{CursorState, Turtle};

use crate::canvas::{Canvas, Color, WHITE};

pub struct TurtleDraw<'c> {
    canvas:   &'c mut Canvas,
    cursor:   CursorState,
    pen_down: bool,
    color:    Color,
    segments: u64,
}

impl<'c> TurtleDraw<'c> {
    /// Turtle at the origin heading east, pen down, white ink.
    pub fn new(canvas: &'c mut Canvas) -> Self {
        Self {
            canvas,
            cursor: CursorState::default(),
            pen_down: true,
            color: WHITE,
            segments: 0,
        }
    }

    pub fn set_pos(&mut self, x: f64, y: f64) {
        self.cursor.x = x;
        self.cursor.y = y;
    }

    pub fn set_heading(&mut self, degrees: f64) {
        self.cursor.heading = degrees;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    /// Segments actually plotted (forwards with the pen down).
    pub fn segments(&self) -> u64 {
        self.segments
    }
}

impl Turtle for TurtleDraw<'_> {
    fn forward(&mut self, length: f64) {
        let from = (self.cursor.x, self.cursor.y);
        let to = self.cursor.advanced(length);
        if self.pen_down {
            self.canvas.draw_line(from, to, self.color);
            self.segments += 1;
        }
        self.cursor.x = to.0;
        self.cursor.y = to.1;
    }

    fn turn_left(&mut self, degrees: f64) {
        self.cursor.heading += degrees;
    }

    fn turn_right(&mut self, degrees: f64) {
        self.cursor.heading -= degrees;
    }

    fn state(&self) -> CursorState {
        self.cursor
    }

    fn restore(&mut self, state: CursorState) {
        self.cursor = state;
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
