//! The four built-in fractals.
//!
//! | Name       | Axiom   | Rules                                  | Angle | Mode      |
//! |------------|---------|----------------------------------------|-------|-----------|
//! | `hilbert`  | `A`     | `A → +BF-AFA-FB+`, `B → -AF+BFB+FA-`   | 90°   | linear    |
//! | `dragon`   | `X`     | `X → X+Y`, `Y → X-Y`                   | 90°   | linear    |
//! | `sierpTri` | `X-Y-Y` | `X → X-Y+X+Y-X`, `Y → YY`              | 120°  | linear    |
//! | `tree`     | `X`     | `X → X[+X]X[-X][X]`                    | 25.7° | branching |
//!
//! In every built-in `X` and `Y` draw at the recursion floor while `A` and
//! `B` never draw by themselves.
//!
//! The forward step is always supplied by the caller (it depends on the
//! canvas size); the angle is fixed per fractal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LSystemError;
use crate::grammar::Grammar;

/// Branch angle of the fractal tree, in degrees.
pub const TREE_ANGLE: f64 = 25.7;

/// Which expander a grammar needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Commands streamed from a producer thread.
    Linear,
    /// Turtle driven directly, with a save/restore stack.
    Branching,
}

/// A named built-in grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fractal {
    Hilbert,
    Dragon,
    SierpinskiTriangle,
    Tree,
}

impl Fractal {
    pub const ALL: [Fractal; 4] = [
        Fractal::Hilbert,
        Fractal::Dragon,
        Fractal::SierpinskiTriangle,
        Fractal::Tree,
    ];

    /// Name used on the command line and in output file names.
    pub fn name(&self) -> &'static str {
        match self {
            Fractal::Hilbert            => "hilbert",
            Fractal::Dragon             => "dragon",
            Fractal::SierpinskiTriangle => "sierpTri",
            Fractal::Tree               => "tree",
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Fractal::Tree => Mode::Branching,
            _             => Mode::Linear,
        }
    }

    /// Turn angle in degrees.
    pub fn angle(&self) -> f64 {
        match self {
            Fractal::Hilbert | Fractal::Dragon => 90.0,
            Fractal::SierpinskiTriangle        => 120.0,
            Fractal::Tree                      => TREE_ANGLE,
        }
    }

    /// Build the grammar with forward length `step`.
    pub fn grammar(&self, step: f64) -> Grammar {
        let angle = self.angle();
        match self {
            // https://en.wikipedia.org/wiki/Hilbert_curve#Representation_as_Lindenmayer_system
            Fractal::Hilbert => Grammar::new("A", angle, step)
                .with_rule('A', "+BF-AFA-FB+")
                .with_rule('B', "-AF+BFB+FA-"),
            Fractal::Dragon => Grammar::new("X", angle, step)
                .with_rule('X', "X+Y")
                .with_rule('Y', "X-Y")
                .with_floor_symbols("XY"),
            Fractal::SierpinskiTriangle => Grammar::new("X-Y-Y", angle, step)
                .with_rule('X', "X-Y+X+Y-X")
                .with_rule('Y', "YY")
                .with_floor_symbols("XY"),
            Fractal::Tree => Grammar::new("X", angle, step)
                .with_rule('X', "X[+X]X[-X][X]")
                .with_floor_symbols("X"),
        }
    }
}

impl fmt::Display for Fractal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fractal {
    type Err = LSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fractal::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LSystemError::UnknownFractal(s.to_string()))
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
