//! Image shapes and per-fractal placement on the canvas.
//!
//! The core only needs a start cursor and a step length; this module
//! derives both from the canvas size so each built-in fills the frame.
//!
//! | Fractal    | Start                                   | Heading | Step                  |
//! |------------|-----------------------------------------|---------|-----------------------|
//! | `hilbert`  | bottom-left of a padded centred square  | 0°      | `(h - pad) / (2^L - 1)` |
//! | `dragon`   | canvas centre                           | 0°      | 20                    |
//! | `sierpTri` | bottom-right of a padded triangle       | 180°    | `(h - pad) / 2^L`     |
//! | `tree`     | `(w / 2, 0.34 h)`                       | 90°     | 20                    |

use std::fmt;
use std::str::FromStr;

use fractals_lsystem::{CursorState, Fractal};

/// Margin kept around the Hilbert and Sierpinski figures, in pixels.
pub const PAD: f64 = 80.0;

/// Fixed step of the dragon curve and the tree, in pixels.
pub const FIXED_STEP: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("unknown image shape {0:?} (expected 4K or 1200)")]
    UnknownShape(String),
}

// ─────────────────────────────────────────────
// Image shape
// ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageShape {
    /// 3840 × 2160.
    FourK,
    /// 1200 × 1200.
    Square1200,
}

impl ImageShape {
    pub fn name(&self) -> &'static str {
        match self {
            ImageShape::FourK      => "4K",
            ImageShape::Square1200 => "1200",
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            ImageShape::FourK      => 1920 * 2,
            ImageShape::Square1200 => 1200,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            ImageShape::FourK      => 1080 * 2,
            ImageShape::Square1200 => 1200,
        }
    }
}

impl fmt::Display for ImageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageShape {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4K" | "4k" => Ok(ImageShape::FourK),
            "1200"      => Ok(ImageShape::Square1200),
            other       => Err(PlacementError::UnknownShape(other.to_string())),
        }
    }
}

// ─────────────────────────────────────────────
// Placement
// ─────────────────────────────────────────────

/// Where the turtle starts and how long each forward is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub start: CursorState,
    pub step:  f64,
}

impl Placement {
    pub fn for_fractal(fractal: Fractal, shape: ImageShape, level: u32) -> Self {
        let (w, h) = (shape.width() as f64, shape.height() as f64);
        let side = h - PAD;
        let hp = PAD / 2.0;

        match fractal {
            Fractal::Hilbert => Self {
                start: CursorState::new((w - h) / 2.0 + hp, hp, 0.0),
                step:  side / hilbert_segments_per_side(level),
            },
            Fractal::Dragon => Self {
                start: CursorState::new(w / 2.0, h / 2.0, 0.0),
                step:  FIXED_STEP,
            },
            Fractal::SierpinskiTriangle => Self {
                start: CursorState::new(
                    (w - h) / 2.0 + hp + side,
                    (h - side * (std::f64::consts::PI / 3.0).sin()) / 2.0,
                    180.0,
                ),
                step: side / pow2(level),
            },
            Fractal::Tree => Self {
                start: CursorState::new(w / 2.0, 0.34 * h, 90.0),
                step:  FIXED_STEP,
            },
        }
    }

    /// Centre of the canvas, for user grammars with no known geometry.
    pub fn centered(shape: ImageShape, heading: f64, step: f64) -> Self {
        Self {
            start: CursorState::new(shape.width() as f64 / 2.0, shape.height() as f64 / 2.0, heading),
            step,
        }
    }
}

/// A level-`L` Hilbert curve spans `2^L - 1` segments per side; level 0
/// draws nothing, so any step works there.
fn hilbert_segments_per_side(level: u32) -> f64 {
    (pow2(level) - 1.0).max(1.0)
}

/// `2^level`, saturating to infinity instead of wrapping the exponent.
fn pow2(level: u32) -> f64 {
    2f64.powi(level.min(i32::MAX as u32) as i32)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_parse() {
        assert_eq!("4K".parse::<ImageShape>().unwrap(), ImageShape::FourK);
        assert_eq!("1200".parse::<ImageShape>().unwrap(), ImageShape::Square1200);
        assert_eq!(
            "8K".parse::<ImageShape>(),
            Err(PlacementError::UnknownShape("8K".into()))
        );
        assert_eq!((ImageShape::FourK.width(), ImageShape::FourK.height()), (3840, 2160));
    }

    #[test]
    fn hilbert_fills_padded_square() {
        let p = Placement::for_fractal(Fractal::Hilbert, ImageShape::Square1200, 4);
        assert_eq!(p.start, CursorState::new(40.0, 40.0, 0.0));
        assert!((p.step * 15.0 - 1120.0).abs() < 1e-9);
    }

    #[test]
    fn hilbert_level_zero_step_is_finite() {
        let p = Placement::for_fractal(Fractal::Hilbert, ImageShape::FourK, 0);
        assert!(p.step.is_finite() && p.step > 0.0);
    }

    #[test]
    fn sierpinski_side_is_constant_across_levels() {
        for level in 0..8 {
            let p = Placement::for_fractal(Fractal::SierpinskiTriangle, ImageShape::FourK, level);
            assert!((p.step * 2f64.powi(level as i32) - 2080.0).abs() < 1e-9);
            assert_eq!(p.start.heading, 180.0);
        }
    }

    #[test]
    fn levels_past_i32_max_do_not_wrap() {
        for fractal in [Fractal::Hilbert, Fractal::SierpinskiTriangle] {
            let p = Placement::for_fractal(fractal, ImageShape::FourK, u32::MAX);
            assert_eq!(p.step, 0.0, "{fractal}");
        }
        assert_eq!(pow2(u32::MAX), f64::INFINITY);
        assert_eq!(pow2(10), 1024.0);
    }

    #[test]
    fn tree_starts_upright() {
        let p = Placement::for_fractal(Fractal::Tree, ImageShape::FourK, 5);
        assert_eq!(p.start, CursorState::new(1920.0, 0.34 * 2160.0, 90.0));
        assert_eq!(p.step, FIXED_STEP);
    }
}
