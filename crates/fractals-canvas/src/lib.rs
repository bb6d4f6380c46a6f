//! `fractals-canvas` — raster backend for L-system turtles.
//!
//! | Module     | Responsibility                                       |
//! |------------|------------------------------------------------------|
//! | [`canvas`] | [`Canvas`]: RGBA pixels, clipped line plotting, PNG  |
//! | [`turtle`] | [`TurtleDraw`]: pen + cursor implementing `Turtle`   |
//! | [`error`]  | [`CanvasError`]                                      |

pub mod canvas;
pub mod error;
pub mod turtle;

pub use canvas::{Canvas, Color, BLACK, WHITE};
pub use error::CanvasError;
pub use turtle::TurtleDraw;
