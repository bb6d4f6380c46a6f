//! `fractals-cli` — command-line shell around `fractals-lsystem`.
//!
//! | Module        | Responsibility                                        |
//! |---------------|-------------------------------------------------------|
//! | [`config`]    | [`Config`] from `FRACTALS_*` environment variables     |
//! | [`placement`] | [`ImageShape`], per-fractal start cursor + step       |
//! | [`render`]    | [`render::render`]: census → draw → PNG                |

pub mod config;
pub mod placement;
pub mod render;

pub use config::Config;
pub use placement::{ImageShape, Placement, PlacementError};
pub use render::{load_grammar, render, GrammarSource, RenderOutcome, RenderRequest};
