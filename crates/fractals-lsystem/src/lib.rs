//! `fractals-lsystem` — L-system expansion engine for turtle-graphics fractals.
//!
//! ## Crate structure
//!
//! | Module      | Responsibility                                              |
//! |-------------|-------------------------------------------------------------|
//! | [`grammar`] | [`Grammar`] (axiom, rules, angle, step) + symbol classes    |
//! | [`command`] | [`Command`], [`CursorState`], the [`Turtle`] trait          |
//! | [`expand`]  | Linear expander: grammar → ordered commands                 |
//! | [`stream`]  | [`CommandStream`]: rendezvous hand-off to a renderer        |
//! | [`branch`]  | Branching expander with the `[` / `]` save/restore stack    |
//! | [`builtin`] | [`Fractal`]: Hilbert, Dragon, Sierpinski triangle, tree     |
//! | [`census`]  | Exact output counts without expanding                       |
//!
//! ## Quick start
//!
//! ```rust
//! use fractals_lsystem::{CommandStream, CursorState, Fractal, Turtle};
//!
//! let grammar = Fractal::Dragon.grammar(10.0);
//! let mut cursor = CursorState::default();
//! let mut stream = CommandStream::spawn(grammar, 4)?;
//! for cmd in &mut stream {
//!     cursor.apply(cmd);
//! }
//! stream.finish()?;
//!
//! let mut tree_cursor = CursorState::new(0.0, 0.0, 90.0);
//! let report = fractals_lsystem::expand_branching(&Fractal::Tree.grammar(5.0), 3, &mut tree_cursor)?;
//! assert_eq!(report.pushes, report.pops);
//! # Ok::<(), fractals_lsystem::LSystemError>(())
//! ```

pub mod branch;
pub mod builtin;
pub mod census;
pub mod command;
pub mod error;
pub mod expand;
pub mod grammar;
pub mod stream;
mod walk;

// ── Grammar ───────────────────────────────────────────────────────────────────
pub use grammar::{Grammar, Symbol};

// ── Commands / cursor ─────────────────────────────────────────────────────────
pub use command::{Command, CursorState, Turtle};

// ── Expanders ─────────────────────────────────────────────────────────────────
pub use branch::{expand_branching, BranchReport};
pub use expand::{expand, expand_to_vec};
pub use stream::CommandStream;

// ── Built-ins / census ────────────────────────────────────────────────────────
pub use builtin::{Fractal, Mode, TREE_ANGLE};
pub use census::{census, Census};

pub use error::LSystemError;
