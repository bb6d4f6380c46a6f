//! Branching expander for bracketed grammars (plants, trees).
//!
//! Same substitution rules as [`crate::expand`], plus a save/restore stack:
//!
//! - `[` pushes the turtle's [`CursorState`];
//! - `]` pops it and jumps the turtle back without drawing.
//!
//! Because `[` must capture the cursor *after* every preceding move, this
//! variant drives the [`Turtle`] synchronously instead of going through a
//! [`crate::stream::CommandStream`]. The stack lives in a [`BranchRun`]
//! that exists only for the duration of one call to [`expand_branching`].
//!
//! ## Failure modes
//!
//! | Condition                        | Error                             |
//! |----------------------------------|-----------------------------------|
//! | `]` with an empty stack          | [`LSystemError::StackUnderflow`]  |
//! | stack not empty when run ends    | [`LSystemError::UnclosedBranch`]  |
//!
//! Both abort the run: the grammar is malformed and continuing would draw
//! wrong geometry.

use crate::command::{CursorState, Turtle};
use crate::error::LSystemError;
use crate::grammar::Grammar;
use crate::walk::{Action, Walker};

// ─────────────────────────────────────────────
// Report
// ─────────────────────────────────────────────

/// Statistics returned by a successful [`expand_branching`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchReport {
    pub forwards:  u64,
    pub turns:     u64,
    pub pushes:    u64,
    pub pops:      u64,
    /// Deepest stack reached during the run.
    pub max_depth: usize,
}

// ─────────────────────────────────────────────
// Run
// ─────────────────────────────────────────────

/// Expand `grammar` to `level`, steering `turtle` as symbols are reached.
pub fn expand_branching<T>(
    grammar: &Grammar,
    level:   u32,
    turtle:  &mut T,
) -> Result<BranchReport, LSystemError>
where
    T: Turtle + ?Sized,
{
    #[cfg(feature = "tracing")]
    tracing::debug!(axiom = %grammar.axiom, level, "branching expansion started");

    let mut run = BranchRun::new(grammar, turtle);
    run.walk(level)?;
    let report = run.finish()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        forwards  = report.forwards,
        pushes    = report.pushes,
        max_depth = report.max_depth,
        "branching expansion finished"
    );

    Ok(report)
}

/// One in-progress branching expansion; owns the save/restore stack.
struct BranchRun<'a, T: Turtle + ?Sized> {
    grammar:  &'a Grammar,
    turtle:   &'a mut T,
    stack:    Vec<CursorState>,
    report:   BranchReport,
}

impl<'a, T: Turtle + ?Sized> BranchRun<'a, T> {
    fn new(grammar: &'a Grammar, turtle: &'a mut T) -> Self {
        Self {
            grammar,
            turtle,
            stack: Vec::new(),
            report: BranchReport::default(),
        }
    }

    fn walk(&mut self, level: u32) -> Result<(), LSystemError> {
        let grammar = self.grammar;
        let mut walker = Walker::new(grammar, level);
        while let Some(action) = walker.next() {
            match action {
                Action::TurnLeft => {
                    self.turtle.turn_left(grammar.angle);
                    self.report.turns += 1;
                }
                Action::TurnRight => {
                    self.turtle.turn_right(grammar.angle);
                    self.report.turns += 1;
                }
                Action::Forward => self.forward(),
                Action::Push => {
                    self.stack.push(self.turtle.state());
                    self.report.pushes += 1;
                    self.report.max_depth = self.report.max_depth.max(self.stack.len());
                }
                Action::Pop => {
                    // Index of the `]` among all symbols read, 0-based.
                    let position = walker.visited() - 1;
                    let saved = self
                        .stack
                        .pop()
                        .ok_or(LSystemError::StackUnderflow { position })?;
                    self.turtle.restore(saved);
                    self.report.pops += 1;
                }
            }
        }
        Ok(())
    }

    fn forward(&mut self) {
        self.turtle.forward(self.grammar.step);
        self.report.forwards += 1;
    }

    fn finish(self) -> Result<BranchReport, LSystemError> {
        if !self.stack.is_empty() {
            return Err(LSystemError::UnclosedBranch { depth: self.stack.len() });
        }
        Ok(self.report)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
