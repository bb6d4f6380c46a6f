//! Linear expander: grammar + level → ordered [`Command`] sequence.
//!
//! ## Algorithm
//!
//! The axiom is walked left to right. A growth symbol met while
//! `level > 0` is replaced by its rule body, which is walked to the end at
//! `level - 1` before the outer walk resumes on the next symbol. Rule bodies
//! are borrowed from the grammar and the walk keeps its position in each
//! body on a heap stack (see the `walk` module), so no intermediate string is ever
//! built and memory stays `O(level)` regardless of output length.
//!
//! Commands are handed to a sink one at a time. The sink returns
//! [`ControlFlow::Break`] to stop the walk (e.g. the consumer of a
//! [`crate::stream::CommandStream`] went away).
//!
//! `[` and `]` carry no meaning here and are skipped like any other
//! unknown symbol; use [`crate::branch`] for bracketed grammars.

use std::ops::ControlFlow;

use crate::command::Command;
use crate::grammar::Grammar;
use crate::walk::{Action, Walker};

/// Expand `grammar` to `level`, feeding every command to `emit` in order.
///
/// Returns `Continue` when the whole expansion was produced, `Break` when
/// the sink stopped it early.
pub fn expand<F>(grammar: &Grammar, level: u32, mut emit: F) -> ControlFlow<()>
where
    F: FnMut(Command) -> ControlFlow<()>,
{
    #[cfg(feature = "tracing")]
    tracing::debug!(axiom = %grammar.axiom, level, "linear expansion started");

    let flow = walk(grammar, level, &mut emit);

    #[cfg(feature = "tracing")]
    tracing::debug!(level, completed = flow.is_continue(), "linear expansion finished");

    flow
}

/// Collect the full expansion. Only sensible for small levels.
pub fn expand_to_vec(grammar: &Grammar, level: u32) -> Vec<Command> {
    let mut out = Vec::new();
    let _ = expand(grammar, level, |cmd| {
        out.push(cmd);
        ControlFlow::Continue(())
    });
    out
}

fn walk<F>(grammar: &Grammar, level: u32, emit: &mut F) -> ControlFlow<()>
where
    F: FnMut(Command) -> ControlFlow<()>,
{
    for action in Walker::new(grammar, level) {
        match action {
            Action::TurnLeft  => emit(Command::TurnLeft(grammar.angle))?,
            Action::TurnRight => emit(Command::TurnRight(grammar.angle))?,
            Action::Forward   => emit(Command::Forward(grammar.step))?,
            Action::Push | Action::Pop => {}
        }
    }
    ControlFlow::Continue(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use Command::{Forward as Fw, TurnLeft as L, TurnRight as R};

    fn dragon() -> Grammar {
        Grammar::new("X", 90.0, 5.0)
            .with_rule('X', "X+Y")
            .with_rule('Y', "X-Y")
            .with_floor_symbols("XY")
    }

    fn hilbert() -> Grammar {
        Grammar::new("A", 90.0, 5.0)
            .with_rule('A', "+BF-AFA-FB+")
            .with_rule('B', "-AF+BFB+FA-")
    }

    #[test]
    fn dragon_level_zero_is_one_segment() {
        assert_eq!(expand_to_vec(&dragon(), 0), vec![Fw(5.0)]);
    }

    #[test]
    fn dragon_level_two() {
        // X+Y → (X+Y)+(X-Y)
        assert_eq!(
            expand_to_vec(&dragon(), 2),
            vec![Fw(5.0), L(90.0), Fw(5.0), L(90.0), Fw(5.0), R(90.0), Fw(5.0)]
        );
    }

    #[test]
    fn hilbert_level_zero_draws_nothing() {
        assert!(expand_to_vec(&hilbert(), 0).is_empty());
    }

    #[test]
    fn hilbert_level_one_follows_rule_body() {
        // +BF-AFA-FB+ with A/B silent at the floor.
        assert_eq!(
            expand_to_vec(&hilbert(), 1),
            vec![L(90.0), Fw(5.0), R(90.0), Fw(5.0), R(90.0), Fw(5.0), L(90.0)]
        );
    }

    #[test]
    fn unknown_symbols_and_brackets_are_skipped() {
        let g = Grammar::new("F?|[F]#+", 45.0, 1.0);
        assert_eq!(expand_to_vec(&g, 3), vec![Fw(1.0), Fw(1.0), L(45.0)]);
    }

    #[test]
    fn growth_symbol_without_rule_expands_to_nothing() {
        let g = Grammar::new("XFX", 90.0, 1.0).with_floor_symbols("X");
        assert_eq!(expand_to_vec(&g, 0), vec![Fw(1.0), Fw(1.0), Fw(1.0)]);
        assert_eq!(expand_to_vec(&g, 1), vec![Fw(1.0)]);
    }

    #[test]
    fn same_input_same_output() {
        let a = expand_to_vec(&hilbert(), 4);
        let b = expand_to_vec(&hilbert(), 4);
        assert_eq!(a, b);
        assert_eq!(a.iter().filter(|c| c.is_forward()).count(), 255);
    }

    #[test]
    fn sink_break_stops_expansion() {
        let mut seen = 0;
        let flow = expand(&dragon(), 10, |_| {
            seen += 1;
            if seen == 7 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
        });
        assert!(flow.is_break());
        assert_eq!(seen, 7);
    }

    #[test]
    fn linear_growth_reaches_a_million_levels() {
        let g = Grammar::new("X", 90.0, 1.0)
            .with_rule('X', "FX")
            .with_floor_symbols("X");
        let mut forwards = 0u64;
        let flow = expand(&g, 1_000_000, |cmd| {
            assert!(cmd.is_forward());
            forwards += 1;
            ControlFlow::Continue(())
        });
        assert!(flow.is_continue());
        assert_eq!(forwards, 1_000_001);
    }

    #[test]
    fn left_recursive_rule_reaches_a_million_levels() {
        let g = Grammar::new("X", 90.0, 1.0)
            .with_rule('X', "X+F")
            .with_floor_symbols("X");
        let mut counts = (0u64, 0u64);
        let _ = expand(&g, 1_000_000, |cmd| {
            match cmd {
                Command::Forward(_) => counts.0 += 1,
                _ => counts.1 += 1,
            }
            ControlFlow::Continue(())
        });
        assert_eq!(counts, (1_000_001, 1_000_000));
    }

    #[test]
    fn completed_expansion_reports_continue() {
        let flow = expand(&dragon(), 3, |_| ControlFlow::Continue(()));
        assert!(flow.is_continue());
    }
}
