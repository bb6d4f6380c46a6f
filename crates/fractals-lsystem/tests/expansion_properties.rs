//! Integration tests for the expansion pipeline.
//!
//! These exercise the same paths the renderer uses:
//! - linear grammars streamed through `CommandStream` and replayed on a cursor
//! - the tree grammar driven through `expand_branching`
//! - `census` as the closed-form oracle for both

use fractals_lsystem::{
    census, expand_branching, expand_to_vec, Command, CommandStream, CursorState, Fractal,
    Grammar, LSystemError, Turtle,
};

// ─────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────

fn forwards(cmds: &[Command]) -> u128 {
    cmds.iter().filter(|c| c.is_forward()).count() as u128
}

/// Replay a stream on a pure cursor and return where it ends.
fn replay(grammar: Grammar, level: u32) -> CursorState {
    let mut cursor = CursorState::default();
    for cmd in CommandStream::spawn(grammar, level).unwrap() {
        cursor.apply(cmd);
    }
    cursor
}

// ─────────────────────────────────────────────────────
// Counts
// ─────────────────────────────────────────────────────

#[test]
fn forward_counts_follow_recurrences() {
    for level in 0..=4u32 {
        let hilbert = expand_to_vec(&Fractal::Hilbert.grammar(1.0), level);
        assert_eq!(forwards(&hilbert), 4u128.pow(level) - 1, "hilbert L={level}");

        let dragon = expand_to_vec(&Fractal::Dragon.grammar(1.0), level);
        assert_eq!(forwards(&dragon), 2u128.pow(level), "dragon L={level}");

        let sierp = expand_to_vec(&Fractal::SierpinskiTriangle.grammar(1.0), level);
        assert_eq!(forwards(&sierp), 3u128.pow(level + 1), "sierpTri L={level}");
    }
}

#[test]
fn census_agrees_with_streamed_output() {
    for f in [Fractal::Hilbert, Fractal::Dragon, Fractal::SierpinskiTriangle] {
        for level in 0..=5u32 {
            let streamed: Vec<Command> = CommandStream::spawn(f.grammar(1.0), level).unwrap().collect();
            let c = census(&f.grammar(1.0), level);
            assert_eq!(streamed.len() as u128, c.commands(), "{f} L={level}");
            assert_eq!(forwards(&streamed), c.forwards, "{f} L={level}");
        }
    }
}

// ─────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────

#[test]
fn repeated_runs_are_identical() {
    for f in [Fractal::Hilbert, Fractal::Dragon, Fractal::SierpinskiTriangle] {
        let a: Vec<Command> = CommandStream::spawn(f.grammar(2.5), 5).unwrap().collect();
        let b: Vec<Command> = CommandStream::spawn(f.grammar(2.5), 5).unwrap().collect();
        assert_eq!(a, b, "{f}");
    }
}

#[test]
fn branching_runs_are_identical() {
    let g = Fractal::Tree.grammar(3.0);
    let mut a = CursorState::new(10.0, 10.0, 90.0);
    let mut b = CursorState::new(10.0, 10.0, 90.0);
    let ra = expand_branching(&g, 4, &mut a).unwrap();
    let rb = expand_branching(&g, 4, &mut b).unwrap();
    assert_eq!(ra, rb);
    assert_eq!(a, b);
}

// ─────────────────────────────────────────────────────
// Geometry
// ─────────────────────────────────────────────────────

#[test]
fn sierpinski_level_zero_closes_the_triangle() {
    let end = replay(Fractal::SierpinskiTriangle.grammar(1.0), 0);
    // Three sides joined by two 120° right turns close the triangle.
    assert!((end.heading + 240.0).abs() < 1e-9, "heading {}", end.heading);
    let dist = (end.x * end.x + end.y * end.y).sqrt();
    assert!(dist < 1e-9, "distance from origin {dist}");
}

#[test]
fn hilbert_stays_on_the_grid() {
    // Every vertex of the Hilbert curve lies on an integer lattice of
    // 2^L × 2^L points.
    let level = 3;
    let side = 2f64.powi(level as i32);
    let mut cursor = CursorState::default();
    for cmd in CommandStream::spawn(Fractal::Hilbert.grammar(1.0), level).unwrap() {
        cursor.apply(cmd);
        assert!((cursor.x - cursor.x.round()).abs() < 1e-6);
        assert!((cursor.y - cursor.y.round()).abs() < 1e-6);
        assert!(cursor.x.round().abs() < side && cursor.y.round().abs() < side);
    }
}

// ─────────────────────────────────────────────────────
// Stack discipline
// ─────────────────────────────────────────────────────

#[test]
fn tree_expansion_is_balanced() {
    for level in 0..=4u32 {
        let g = Fractal::Tree.grammar(1.0);
        let mut cursor = CursorState::new(0.0, 0.0, 90.0);
        let report = expand_branching(&g, level, &mut cursor).unwrap();
        let c = census(&g, level);
        assert_eq!(report.pushes as u128, c.pushes);
        assert_eq!(report.pops, report.pushes);
        assert_eq!(report.forwards as u128, c.forwards);
    }
}

#[test]
fn lone_close_bracket_is_a_hard_failure() {
    let g = Grammar::new("X", 25.7, 1.0).with_rule('X', "]").with_floor_symbols("X");
    let mut cursor = CursorState::default();
    let err = expand_branching(&g, 1, &mut cursor).unwrap_err();
    assert!(matches!(err, LSystemError::StackUnderflow { .. }));
    assert_eq!(cursor, CursorState::default(), "cursor moved before failure");
}
