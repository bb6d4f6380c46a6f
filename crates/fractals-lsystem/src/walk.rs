//! Depth-first walk over an expansion, one terminal action at a time.
//!
//! Both expanders read the expansion through a [`Walker`]. Each frame on
//! its explicit stack is a cursor into one borrowed rule body plus the
//! level that body sits at. A growth symbol met while `level > 0` pushes
//! the frame of its rule body at `level - 1`; an exhausted frame is popped
//! and the walk resumes in the frame below.
//!
//! The stack lives on the heap, so deep levels never exhaust the thread
//! stack. When a growth symbol is the last one of its body the parent frame
//! is dropped before the child is pushed, so right-recursive rules such as
//! `X → FX` run in constant memory.

use std::str::Chars;

use crate::grammar::{Grammar, Symbol};

/// A symbol that acts on the turtle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    TurnLeft,
    TurnRight,
    Forward,
    Push,
    Pop,
}

pub(crate) struct Walker<'g> {
    grammar: &'g Grammar,
    frames:  Vec<(Chars<'g>, u32)>,
    /// Symbols read so far, across all levels.
    visited: u64,
}

impl<'g> Walker<'g> {
    pub(crate) fn new(grammar: &'g Grammar, level: u32) -> Self {
        Self {
            grammar,
            frames: vec![(grammar.axiom.chars(), level)],
            visited: 0,
        }
    }

    /// Number of symbols read, including growth and ignored ones.
    pub(crate) fn visited(&self) -> u64 {
        self.visited
    }
}

impl Iterator for Walker<'_> {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        let grammar = self.grammar;
        while let Some(frame) = self.frames.last_mut() {
            let level = frame.1;
            let Some(symbol) = frame.0.next() else {
                self.frames.pop();
                continue;
            };
            self.visited += 1;

            match grammar.classify(symbol) {
                Symbol::TurnLeft  => return Some(Action::TurnLeft),
                Symbol::TurnRight => return Some(Action::TurnRight),
                Symbol::Draw      => return Some(Action::Forward),
                Symbol::Push      => return Some(Action::Push),
                Symbol::Pop       => return Some(Action::Pop),
                Symbol::Growth { draws_at_floor } => {
                    if level > 0 {
                        let tail_call = frame.0.as_str().is_empty();
                        if tail_call {
                            self.frames.pop();
                        }
                        let body = grammar.rule(symbol);
                        if !body.is_empty() {
                            self.frames.push((body.chars(), level - 1));
                        }
                    } else if draws_at_floor {
                        return Some(Action::Forward);
                    }
                }
                Symbol::Ignored => {}
            }
        }
        None
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
