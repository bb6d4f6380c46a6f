//! Context-free L-system grammar.
//!
//! A [`Grammar`] is read-only for the lifetime of an expansion. It is
//! built once per fractal selection (see [`crate::builtin`]) or loaded
//! from JSON.
//!
//! ## Alphabet
//!
//! | Symbol          | Class                                                     |
//! |-----------------|-----------------------------------------------------------|
//! | `+`             | turn left by `angle`                                      |
//! | `-`             | turn right by `angle`                                     |
//! | `F`             | forward by `step`, at every level                         |
//! | `[` / `]`       | save / restore cursor (branching expander only)           |
//! | key of `rules`  | growth symbol: substituted while level > 0                |
//! | `draw_at_floor` | growth symbol that also draws forward at level 0          |
//! | anything else   | ignored                                                   |
//!
//! The five reserved characters keep their meaning even if a rule is
//! declared for them.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::LSystemError;

// ─────────────────────────────────────────────
// Symbol classes
// ─────────────────────────────────────────────

/// How the expanders treat one character of a rule body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    TurnLeft,
    TurnRight,
    Draw,
    Push,
    Pop,
    /// Substituted while level > 0; at level 0 it draws forward only if
    /// `draws_at_floor`.
    Growth { draws_at_floor: bool },
    Ignored,
}

// ─────────────────────────────────────────────
// Grammar
// ─────────────────────────────────────────────

/// Axiom, production rules, turn angle and forward step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    /// Starting string.
    pub axiom: String,
    /// Symbol → replacement body.
    #[serde(default)]
    pub rules: BTreeMap<char, String>,
    /// Degrees per `+` / `-`.
    pub angle: f64,
    /// Length per forward.
    pub step:  f64,
    /// Growth symbols that draw one segment at the recursion floor.
    #[serde(default)]
    pub draw_at_floor: BTreeSet<char>,
}

impl Grammar {
    pub fn new(axiom: impl Into<String>, angle: f64, step: f64) -> Self {
        Self {
            axiom: axiom.into(),
            rules: BTreeMap::new(),
            angle,
            step,
            draw_at_floor: BTreeSet::new(),
        }
    }

    /// Add (or replace) the production `symbol → body`.
    pub fn with_rule(mut self, symbol: char, body: impl Into<String>) -> Self {
        self.rules.insert(symbol, body.into());
        self
    }

    /// Mark every char of `symbols` as draw-at-floor.
    pub fn with_floor_symbols(mut self, symbols: &str) -> Self {
        self.draw_at_floor.extend(symbols.chars());
        self
    }

    /// Body substituted for `symbol`; empty if the grammar has no rule.
    pub fn rule(&self, symbol: char) -> &str {
        self.rules.get(&symbol).map(String::as_str).unwrap_or("")
    }

    pub fn classify(&self, symbol: char) -> Symbol {
        match symbol {
            '+' => Symbol::TurnLeft,
            '-' => Symbol::TurnRight,
            'F' => Symbol::Draw,
            '[' => Symbol::Push,
            ']' => Symbol::Pop,
            c if self.draw_at_floor.contains(&c) => Symbol::Growth { draws_at_floor: true },
            c if self.rules.contains_key(&c) => Symbol::Growth { draws_at_floor: false },
            _ => Symbol::Ignored,
        }
    }

    /// Reject grammars the expanders cannot meaningfully run.
    pub fn validate(&self) -> Result<(), LSystemError> {
        if self.axiom.is_empty() {
            return Err(LSystemError::InvalidGrammar("axiom is empty".into()));
        }
        if !(self.angle.is_finite() && self.angle > 0.0) {
            return Err(LSystemError::InvalidGrammar(format!(
                "angle must be a positive number of degrees, got {}",
                self.angle
            )));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(LSystemError::InvalidGrammar(format!(
                "step must be a positive length, got {}",
                self.step
            )));
        }
        Ok(())
    }

    /// `true` if any rule body or the axiom contains `[` or `]`.
    pub fn has_branches(&self) -> bool {
        std::iter::once(self.axiom.as_str())
            .chain(self.rules.values().map(String::as_str))
            .any(|s| s.contains(|c: char| c == '[' || c == ']'))
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
