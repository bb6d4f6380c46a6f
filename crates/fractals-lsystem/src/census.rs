//! Exact command counts of an expansion, computed without expanding.
//!
//! Output length is exponential in the level, so walking the expansion to
//! count it is as expensive as drawing it. Instead the counts of one
//! occurrence of every growth symbol are tabulated level by level, from the
//! floor upwards:
//!
//! ```text
//! count(sym, 0)     = floor draw of sym (0 or 1 forward)
//! count(sym, k > 0) = Σ count(c, k - 1) over c in rule(sym)
//! ```
//!
//! and the axiom is summed against the row for the requested level. Each
//! rule body is compiled once into its fixed counts plus the growth symbols
//! it references, so a row costs `O(|alphabet| × |longest rule|)` and the
//! table stops early once a row repeats (every count has saturated or
//! stopped growing). Counters saturate at `u128::MAX`.

use std::collections::BTreeMap;
use std::ops::AddAssign;

use crate::grammar::{Grammar, Symbol};

/// Number of each kind of symbol action a full expansion performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub forwards:    u128,
    pub turns_left:  u128,
    pub turns_right: u128,
    /// `[` reached (only acted on by the branching expander).
    pub pushes:      u128,
    /// `]` reached.
    pub pops:        u128,
}

impl Census {
    /// Commands the linear expander emits.
    pub fn commands(&self) -> u128 {
        self.forwards
            .saturating_add(self.turns_left)
            .saturating_add(self.turns_right)
    }

    pub fn is_balanced(&self) -> bool {
        self.pushes == self.pops
    }
}

impl AddAssign for Census {
    fn add_assign(&mut self, rhs: Self) {
        self.forwards    = self.forwards.saturating_add(rhs.forwards);
        self.turns_left  = self.turns_left.saturating_add(rhs.turns_left);
        self.turns_right = self.turns_right.saturating_add(rhs.turns_right);
        self.pushes      = self.pushes.saturating_add(rhs.pushes);
        self.pops        = self.pops.saturating_add(rhs.pops);
    }
}

/// Count what expanding `grammar` to `level` would produce.
pub fn census(grammar: &Grammar, level: u32) -> Census {
    let table = GrowthTable::new(grammar);

    // row[i] = counts of one occurrence of growth symbol i at level k.
    let mut row: Vec<Census> = table.floor.clone();
    for _ in 0..level {
        let next = table.step(&row);
        if next == row {
            break;
        }
        row = next;
    }

    table.axiom.total(&row)
}

/// A body reduced to what it contributes directly and which growth symbols
/// (by index) it expands into one level down.
struct Compiled {
    fixed:  Census,
    growth: Vec<usize>,
}

impl Compiled {
    fn total(&self, row: &[Census]) -> Census {
        let mut total = self.fixed;
        for &i in &self.growth {
            total += row[i];
        }
        total
    }
}

struct GrowthTable {
    axiom: Compiled,
    /// Rule body of each growth symbol, indexed like `floor`.
    rules: Vec<Compiled>,
    /// Level-0 counts of each growth symbol.
    floor: Vec<Census>,
}

impl GrowthTable {
    fn new(grammar: &Grammar) -> Self {
        let mut index = BTreeMap::new();
        let mut floor = Vec::new();
        for symbol in grammar.rules.keys().chain(&grammar.draw_at_floor).copied() {
            if let Symbol::Growth { draws_at_floor } = grammar.classify(symbol) {
                if !index.contains_key(&symbol) {
                    index.insert(symbol, floor.len());
                    floor.push(Census {
                        forwards: u128::from(draws_at_floor),
                        ..Census::default()
                    });
                }
            }
        }

        let mut rules = Vec::with_capacity(floor.len());
        rules.resize_with(floor.len(), || Compiled { fixed: Census::default(), growth: Vec::new() });
        for (&symbol, &i) in &index {
            rules[i] = compile(grammar, grammar.rule(symbol), &index);
        }

        Self { axiom: compile(grammar, &grammar.axiom, &index), rules, floor }
    }

    fn step(&self, row: &[Census]) -> Vec<Census> {
        self.rules.iter().map(|rule| rule.total(row)).collect()
    }
}

fn compile(grammar: &Grammar, body: &str, index: &BTreeMap<char, usize>) -> Compiled {
    let mut fixed = Census::default();
    let mut growth = Vec::new();
    for symbol in body.chars() {
        match grammar.classify(symbol) {
            Symbol::TurnLeft  => fixed.turns_left  = fixed.turns_left.saturating_add(1),
            Symbol::TurnRight => fixed.turns_right = fixed.turns_right.saturating_add(1),
            Symbol::Draw      => fixed.forwards    = fixed.forwards.saturating_add(1),
            Symbol::Push      => fixed.pushes      = fixed.pushes.saturating_add(1),
            Symbol::Pop       => fixed.pops        = fixed.pops.saturating_add(1),
            Symbol::Growth { .. } => {
                if let Some(&i) = index.get(&symbol) {
                    growth.push(i);
                }
            }
            Symbol::Ignored => {}
        }
    }
    Compiled { fixed, growth }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
