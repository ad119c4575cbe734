//! Fragment constructors and combinators.
//!
//! A fragment is an automaton with one start state and a nonempty set of
//! final states. Combinators take their inputs by value and return the
//! combined fragment; the inputs are gone afterwards.

use log::trace;
use thompson_core::{AutomatonBuilder, Symbol};

use super::CompileCtx;

impl CompileCtx {
    /// Two fresh states joined by `c`.
    pub fn symbol<B: AutomatonBuilder>(&mut self, c: char) -> B {
        let start = self.fresh_state();
        let accept = self.fresh_state();

        let mut nfa = B::empty();
        nfa.add_start_state(start);
        nfa.add_final_state(accept);
        nfa.add_transition(start, Symbol::Char(c), accept);
        nfa.add_alphabet([c]);
        nfa
    }

    /// One fresh state that is both start and final. Matches only the empty
    /// string.
    pub fn epsilon<B: AutomatonBuilder>(&mut self) -> B {
        let state = self.fresh_state();

        let mut nfa = B::empty();
        nfa.add_start_state(state);
        nfa.add_final_state(state);
        nfa
    }

    /// Zero or more repetitions of `base`.
    ///
    /// ```text
    ///            ┌────── ε ──────┐
    ///            ↓               │
    /// start ─ε─→ base ─ε─→ accept ┘
    ///   │                  ↑
    ///   └─────── ε ────────┘
    /// ```
    ///
    /// `accept` is the only final state of the result.
    pub fn star<B: AutomatonBuilder>(&mut self, base: B) -> B {
        debug_assert!(!base.is_empty(), "star over the empty placeholder");

        let start = self.fresh_state();
        let accept = self.fresh_state();
        let base_start = base.start_state();
        let base_finals = base.final_states();
        let alphabet = base.alphabet();

        let mut nfa = B::empty();
        nfa.add_start_state(start);
        nfa.add_final_state(accept);
        nfa.merge_states(base);

        nfa.add_transition(start, Symbol::Epsilon, accept);
        if let Some(base_start) = base_start {
            nfa.add_transition(accept, Symbol::Epsilon, base_start);
            nfa.add_transition(start, Symbol::Epsilon, base_start);
        }
        nfa.add_alphabet(alphabet);

        for state in base_finals {
            nfa.add_transition(state, Symbol::Epsilon, accept);
            nfa.set_non_final(state);
        }

        trace!("star: {start} → {accept}");
        nfa
    }

    /// Either `left` or `right`.
    ///
    /// A fresh start state branches by epsilon into both operands. Final
    /// states of both operands stay final.
    pub fn union<B: AutomatonBuilder>(&mut self, left: B, right: B) -> B {
        debug_assert!(!left.is_empty() && !right.is_empty(), "empty alternative");

        let start = self.fresh_state();
        let entries = [left.start_state(), right.start_state()];
        let mut alphabet = left.alphabet();
        alphabet.extend(right.alphabet());

        let mut nfa = B::empty();
        nfa.add_start_state(start);
        nfa.merge_states(left);
        nfa.merge_states(right);

        for entry in entries.into_iter().flatten() {
            nfa.add_transition(start, Symbol::Epsilon, entry);
        }
        nfa.add_alphabet(alphabet);

        trace!("union: {start}");
        nfa
    }
}

/// `left` followed by `right`.
///
/// The empty placeholder is the identity on the left. Otherwise every final
/// state of `left` is demoted and linked by epsilon to the start of `right`,
/// so the result's final states are exactly those of `right`.
pub fn connect<B: AutomatonBuilder>(mut left: B, right: B) -> B {
    if left.is_empty() {
        return right;
    }

    let left_finals = left.final_states();
    let right_start = right.start_state();
    let alphabet = right.alphabet();

    left.merge_states(right);
    for state in left_finals {
        left.set_non_final(state);
        if let Some(right_start) = right_start {
            left.add_transition(state, Symbol::Epsilon, right_start);
        }
    }
    left.add_alphabet(alphabet);

    trace!("connect: {:?} → {:?}", left.start_state(), right_start);
    left
}
