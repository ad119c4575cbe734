//! Acceptance by set simulation over epsilon closures.

use indexmap::IndexSet;

use crate::{Nfa, StateId, Symbol};

impl Nfa {
    /// All states reachable from `states` through epsilon transitions alone,
    /// including `states` themselves.
    pub fn epsilon_closure<I>(&self, states: I) -> IndexSet<StateId>
    where
        I: IntoIterator<Item = StateId>,
    {
        let mut closure = IndexSet::new();
        let mut stack = Vec::new();
        for state in states {
            if closure.insert(state) {
                stack.push(state);
            }
        }
        while let Some(state) = stack.pop() {
            for next in self.transitions(state, Symbol::Epsilon) {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }
        closure
    }

    /// Consume `c` from every state in `current`, then close over epsilon.
    pub fn step(&self, current: &IndexSet<StateId>, c: char) -> IndexSet<StateId> {
        let moved = current
            .iter()
            .flat_map(|&state| self.transitions(state, Symbol::Char(c)));
        self.epsilon_closure(moved)
    }

    /// True when some path from the start state spells `input` and ends in a
    /// final state.
    pub fn accepts(&self, input: &str) -> bool {
        let Some(start) = self.start_state() else {
            return false;
        };

        let mut current = self.epsilon_closure([start]);
        for c in input.chars() {
            if !self.alphabet().contains(&c) {
                return false;
            }
            current = self.step(&current, c);
            if current.is_empty() {
                return false;
            }
        }

        current.iter().any(|&state| self.is_final(state))
    }
}
