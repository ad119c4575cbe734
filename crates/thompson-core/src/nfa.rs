//! Default automaton representation.
//!
//! States live in an insertion-ordered map keyed by `StateId`. Each state
//! owns its outgoing transitions, grouped by label, so merging two automata
//! moves whole states without touching their neighbors.

use indexmap::{IndexMap, IndexSet};

use crate::{AutomatonBuilder, StateId, Symbol};

/// A single state: final flag plus outgoing transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NfaState {
    is_final: bool,
    transitions: IndexMap<Symbol, IndexSet<StateId>>,
}

impl NfaState {
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Targets reachable on `symbol`.
    pub fn targets(&self, symbol: Symbol) -> impl Iterator<Item = StateId> + '_ {
        self.transitions.get(&symbol).into_iter().flatten().copied()
    }

    /// All outgoing transitions as `(label, target)` pairs.
    pub fn transitions(&self) -> impl Iterator<Item = (Symbol, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(symbol, targets)| targets.iter().map(move |to| (*symbol, *to)))
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(IndexSet::len).sum()
    }

    fn absorb(&mut self, other: NfaState) {
        self.is_final |= other.is_final;
        for (symbol, targets) in other.transitions {
            self.transitions.entry(symbol).or_default().extend(targets);
        }
    }
}

/// Nondeterministic finite automaton with epsilon transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nfa {
    states: IndexMap<StateId, NfaState>,
    start: Option<StateId>,
    alphabet: IndexSet<char>,
}

impl Nfa {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.states.values().map(NfaState::transition_count).sum()
    }

    pub fn start_state(&self) -> Option<StateId> {
        self.start
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.states.get(&state).is_some_and(NfaState::is_final)
    }

    /// Final states in ascending id order.
    pub fn final_states(&self) -> Vec<StateId> {
        let mut finals: Vec<StateId> = self
            .states
            .iter()
            .filter(|(_, state)| state.is_final)
            .map(|(id, _)| *id)
            .collect();
        finals.sort_unstable();
        finals
    }

    /// Non-epsilon symbols, in the order they were first added.
    pub fn alphabet(&self) -> &IndexSet<char> {
        &self.alphabet
    }

    pub fn state(&self, id: StateId) -> Option<&NfaState> {
        self.states.get(&id)
    }

    /// Iterate over all states in insertion order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &NfaState)> {
        self.states.iter().map(|(id, state)| (*id, state))
    }

    /// Transition lookup by `(state, symbol)`.
    pub fn transitions(&self, state: StateId, symbol: Symbol) -> impl Iterator<Item = StateId> + '_ {
        self.states
            .get(&state)
            .into_iter()
            .flat_map(move |s| s.targets(symbol))
    }

    /// Render as text. See [`NfaPrinter`](crate::NfaPrinter).
    pub fn dump(&self) -> String {
        crate::NfaPrinter::new(self).dump()
    }

    fn ensure_state(&mut self, id: StateId) -> &mut NfaState {
        self.states.entry(id).or_default()
    }
}

impl AutomatonBuilder for Nfa {
    fn empty() -> Self {
        Self::new()
    }

    fn add_start_state(&mut self, state: StateId) {
        self.ensure_state(state);
        self.start = Some(state);
    }

    fn add_final_state(&mut self, state: StateId) {
        self.ensure_state(state).is_final = true;
    }

    fn set_non_final(&mut self, state: StateId) {
        if let Some(s) = self.states.get_mut(&state) {
            s.is_final = false;
        }
    }

    fn add_transition(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        self.ensure_state(to);
        self.ensure_state(from)
            .transitions
            .entry(symbol)
            .or_default()
            .insert(to);
    }

    fn merge_states(&mut self, other: Self) {
        for (id, state) in other.states {
            match self.states.entry(id) {
                indexmap::map::Entry::Vacant(slot) => {
                    slot.insert(state);
                }
                indexmap::map::Entry::Occupied(mut slot) => slot.get_mut().absorb(state),
            }
        }
    }

    fn add_alphabet<I: IntoIterator<Item = char>>(&mut self, symbols: I) {
        self.alphabet.extend(symbols);
    }

    fn is_empty(&self) -> bool {
        Nfa::is_empty(self)
    }

    fn start_state(&self) -> Option<StateId> {
        self.start
    }

    fn final_states(&self) -> Vec<StateId> {
        Nfa::final_states(self)
    }

    fn alphabet(&self) -> Vec<char> {
        self.alphabet.iter().copied().collect()
    }
}
