//! The automaton-building interface consumed by the regex compiler.

use crate::{StateId, Symbol};

/// Operations needed to assemble an automaton fragment by fragment.
///
/// The compiler only ever talks to an automaton through this trait, so any
/// representation can be plugged in. Every operation is infallible: adding
/// something twice is idempotent, and merging a state that already exists
/// unions its transitions and final flag instead of failing.
pub trait AutomatonBuilder: Sized {
    /// Automaton with no states, no start and an empty alphabet.
    fn empty() -> Self;

    /// Add `state` if missing and make it the start state.
    fn add_start_state(&mut self, state: StateId);

    /// Add `state` if missing and mark it final.
    fn add_final_state(&mut self, state: StateId);

    /// Demote `state` to non-final. No-op for unknown states.
    fn set_non_final(&mut self, state: StateId);

    /// Add `from -symbol-> to`, creating either endpoint if missing.
    fn add_transition(&mut self, from: StateId, symbol: Symbol, to: StateId);

    /// Move every state of `other`, with its final flag and outgoing
    /// transitions, into `self`.
    ///
    /// The start state and alphabet of `other` are not carried over; callers
    /// read them before handing `other` in.
    fn merge_states(&mut self, other: Self);

    /// Union `symbols` into the alphabet.
    fn add_alphabet<I: IntoIterator<Item = char>>(&mut self, symbols: I);

    /// True when the automaton has no states.
    fn is_empty(&self) -> bool;

    fn start_state(&self) -> Option<StateId>;

    /// Final states in ascending id order.
    fn final_states(&self) -> Vec<StateId>;

    /// Alphabet in insertion order.
    fn alphabet(&self) -> Vec<char>;
}
