#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core automaton types shared by the thompson compiler and CLI.
//!
//! - `StateId` / `Symbol`: state names and transition labels
//! - `AutomatonBuilder`: the narrow interface the regex compiler builds through
//! - `Nfa`: default automaton representation, with epsilon-closure acceptance
//! - `NfaPrinter` / `NfaTable`: text and serializable dumps

mod builder;
mod colors;
mod dump;
mod nfa;
mod simulate;
mod symbol;

#[cfg(test)]
mod dump_tests;

pub use builder::AutomatonBuilder;
pub use colors::Colors;
pub use dump::{NfaPrinter, NfaTable, TransitionRow};
pub use nfa::{Nfa, NfaState};
pub use symbol::{StateId, Symbol};
