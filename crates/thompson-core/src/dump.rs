//! Dump helpers for automaton inspection and testing.
//!
//! Both the text dump and the serializable table list states in ascending id
//! order and transitions sorted by label (epsilon first) then target, so the
//! output does not depend on merge order.

use std::fmt::Write;

use crate::{Colors, Nfa, NfaState, StateId, Symbol};

/// Printer for `Nfa` with optional terminal colors.
///
/// ```text
/// start: q3
/// final: q4
/// alphabet: {a}
/// q1: a → q2
/// q2: ε → q4
/// q3: ε → q1, ε → q4
/// q4: ε → q1
/// ```
pub struct NfaPrinter<'a> {
    nfa: &'a Nfa,
    colors: Colors,
}

impl<'a> NfaPrinter<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            colors: Colors::OFF,
        }
    }

    pub fn with_colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = self.colors;

        write!(w, "{}start:{} ", c.muted, c.reset)?;
        match self.nfa.start_state() {
            Some(start) => {
                let color = c.for_state(self.nfa.is_final(start));
                writeln!(w, "{}{}{}", color, start, c.reset)?
            }
            None => writeln!(w, "∅")?,
        }

        write!(w, "{}final:{} ", c.muted, c.reset)?;
        let finals = self.nfa.final_states();
        if finals.is_empty() {
            writeln!(w, "∅")?;
        } else {
            for (i, state) in finals.iter().enumerate() {
                if i != 0 {
                    write!(w, ", ")?;
                }
                write!(w, "{}{}{}", c.accepting, state, c.reset)?;
            }
            writeln!(w)?;
        }

        write!(w, "{}alphabet:{} {{", c.muted, c.reset)?;
        for (i, symbol) in self.nfa.alphabet().iter().enumerate() {
            if i != 0 {
                write!(w, ", ")?;
            }
            write!(w, "{}{}{}", c.symbol, symbol, c.reset)?;
        }
        writeln!(w, "}}")?;

        for id in sorted_states(self.nfa) {
            let Some(state) = self.nfa.state(id) else {
                continue;
            };
            write!(w, "{}{}{}: ", c.for_state(state.is_final()), id, c.reset)?;
            let transitions = sorted_transitions(state);
            if transitions.is_empty() {
                writeln!(w, "∅")?;
                continue;
            }
            for (i, (symbol, to)) in transitions.iter().enumerate() {
                if i != 0 {
                    write!(w, ", ")?;
                }
                write!(
                    w,
                    "{}{}{} {}→{} {}{}{}",
                    c.for_symbol(*symbol),
                    symbol,
                    c.reset,
                    c.muted,
                    c.reset,
                    c.for_state(self.nfa.is_final(*to)),
                    to,
                    c.reset
                )?;
            }
            writeln!(w)?;
        }

        Ok(())
    }
}

/// Flat, serializable view of an `Nfa`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NfaTable {
    pub start: Option<StateId>,
    pub finals: Vec<StateId>,
    pub alphabet: Vec<char>,
    pub transitions: Vec<TransitionRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TransitionRow {
    pub from: StateId,
    pub symbol: Symbol,
    pub to: StateId,
}

impl Nfa {
    pub fn to_table(&self) -> NfaTable {
        let mut transitions = Vec::with_capacity(self.transition_count());
        for from in sorted_states(self) {
            let Some(state) = self.state(from) else {
                continue;
            };
            for (symbol, to) in sorted_transitions(state) {
                transitions.push(TransitionRow { from, symbol, to });
            }
        }

        NfaTable {
            start: self.start_state(),
            finals: self.final_states(),
            alphabet: self.alphabet().iter().copied().collect(),
            transitions,
        }
    }
}

fn sorted_states(nfa: &Nfa) -> Vec<StateId> {
    let mut ids: Vec<StateId> = nfa.states().map(|(id, _)| id).collect();
    ids.sort_unstable();
    ids
}

fn sorted_transitions(state: &NfaState) -> Vec<(Symbol, StateId)> {
    let mut transitions: Vec<(Symbol, StateId)> = state.transitions().collect();
    transitions.sort_unstable();
    transitions
}
