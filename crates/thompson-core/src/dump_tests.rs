//! Tests for text and table dumps.

use crate::{AutomatonBuilder, Colors, Nfa, NfaPrinter, StateId, Symbol};

fn q(n: u32) -> StateId {
    StateId::new(n)
}

/// Star over `a`, with transitions inserted out of dump order.
fn star_of_a() -> Nfa {
    let mut nfa = Nfa::empty();
    nfa.add_start_state(q(3));
    nfa.add_final_state(q(4));
    nfa.add_transition(q(1), Symbol::Char('a'), q(2));
    nfa.add_transition(q(3), Symbol::Epsilon, q(4));
    nfa.add_transition(q(4), Symbol::Epsilon, q(1));
    nfa.add_transition(q(3), Symbol::Epsilon, q(1));
    nfa.add_transition(q(2), Symbol::Epsilon, q(4));
    nfa.add_alphabet(['a']);
    nfa
}

#[test]
fn dump_empty() {
    let nfa = Nfa::empty();

    insta::assert_snapshot!(nfa.dump(), @r"
    start: ∅
    final: ∅
    alphabet: {}
    ");
}

#[test]
fn dump_sorts_states_and_transitions() {
    insta::assert_snapshot!(star_of_a().dump(), @r"
    start: q3
    final: q4
    alphabet: {a}
    q1: a → q2
    q2: ε → q4
    q3: ε → q1, ε → q4
    q4: ε → q1
    ");
}

#[test]
fn dump_lists_every_final() {
    let mut nfa = Nfa::empty();
    nfa.add_start_state(q(5));
    nfa.add_transition(q(5), Symbol::Epsilon, q(3));
    nfa.add_transition(q(5), Symbol::Epsilon, q(1));
    nfa.add_transition(q(1), Symbol::Char('x'), q(2));
    nfa.add_transition(q(3), Symbol::Char('y'), q(4));
    nfa.add_final_state(q(4));
    nfa.add_final_state(q(2));
    nfa.add_alphabet(['x', 'y']);

    insta::assert_snapshot!(nfa.dump(), @r"
    start: q5
    final: q2, q4
    alphabet: {x, y}
    q1: x → q2
    q2: ∅
    q3: y → q4
    q4: ∅
    q5: ε → q1, ε → q3
    ");
}

#[test]
fn colored_dump_wraps_names() {
    let nfa = star_of_a();

    let plain = NfaPrinter::new(&nfa).dump();
    let colored = NfaPrinter::new(&nfa).with_colors(Colors::ON).dump();

    assert!(!plain.contains('\x1b'));
    assert!(colored.contains("\x1b[34mq3\x1b[0m"));
    assert!(colored.contains("\x1b[32ma\x1b[0m"));
    assert!(colored.contains("\x1b[2mε\x1b[0m"));
    assert!(colored.contains("final:\x1b[0m \x1b[1;34mq4\x1b[0m"));
    assert_eq!(NfaPrinter::new(&nfa).with_colors(Colors::OFF).dump(), plain);
}

#[test]
fn colors_toggle() {
    assert!(Colors::new(true).is_enabled());
    assert!(!Colors::new(false).is_enabled());
    assert_eq!(Colors::default(), Colors::OFF);
    assert_eq!(Colors::ON.for_state(true), Colors::ON.accepting);
    assert_eq!(Colors::ON.for_symbol(Symbol::Epsilon), Colors::ON.muted);
    assert_eq!(Colors::ON.for_symbol(Symbol::Char('a')), Colors::ON.symbol);
}

#[test]
fn table_serializes_in_dump_order() {
    let table = star_of_a().to_table();

    let json = serde_json::to_value(&table).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "start": "q3",
            "finals": ["q4"],
            "alphabet": ["a"],
            "transitions": [
                { "from": "q1", "symbol": "a", "to": "q2" },
                { "from": "q2", "symbol": "ε", "to": "q4" },
                { "from": "q3", "symbol": "ε", "to": "q1" },
                { "from": "q3", "symbol": "ε", "to": "q4" },
                { "from": "q4", "symbol": "ε", "to": "q1" },
            ]
        })
    );
}

#[test]
fn table_of_empty_automaton() {
    let json = serde_json::to_value(Nfa::empty().to_table()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "start": null,
            "finals": [],
            "alphabet": [],
            "transitions": []
        })
    );
}
