use thompson_core::{AutomatonBuilder, Nfa, StateId};

use super::{CompileCtx, connect};

#[test]
fn symbol_fragment() {
    let mut ctx = CompileCtx::new();
    let nfa: Nfa = ctx.symbol('a');

    insta::assert_snapshot!(nfa.dump(), @r"
    start: q1
    final: q2
    alphabet: {a}
    q1: a → q2
    q2: ∅
    ");
    assert_eq!(ctx.states_allocated(), 2);
}

#[test]
fn epsilon_fragment() {
    let mut ctx = CompileCtx::new();
    let nfa: Nfa = ctx.epsilon();

    insta::assert_snapshot!(nfa.dump(), @r"
    start: q1
    final: q1
    alphabet: {}
    q1: ∅
    ");
    assert!(nfa.accepts(""));
}

#[test]
fn fresh_states_never_repeat() {
    let mut ctx = CompileCtx::new();
    let first = ctx.fresh_state();
    let second = ctx.fresh_state();

    assert_eq!(first, StateId::new(1));
    assert_eq!(second, StateId::new(2));
    assert_eq!(ctx.states_allocated(), 2);
}

#[test]
fn connect_empty_is_identity() {
    let mut ctx = CompileCtx::new();
    let a: Nfa = ctx.symbol('a');

    let connected = connect(Nfa::empty(), a.clone());

    assert_eq!(connected, a);
}

#[test]
fn connect_two_symbols() {
    let mut ctx = CompileCtx::new();
    let a: Nfa = ctx.symbol('a');
    let b: Nfa = ctx.symbol('b');

    let nfa = connect(a, b);

    insta::assert_snapshot!(nfa.dump(), @r"
    start: q1
    final: q4
    alphabet: {a, b}
    q1: a → q2
    q2: ε → q3
    q3: b → q4
    q4: ∅
    ");
}

#[test]
fn connect_demotes_every_left_final() {
    let mut ctx = CompileCtx::new();
    let a: Nfa = ctx.symbol('a');
    let b: Nfa = ctx.symbol('b');
    let either = ctx.union(a, b);
    let c: Nfa = ctx.symbol('c');

    let nfa = connect(either, c);

    assert_eq!(nfa.final_states(), vec![StateId::new(7)]);
    assert!(nfa.accepts("ac"));
    assert!(nfa.accepts("bc"));
    assert!(!nfa.accepts("a"));
}

#[test]
fn star_fragment() {
    let mut ctx = CompileCtx::new();
    let a: Nfa = ctx.symbol('a');

    let nfa = ctx.star(a);

    insta::assert_snapshot!(nfa.dump(), @r"
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
fn star_over_epsilon() {
    let mut ctx = CompileCtx::new();
    let empty: Nfa = ctx.epsilon();

    let nfa = ctx.star(empty);

    assert_eq!(nfa.final_states(), vec![StateId::new(3)]);
    assert!(nfa.accepts(""));
    assert!(nfa.alphabet().is_empty());
}

#[test]
fn union_fragment() {
    let mut ctx = CompileCtx::new();
    let a: Nfa = ctx.symbol('a');
    let b: Nfa = ctx.symbol('b');

    let nfa = ctx.union(a, b);

    insta::assert_snapshot!(nfa.dump(), @r"
    start: q5
    final: q2, q4
    alphabet: {a, b}
    q1: a → q2
    q2: ∅
    q3: b → q4
    q4: ∅
    q5: ε → q1, ε → q3
    ");
}

#[test]
fn union_with_shared_symbol_keeps_alphabet_unique() {
    let mut ctx = CompileCtx::new();
    let left: Nfa = ctx.symbol('a');
    let right: Nfa = ctx.symbol('a');

    let nfa = ctx.union(left, right);

    assert_eq!(nfa.alphabet().len(), 1);
    assert_eq!(nfa.state_count(), 5);
}
