//! Test helpers and snapshot macros.

/// Inline snapshot of the text dump for a pattern.
#[macro_export]
macro_rules! shot_nfa {
    ($pattern:expr, @$snapshot:literal) => {{
        let output = $crate::test_utils::dump($pattern);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}

use thompson_core::Nfa;

use crate::{Compiler, Error};

/// Compile with default options, panicking on error.
pub fn nfa(pattern: &str) -> Nfa {
    match crate::compile(pattern) {
        Ok(nfa) => nfa,
        Err(err) => panic!("expected {pattern:?} to compile, got: {err}"),
    }
}

/// Text dump of the compiled pattern.
pub fn dump(pattern: &str) -> String {
    nfa(pattern).dump()
}

/// Compile error for a pattern that must be rejected.
pub fn error(pattern: &str) -> Error {
    error_with_fuel(pattern, Some(crate::DEFAULT_RECURSION_FUEL))
}

pub fn error_with_fuel(pattern: &str, fuel: Option<u32>) -> Error {
    match Compiler::new(pattern).with_recursion_fuel(fuel).compile_nfa() {
        Ok(nfa) => panic!("expected {pattern:?} to fail, got:\n{}", nfa.dump()),
        Err(err) => err,
    }
}

/// Every string over `alphabet` of length at most `max_len`, shortest first.
pub fn strings_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());
        for prefix in &frontier {
            for &c in alphabet {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}
