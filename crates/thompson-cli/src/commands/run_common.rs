//! Shared logic for check, dump and match.

use std::path::Path;

use thompson_compiler::Compiler;
use thompson_core::Nfa;

use super::pattern_loader::load_pattern;

/// Load and compile the pattern, exiting with status 1 on any failure.
pub fn compile_or_exit(
    pattern: Option<&str>,
    file: Option<&Path>,
    recursion_fuel: Option<u32>,
) -> Nfa {
    let pattern = load_pattern(pattern, file).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    Compiler::new(&pattern)
        .with_recursion_fuel(recursion_fuel)
        .compile_nfa()
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        })
}
