//! Thompson construction.
//!
//! - `ctx`: the state-name counter shared by one compile
//! - `fragments`: leaf fragments and the star/union/concatenation combinators
//! - `compiler`: configurable entry point driving the parser

mod compiler;
mod ctx;
mod fragments;

#[cfg(test)]
mod fragments_tests;

pub use compiler::{Compiler, DEFAULT_RECURSION_FUEL};
pub use ctx::CompileCtx;
pub use fragments::connect;
