//! Recursive-descent parser that builds the automaton as it goes.
//!
//! Grammar, one procedure per nonterminal:
//!
//! ```text
//! regex  := term ('|' regex)?
//! term   := factor*
//! factor := base ('*')*
//! base   := '(' regex ')' | symbol
//! ```
//!
//! There is no parse tree: each rule returns a finished fragment. The first
//! error aborts the whole parse, and recursion fuel bounds nesting depth.

mod core;
mod cursor;
mod grammar;


pub use self::core::{ParseResult, Parser};
pub use cursor::Cursor;
