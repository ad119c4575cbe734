pub mod check;
pub mod dump;
pub mod matches;
pub mod pattern_loader;
pub mod run_common;

#[cfg(test)]
mod pattern_loader_tests;
