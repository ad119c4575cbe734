//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Positional shifting for match (`-f` turns the first positional into an input)

use std::path::PathBuf;

use clap::ArgMatches;
use thompson_compiler::DEFAULT_RECURSION_FUEL;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::{DumpArgs, OutputFormat};
use crate::commands::matches::MatchArgs;

pub struct CheckParams {
    pub pattern: Option<String>,
    pub file: Option<PathBuf>,
    pub recursion_limit: Option<u32>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            file: p.file,
            recursion_fuel: recursion_fuel(p.recursion_limit),
        }
    }
}

pub struct DumpParams {
    pub pattern: Option<String>,
    pub file: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: ColorChoice,
    pub recursion_limit: Option<u32>,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            format,
            color: parse_color(m),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            file: p.file,
            format: p.format,
            color: p.color.should_colorize(),
            recursion_fuel: recursion_fuel(p.recursion_limit),
        }
    }
}

pub struct MatchParams {
    pub pattern: Option<String>,
    pub file: Option<PathBuf>,
    pub inputs: Vec<String>,
    pub recursion_limit: Option<u32>,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let file = m.get_one::<PathBuf>("file").cloned();
        let pattern = m.get_one::<String>("pattern").cloned();
        let inputs: Vec<String> = m
            .get_many::<String>("inputs")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        // Positional shifting: with -f, the first positional is an input.
        let (pattern, inputs) = shift_positional_to_inputs(file.is_some(), pattern, inputs);

        Self {
            pattern,
            file,
            inputs,
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            pattern: p.pattern,
            file: p.file,
            inputs: p.inputs,
            recursion_fuel: recursion_fuel(p.recursion_limit),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Map --recursion-limit onto compiler fuel: absent → default, 0 → unlimited.
fn recursion_fuel(limit: Option<u32>) -> Option<u32> {
    match limit {
        None => Some(DEFAULT_RECURSION_FUEL),
        Some(0) => None,
        Some(n) => Some(n),
    }
}

/// When -f supplies the pattern, the first positional is an input.
/// This enables: `thompson match -f pattern.txt abc`
fn shift_positional_to_inputs(
    has_file: bool,
    pattern: Option<String>,
    mut inputs: Vec<String>,
) -> (Option<String>, Vec<String>) {
    match pattern {
        Some(first) if has_file => {
            inputs.insert(0, first);
            (None, inputs)
        }
        pattern => (pattern, inputs),
    }
}
