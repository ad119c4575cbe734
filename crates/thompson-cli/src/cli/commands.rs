//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("thompson")
        .about("Compile regular expressions into NFAs with Thompson's construction")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(match_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a pattern")
        .override_usage(
            "\
  thompson check <PATTERN>
  thompson check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  thompson check 'a*b|c'              # inline pattern
  thompson check -f pattern.txt       # pattern file
  echo '(a|b)*' | thompson check -f - # pattern from stdin"#,
        )
        .arg(pattern_arg())
        .arg(file_arg().conflicts_with("pattern"))
        .arg(recursion_limit_arg())
}

/// Print the compiled automaton.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the compiled NFA")
        .override_usage(
            "\
  thompson dump <PATTERN> [--format <FORMAT>]
  thompson dump -f <FILE> [--format <FORMAT>]",
        )
        .after_help(
            r#"EXAMPLES:
  thompson dump 'ab*'                 # text table
  thompson dump 'a|b' --format json   # JSON table
  thompson dump -f pattern.txt        # pattern file"#,
        )
        .arg(pattern_arg())
        .arg(file_arg().conflicts_with("pattern"))
        .arg(format_arg())
        .arg(color_arg())
        .arg(recursion_limit_arg())
}

/// Test strings against a pattern.
///
/// With `-f`, every positional is an input.
pub fn match_command() -> Command {
    Command::new("match")
        .about("Test strings against a pattern")
        .override_usage(
            "\
  thompson match <PATTERN> [INPUT]...
  thompson match -f <FILE> [INPUT]...",
        )
        .after_help(
            r#"EXAMPLES:
  thompson match 'a*b|c' ab c ac      # accept, accept, reject
  thompson match -f pattern.txt abc   # pattern file
  cat words.txt | thompson match 'a*' # inputs from stdin"#,
        )
        .arg(pattern_arg())
        .arg(inputs_arg())
        .arg(file_arg())
        .arg(recursion_limit_arg())
}
