use std::io::{self, Write};
use std::path::PathBuf;

use thompson_core::Nfa;

use super::pattern_loader::is_stdin;
use super::run_common::compile_or_exit;

pub struct MatchArgs {
    pub pattern: Option<String>,
    pub file: Option<PathBuf>,
    /// Read from stdin, one per line, when empty.
    pub inputs: Vec<String>,
    pub recursion_fuel: Option<u32>,
}

pub fn run(args: MatchArgs) {
    let inputs_from_stdin = args.inputs.is_empty();
    if inputs_from_stdin && args.file.as_deref().is_some_and(is_stdin) {
        eprintln!("error: pattern and inputs cannot both be from stdin");
        std::process::exit(1);
    }

    let nfa = compile_or_exit(
        args.pattern.as_deref(),
        args.file.as_deref(),
        args.recursion_fuel,
    );

    let inputs = if inputs_from_stdin {
        io::stdin()
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .unwrap_or_else(|e| {
                eprintln!("error: failed to read stdin: {}", e);
                std::process::exit(1);
            })
    } else {
        args.inputs
    };

    let all_accepted = write_verdicts(&nfa, &inputs, &mut io::stdout().lock())
        .unwrap_or_else(|e| {
            eprintln!("error: failed to write output: {}", e);
            std::process::exit(1);
        });

    if !all_accepted {
        std::process::exit(1);
    }
}

/// Write `accept\t<input>` or `reject\t<input>` per input.
///
/// Returns true when every input was accepted.
pub fn write_verdicts<I, W>(nfa: &Nfa, inputs: I, out: &mut W) -> io::Result<bool>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    W: Write,
{
    let mut all_accepted = true;
    for input in inputs {
        let input = input.as_ref();
        let accepted = nfa.accepts(input);
        let label = if accepted { "accept" } else { "reject" };
        writeln!(out, "{}\t{}", label, input)?;
        all_accepted &= accepted;
    }
    Ok(all_accepted)
}
