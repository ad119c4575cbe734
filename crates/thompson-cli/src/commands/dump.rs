use std::path::PathBuf;

use thompson_core::{Colors, NfaPrinter};

use super::run_common::compile_or_exit;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct DumpArgs {
    pub pattern: Option<String>,
    pub file: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: bool,
    pub recursion_fuel: Option<u32>,
}

pub fn run(args: DumpArgs) {
    let nfa = compile_or_exit(
        args.pattern.as_deref(),
        args.file.as_deref(),
        args.recursion_fuel,
    );

    match args.format {
        OutputFormat::Text => {
            let colors = Colors::new(args.color);
            print!("{}", NfaPrinter::new(&nfa).with_colors(colors).dump());
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&nfa.to_table()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize automaton: {}", e);
                std::process::exit(1);
            }
        },
    }
}
