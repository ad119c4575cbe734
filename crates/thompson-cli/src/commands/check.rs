use std::path::PathBuf;

use super::run_common::compile_or_exit;

pub struct CheckArgs {
    pub pattern: Option<String>,
    pub file: Option<PathBuf>,
    pub recursion_fuel: Option<u32>,
}

pub fn run(args: CheckArgs) {
    compile_or_exit(
        args.pattern.as_deref(),
        args.file.as_deref(),
        args.recursion_fuel,
    );

    // Silent on success (like cargo check)
}
