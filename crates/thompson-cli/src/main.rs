mod cli;
mod commands;

use cli::{CheckParams, DumpParams, MatchParams, build_cli};

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("match", m)) => {
            let params = MatchParams::from_matches(m);
            commands::matches::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
