mod cli;
mod commands;

use cli::{ArraysParams, ListParams, LookupParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("list", m)) => {
            let params = ListParams::from_matches(m);
            commands::list::run(params.into());
        }
        Some(("lookup", m)) => {
            let params = LookupParams::from_matches(m);
            commands::lookup::run(params.into());
        }
        Some(("arrays", m)) => {
            let params = ArraysParams::from_matches(m);
            commands::arrays::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
