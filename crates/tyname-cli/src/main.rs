mod cli;
mod commands;
mod logging;

use cli::{MembersParams, RenderParams, build_cli, parse_log_level};

fn main() {
    let matches = build_cli().get_matches();
    logging::init_logging(parse_log_level(&matches));

    match matches.subcommand() {
        Some(("render", m)) => {
            let params = RenderParams::from_matches(m);
            commands::render::run(params.into());
        }
        Some(("members", m)) => {
            let params = MembersParams::from_matches(m);
            commands::members::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
