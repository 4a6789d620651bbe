//! Crossword generator command.

use std::process;

use clap::{CommandFactory as _, FromArgMatches as _};
use wordlace_cli::{Args, version};

fn main() {
    better_panic::install();

    let matches = Args::command()
        .version(version::build_version())
        .get_matches();
    let args = match Args::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(err) => err.exit(),
    };

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match wordlace_cli::run(&args) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err}");
            process::exit(err.exit_code());
        }
    }
}
