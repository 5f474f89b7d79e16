#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! docxjson — open a document package and report a JSON status line.

mod cli;
mod commands;
mod errors;
mod package;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.output, cli.json, cli.debug);

    match commands::open::run(cli.file(), &ctx) {
        Ok(()) => {}
        Err(err) => {
            write_error(&err, &ctx);
            std::process::exit(err.exit_code());
        }
    }
}
