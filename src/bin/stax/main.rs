//! # Stax
//!
//! This binary is the compiler and interpreter for stax. It combines the
//! front end, block resolver, simulator, and ARM64 emitter behind two
//! subcommands: `sim` and `com`.

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::init();

    simple_logger::init_with_level((&args.verbosity).into()).unwrap();

    let status = match &args.command {
        Commands::Sim(sim_args) => commands::simulate::run(sim_args),
        Commands::Com(com_args) => commands::build::run(com_args),
    };

    std::process::exit(status);
}
