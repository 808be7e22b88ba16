use clap::Parser;
use log::debug;

use chromaveil_core::{BitDepth, ChromaveilError, RevealOptions};

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, ChromaveilError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    debug!("{args:?}");

    match args.command {
        Commands::Filter(filter) => filter.run(),
        Commands::Reveal(reveal) => reveal.run(get_options(args.luma_bits, args.rgb_bits)?),
    }
}

fn get_options(luma_bits: u8, rgb_bits: u8) -> CliResult<RevealOptions> {
    Ok(RevealOptions::default()
        .with_luma_bits(BitDepth::new(luma_bits)?)
        .with_rgb_bits(BitDepth::new(rgb_bits)?))
}
