use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: low order bits that carry a hidden image in grayscale carriers
    #[arg(
        long = "x-luma-bits",
        default_value = "1",
        value_parser = clap::value_parser!(u8).range(1..=8),
        global = true
    )]
    pub luma_bits: u8,

    /// Experimental: low order bits per channel that carry a hidden image in RGB carriers
    #[arg(
        long = "x-rgb-bits",
        default_value = "3",
        value_parser = clap::value_parser!(u8).range(1..=8),
        global = true
    )]
    pub rgb_bits: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Filter(filter::FilterArgs),
    Reveal(reveal::RevealArgs),
}

#[cfg(test)]
mod tests {
    use chromaveil_core::{DeficiencyKind, ImageMode};
    use clap::CommandFactory;

    use super::*;
    use crate::commands::reveal::RevealArgs;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_filter_arguments() {
        let args = CliArgs::try_parse_from(["chromaveil", "filter", "-i", "lenna.png", "-d", "red"])
            .expect("Failed to parse arguments");

        match args.command {
            Commands::Filter(filter) => {
                assert_eq!(filter.deficiency, DeficiencyKind::Red);
                assert!(filter.output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn should_reject_unknown_deficiencies() {
        let result =
            CliArgs::try_parse_from(["chromaveil", "filter", "-i", "lenna.png", "-d", "purple"]);
        assert!(result.is_err());
    }

    #[test]
    fn should_parse_experimental_bit_counts() {
        let args = CliArgs::try_parse_from([
            "chromaveil",
            "reveal",
            "-i",
            "hidden2.bmp",
            "--x-rgb-bits",
            "2",
        ])
        .expect("Failed to parse arguments");

        assert_eq!(args.luma_bits, 1);
        assert_eq!(args.rgb_bits, 2);
        assert!(matches!(args.command, Commands::Reveal(_)));
        assert!(CliArgs::try_parse_from(["chromaveil", "reveal", "-i", "a.png", "--x-luma-bits", "9"]).is_err());
    }

    #[test]
    fn should_parse_the_reveal_mode() {
        let args = CliArgs::try_parse_from(["chromaveil", "reveal", "-i", "hidden1.bmp", "-m", "L"])
            .expect("Failed to parse arguments");

        match args.command {
            Commands::Reveal(reveal) => assert_eq!(reveal.mode, Some(ImageMode::Luma)),
            other => panic!("unexpected command {other:?}"),
        }

        let args = CliArgs::try_parse_from(["chromaveil", "reveal", "-i", "hidden2.bmp"])
            .expect("Failed to parse arguments");
        assert!(matches!(args.command, Commands::Reveal(RevealArgs { mode: None, .. })));
    }
}
