use alphagen_core::config::AlphagenConfig;
use alphagen_core::generator::Sampling;
use alphagen_core::util::log::{init_logger, set_log_level};
use anyhow::Error;
use clap::Parser;
use log::debug;

use crate::command;
use crate::command::generate::GenerateCommandConfig;
use crate::constants::AlphagenExitCode;
use crate::util::resolve_log_level;

#[derive(Parser)]
#[command(
    name = "alphagen",
    about = "Prints a random string of ASCII letters drawn from the OS secure random source",
    version
)]
pub struct CliParser {
    /// Number of letters to generate (defaults to the configured length, 10).
    #[arg(allow_negative_numbers = true, value_name = "LENGTH")]
    pub length: Option<i64>,

    /// Byte to letter mapping: 'modulo' (byte % 52) or 'uniform' (rejection sampling).
    #[arg(short = 's', long = "sampling", value_name = "mode")]
    pub sampling: Option<Sampling>,
}

pub fn handle_cli(config: AlphagenConfig, cli: CliParser) -> Result<(), (i32, Error)> {
    let level =
        resolve_log_level(&config).map_err(|e| (AlphagenExitCode::ConfigError.into(), e))?;
    if let Err(e) = init_logger() {
        eprintln!("Failed to initialize logger: {}", e);
    }
    set_log_level(level);
    debug!("handle_cli: config {:?}", config);

    command::generate::cmd_generate(
        &config,
        GenerateCommandConfig { length: cli.length, sampling: cli.sampling },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let cli = CliParser::try_parse_from(["alphagen"]).unwrap();
        assert_eq!(cli.length, None);
        assert_eq!(cli.sampling, None);

        let cli = CliParser::try_parse_from(["alphagen", "32", "--sampling", "uniform"]).unwrap();
        assert_eq!(cli.length, Some(32));
        assert_eq!(cli.sampling, Some(Sampling::Uniform));

        let cli = CliParser::try_parse_from(["alphagen", "-4"]).unwrap();
        assert_eq!(cli.length, Some(-4));
    }

    #[test]
    fn reject_bad_args() {
        assert!(CliParser::try_parse_from(["alphagen", "ten"]).is_err());
        assert!(CliParser::try_parse_from(["alphagen", "-s", "fair"]).is_err());
    }
}
