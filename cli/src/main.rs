mod command;
mod constants;
mod parser;
mod util;

use std::env;
use std::path::{Path, PathBuf};

use alphagen_core::config::{default_config_path, load_config, AlphagenConfig};
use alphagen_core::constants::env_variables::CONFIG_PATH_ENV;
use clap::Parser;
use constants::AlphagenExitCode;
use parser::CliParser;

fn main() {
    let config_path = env::var(CONFIG_PATH_ENV).map(PathBuf::from).ok().or_else(default_config_path);
    process_cli(config_path.as_deref());
}

fn process_cli(config_path: Option<&Path>) {
    let config = match config_path.filter(|path| path.exists()) {
        Some(config_path) => match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config file '{}': {}", config_path.display(), e);
                std::process::exit(AlphagenExitCode::ConfigError.into());
            }
        },
        None => AlphagenConfig::default(),
    };

    let cli_args = CliParser::parse();

    if let Err((code, e)) = parser::handle_cli(config, cli_args) {
        eprintln!("{}", e);
        std::process::exit(code);
    }
}
