use std::env;

use alphagen_core::config::AlphagenConfig;
use alphagen_core::constants::env_variables::LOG_LEVEL_VAR;
use alphagen_core::util::log::parse_log_level;
use alphagen_core::GenErr;
use anyhow::{Error, Result};
use log::LevelFilter;

use crate::constants::AlphagenExitCode;

/// `ALPHAGEN_LOG_LEVEL` wins over the config file.
pub(crate) fn resolve_log_level(config: &AlphagenConfig) -> Result<LevelFilter> {
    match env::var(LOG_LEVEL_VAR) {
        Ok(level) => Ok(parse_log_level(&level)?),
        Err(_) => config.log_config.level_filter(),
    }
}

pub(crate) fn exit_code_for(e: &Error) -> i32 {
    match e.downcast_ref::<GenErr>() {
        Some(GenErr::InvalidArgument(_)) => AlphagenExitCode::InvalidArgs.into(),
        Some(GenErr::EntropySource(_)) | None => AlphagenExitCode::Error.into(),
    }
}
