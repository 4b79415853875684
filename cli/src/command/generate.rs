use std::io::Write;

use alphagen_core::config::AlphagenConfig;
use alphagen_core::generator::Sampling;
use alphagen_core::operation::generate::{generate_io, GenerateConfig};
use alphagen_core::util::rand::{OsRandom, RandomSource};
use anyhow::Error;
use log::debug;
use secrecy::ExposeSecret;

use crate::util::exit_code_for;

pub struct GenerateCommandConfig {
    pub length: Option<i64>,
    pub sampling: Option<Sampling>,
}

pub fn cmd_generate(
    config: &AlphagenConfig,
    cmd_config: GenerateCommandConfig,
) -> Result<(), (i32, Error)> {
    let mut stdout = std::io::stdout().lock();
    generate_to(config, cmd_config, &mut OsRandom, &mut stdout)
}

fn generate_to<R, O>(
    config: &AlphagenConfig,
    cmd_config: GenerateCommandConfig,
    source: &mut R,
    out_s: &mut O,
) -> Result<(), (i32, Error)>
where
    R: RandomSource + ?Sized,
    O: Write,
{
    let gen_cfg = GenerateConfig::from_config(
        &config.generator_config,
        cmd_config.length,
        cmd_config.sampling,
    );

    let res = generate_io(&gen_cfg, source, out_s).map_err(|e| (exit_code_for(&e), e))?;
    debug!("cmd_generate: wrote {} letters", res.expose_secret().len());

    Ok(())
}
