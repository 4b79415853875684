use std::io::Write;

use anyhow::Result;
use log::debug;
use secrecy::SecretString;

use crate::config::GeneratorConfig;
use crate::generator::{generate_with, validate_length, Sampling};
use crate::util::rand::RandomSource;

pub struct GenerateConfig {
    pub length: i64,
    pub sampling: Sampling,
    pub max_length: usize,
}

impl GenerateConfig {
    /// Fills whatever the caller left out from the loaded configuration.
    pub fn from_config(
        config: &GeneratorConfig,
        length: Option<i64>,
        sampling: Option<Sampling>,
    ) -> Self {
        Self {
            length: length.unwrap_or(config.length as i64),
            sampling: sampling.unwrap_or(config.sampling),
            max_length: config.max_length,
        }
    }
}

/// Writes the generated value and a newline to `out_s`. Nothing is written on error.
pub fn generate_io<R, O>(
    config: &GenerateConfig,
    source: &mut R,
    out_s: &mut O,
) -> Result<SecretString>
where
    R: RandomSource + ?Sized,
    O: Write,
{
    let length = validate_length(config.length, config.max_length)?;
    debug!("generate_io: length {}, sampling {}", length, config.sampling);

    let generated = generate_with(source, length, config.sampling)?;
    writeln!(out_s, "{}", generated)?;
    out_s.flush()?;

    Ok(SecretString::new(generated.into()))
}
