pub mod alphabet;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use self::alphabet::{char_for_byte, REJECTION_BOUND};
use crate::util::rand::{OsRandom, RandomSource};
use crate::GenErr;

/// Consecutive refills without a single accepted byte before giving up.
const MAX_STALLED_ROUNDS: usize = 32;

/// How a random byte is turned into an alphabet index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    /// `byte % 52`. Indices 0..48 come up with probability 5/256, 48..52 with 4/256.
    #[default]
    Modulo,
    /// Rejection sampling: bytes >= 208 are drawn again, every letter is 1/52.
    Uniform,
}

impl Display for Sampling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sampling::Modulo => write!(f, "modulo"),
            Sampling::Uniform => write!(f, "uniform"),
        }
    }
}

impl FromStr for Sampling {
    type Err = GenErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modulo" => Ok(Sampling::Modulo),
            "uniform" => Ok(Sampling::Uniform),
            other => Err(GenErr::InvalidArgument(format!(
                "unknown sampling mode '{}', expected 'modulo' or 'uniform'",
                other
            ))),
        }
    }
}

/// Generate `length` letters from the OS random source using modulo sampling.
pub fn generate(length: usize) -> Result<String, GenErr> {
    generate_with(&mut OsRandom, length, Sampling::Modulo)
}

pub fn generate_with<R>(source: &mut R, length: usize, sampling: Sampling) -> Result<String, GenErr>
where
    R: RandomSource + ?Sized,
{
    if length == 0 {
        return Ok(String::new());
    }
    match sampling {
        Sampling::Modulo => generate_modulo(source, length),
        Sampling::Uniform => generate_uniform(source, length),
    }
}

fn generate_modulo<R: RandomSource + ?Sized>(
    source: &mut R,
    length: usize,
) -> Result<String, GenErr> {
    let mut bytes = Zeroizing::new(vec![0u8; length]);
    source.fill_bytes(bytes.as_mut_slice())?;
    Ok(bytes.iter().map(|&b| char_for_byte(b)).collect())
}

fn generate_uniform<R: RandomSource + ?Sized>(
    source: &mut R,
    length: usize,
) -> Result<String, GenErr> {
    let mut result = String::with_capacity(length);
    let mut bytes = Zeroizing::new(vec![0u8; length]);
    let mut stalled = 0;

    while result.len() < length {
        let chunk = &mut bytes.as_mut_slice()[..length - result.len()];
        source.fill_bytes(chunk)?;

        let before = result.len();
        result.extend(chunk.iter().filter(|&&b| b < REJECTION_BOUND).map(|&b| char_for_byte(b)));

        if result.len() == before {
            stalled += 1;
            if stalled >= MAX_STALLED_ROUNDS {
                return Err(GenErr::EntropySource(format!(
                    "no usable byte after {} refills",
                    MAX_STALLED_ROUNDS
                )));
            }
        } else {
            stalled = 0;
        }
    }

    Ok(result)
}

/// Checks a caller-supplied length before any entropy is consumed.
pub fn validate_length(requested: i64, max_length: usize) -> Result<usize, GenErr> {
    if requested < 0 {
        return Err(GenErr::InvalidArgument(format!(
            "length must be non-negative, got {}",
            requested
        )));
    }
    match usize::try_from(requested) {
        Ok(length) if length <= max_length => Ok(length),
        _ => Err(GenErr::InvalidArgument(format!(
            "length {} exceeds the maximum of {}",
            requested, max_length
        ))),
    }
}
