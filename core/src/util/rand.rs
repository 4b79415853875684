use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::GenErr;

/// Supplier of random bytes for the generator.
///
/// Production code uses [`OsRandom`]; tests substitute deterministic sources.
pub trait RandomSource {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), GenErr>;
}

/// The operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), GenErr> {
        OsRng.try_fill_bytes(buf).map_err(|e| GenErr::EntropySource(e.to_string()))
    }
}
