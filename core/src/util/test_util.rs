use std::fs;
use std::path::PathBuf;

use tempfile::env::temp_dir;
use tempfile::TempDir;

use crate::util::rand::RandomSource;
use crate::GenErr;

pub(crate) fn gen_unique_temp_dir() -> (TempDir, PathBuf) {
    let base_dir = temp_dir().join("alphagen-test");
    if !base_dir.exists() {
        let _ = fs::create_dir(&base_dir);
    }
    let dir = TempDir::new_in(base_dir).unwrap();
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Replays `bytes` in a loop and counts how many bytes were requested.
pub(crate) struct SequenceRandom {
    bytes: Vec<u8>,
    pos: usize,
    pub(crate) requested: usize,
    pub(crate) calls: usize,
}

impl SequenceRandom {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        assert!(!bytes.is_empty());
        Self { bytes: bytes.to_vec(), pos: 0, requested: 0, calls: 0 }
    }

    pub(crate) fn all_bytes() -> Self {
        Self::new(&(0..=255).collect::<Vec<u8>>())
    }
}

impl RandomSource for SequenceRandom {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), GenErr> {
        self.calls += 1;
        self.requested += buf.len();
        for b in buf.iter_mut() {
            *b = self.bytes[self.pos];
            self.pos = (self.pos + 1) % self.bytes.len();
        }
        Ok(())
    }
}

pub(crate) struct FailingRandom;

impl RandomSource for FailingRandom {
    fn fill_bytes(&mut self, _buf: &mut [u8]) -> Result<(), GenErr> {
        Err(GenErr::EntropySource("no entropy source".into()))
    }
}
