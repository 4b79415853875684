use std::error::Error;
use std::fmt::Display;

pub mod config;
pub mod constants;
pub mod generator;
pub mod operation;
pub mod util;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenErr {
    InvalidArgument(String),
    EntropySource(String),
}

impl Display for GenErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use GenErr::*;
        match self {
            InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            EntropySource(msg) => write!(f, "Secure random source unavailable: {}", msg),
        }
    }
}

impl Error for GenErr {}
