#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphagenExitCode {
    Error = 1,
    InvalidArgs = 2,
    ConfigError = 100,
}

impl From<AlphagenExitCode> for i32 {
    fn from(val: AlphagenExitCode) -> Self {
        val as i32
    }
}
