pub mod default_constants {
    pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    pub const GENERATE_LENGTH: usize = 10;
    pub const MAX_GENERATE_LENGTH: usize = 65536;
    pub const LOG_LEVEL: &str = "info";
}

pub mod env_variables {
    pub const LOG_LEVEL_VAR: &str = "ALPHAGEN_LOG_LEVEL";
    pub const CONFIG_PATH_ENV: &str = "ALPHAGEN_CONFIG_PATH";
}
