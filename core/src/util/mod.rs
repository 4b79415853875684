pub mod log;
pub mod rand;
#[cfg(test)]
pub(crate) mod test_util;
