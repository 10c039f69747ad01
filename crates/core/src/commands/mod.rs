pub mod list;
pub mod log_size;

#[cfg(test)]
pub(crate) mod fake;
