//! Input modules

pub mod lines;

#[cfg(feature = "async")]
pub mod stream;
