//! Records stored as json lines

pub mod sync;

#[cfg(feature = "async_tokio")]
pub mod async_tokio;
