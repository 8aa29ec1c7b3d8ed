//! Converts lists of records to maps.
//!
//! - [`convert`]: strict conversion; a duplicate key is an error
//! - [`convert_with_merge`]: duplicate keys are resolved by a [`Merge`]
//! - [`Collector`]: a converter configured at runtime

#![deny(clippy::unwrap_used)]

pub mod error;
pub mod record;

pub mod conv;

pub mod input;
pub mod output;

pub use error::Error;
pub use record::Record;

pub use conv::collector::{Collector, Policy};
pub use conv::merge::{convert_with_merge, merge_fn_new, KeepFirst, KeepLast, Merge};
pub use conv::strict::convert;

#[cfg(feature = "async")]
pub use futures;

#[cfg(feature = "async_tokio")]
pub use tokio;
#[cfg(feature = "async_tokio")]
pub use tokio_stream;
