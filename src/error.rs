use core::fmt::Debug;

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two items of a strict conversion produced the same key.
    #[error("duplicate key found. key={key}, index={index}")]
    DuplicateKey { key: String, index: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unable to decode a record: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Creates [`Error::DuplicateKey`] for the item at `index`(zero-based).
    pub fn duplicate_key<K>(key: &K, index: usize) -> Self
    where
        K: Debug,
    {
        Self::DuplicateKey {
            key: format!("{key:?}"),
            index,
        }
    }

    pub fn invalid_argument<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(msg.into())
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(Box::new(e))
    }
}

#[cfg(test)]
mod test_error {
    mod duplicate_key {
        use crate::error::Error;

        #[test]
        fn debug_formatted_key() {
            let e = Error::duplicate_key(&"k1", 3);
            assert!(e.is_duplicate_key());
            assert_eq!(r#"duplicate key found. key="k1", index=3"#, e.to_string());
        }
    }

    mod invalid_argument {
        use crate::error::Error;

        #[test]
        fn message() {
            let e = Error::invalid_argument("key function not set");
            assert!(!e.is_duplicate_key());
            assert_eq!("invalid argument: key function not set", e.to_string());
        }
    }
}
