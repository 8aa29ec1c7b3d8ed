//! Converter configured at runtime.

use core::fmt;
use core::fmt::Debug;
use core::str::FromStr;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::conv::merge::{convert_with_merge, merge_fn_new, KeepFirst, KeepLast};
use crate::conv::strict::convert;
use crate::error::Error;

/// How key collisions are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Strict conversion
    #[default]
    Reject,
    KeepFirst,
    KeepLast,
    /// Uses the merge function of the [`Collector`]
    Merge,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::KeepFirst => "keep-first",
            Self::KeepLast => "keep-last",
            Self::Merge => "merge",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "keep-first" => Ok(Self::KeepFirst),
            "keep-last" => Ok(Self::KeepLast),
            "merge" => Ok(Self::Merge),
            _ => Err(Error::invalid_argument(format!("unknown policy: {s}"))),
        }
    }
}

pub type KeyFn<T, K> = Box<dyn Fn(&T) -> K>;
pub type MergeFnBox<T> = Box<dyn Fn(T, T) -> T>;

/// A list-to-map converter whose functions are set after construction.
///
/// Unlike [`convert`]/[`convert_with_merge`], a missing function is only
/// detected when collecting, as [`Error::InvalidArgument`].
pub struct Collector<T, K> {
    key: Option<KeyFn<T, K>>,
    merge: Option<MergeFnBox<T>>,
    policy: Policy,
}

impl<T, K> Default for Collector<T, K> {
    fn default() -> Self {
        Self {
            key: None,
            merge: None,
            policy: Policy::default(),
        }
    }
}

impl<T, K> Collector<T, K>
where
    K: Ord + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key<F>(mut self, key_fn: F) -> Self
    where
        F: Fn(&T) -> K + 'static,
    {
        self.key = Some(Box::new(key_fn));
        self
    }

    /// Sets the merge function and switches the policy to [`Policy::Merge`].
    pub fn with_merge<F>(mut self, merge_fn: F) -> Self
    where
        F: Fn(T, T) -> T + 'static,
    {
        self.merge = Some(Box::new(merge_fn));
        self.policy = Policy::Merge;
        self
    }

    /// Sets the policy.
    ///
    /// A merge function set by [`Collector::with_merge`] is only used by
    /// [`Policy::Merge`]; collecting with any other policy while a merge
    /// function is set is an [`Error::InvalidArgument`].
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn collect<I>(&self, items: I) -> Result<BTreeMap<K, T>, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let key_fn: &dyn Fn(&T) -> K = self
            .key
            .as_deref()
            .ok_or_else(|| Error::invalid_argument("key function not set"))?;
        if self.merge.is_some() && self.policy != Policy::Merge {
            return Err(Error::invalid_argument(format!(
                "merge function set but unused. policy={}",
                self.policy
            )));
        }
        match self.policy {
            Policy::Reject => convert(items, key_fn),
            Policy::KeepFirst => convert_with_merge(items, key_fn, KeepFirst),
            Policy::KeepLast => convert_with_merge(items, key_fn, KeepLast),
            Policy::Merge => {
                let merge_fn: &dyn Fn(T, T) -> T = self.merge.as_deref().ok_or_else(|| {
                    Error::invalid_argument(format!("merge function not set. policy={}", self.policy))
                })?;
                convert_with_merge(items, key_fn, merge_fn_new(merge_fn))
            }
        }
    }
}
