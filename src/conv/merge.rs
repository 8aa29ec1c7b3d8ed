use core::fmt::Debug;

use std::collections::BTreeMap;

use crate::error::Error;

/// Merger which creates a value to keep from an existing value and a new value.
pub trait Merge<V> {
    fn merge(&self, old: V, new: V) -> Result<V, Error>;
}

impl<V, M> Merge<V> for &M
where
    M: Merge<V> + ?Sized,
{
    fn merge(&self, old: V, new: V) -> Result<V, Error> {
        (**self).merge(old, new)
    }
}

/// Keeps the value seen first.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepFirst;

impl<V> Merge<V> for KeepFirst {
    fn merge(&self, old: V, _new: V) -> Result<V, Error> {
        Ok(old)
    }
}

/// Keeps the value seen last.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepLast;

impl<V> Merge<V> for KeepLast {
    fn merge(&self, _old: V, new: V) -> Result<V, Error> {
        Ok(new)
    }
}

#[derive(Clone, Copy)]
pub struct MergeFn<F> {
    f: F,
}

impl<V, F> Merge<V> for MergeFn<F>
where
    F: Fn(V, V) -> V,
{
    fn merge(&self, old: V, new: V) -> Result<V, Error> {
        Ok((self.f)(old, new))
    }
}

/// Creates a [`Merge`] from an infallible function `(old, new) -> kept`.
pub fn merge_fn_new<V, F>(f: F) -> MergeFn<F>
where
    F: Fn(V, V) -> V,
{
    MergeFn { f }
}

#[derive(Clone, Copy)]
pub struct TryMergeFn<F> {
    f: F,
}

impl<V, F> Merge<V> for TryMergeFn<F>
where
    F: Fn(V, V) -> Result<V, Error>,
{
    fn merge(&self, old: V, new: V) -> Result<V, Error> {
        (self.f)(old, new)
    }
}

/// Creates a [`Merge`] from a fallible function.
pub fn try_merge_fn_new<V, F>(f: F) -> TryMergeFn<F>
where
    F: Fn(V, V) -> Result<V, Error>,
{
    TryMergeFn { f }
}

/// Creates a [`BTreeMap`] from items, merging values of the same key.
///
/// Values of a key are folded from left to right:
/// the first value is the initial accumulator, then `merger.merge(acc, next)`.
///
/// ## Errors
/// Only the errors returned by the merger.
pub fn to_map_merged<I, T, K, V, KF, VF, M>(
    items: I,
    key_fn: KF,
    val_fn: VF,
    merger: M,
) -> Result<BTreeMap<K, V>, Error>
where
    I: IntoIterator<Item = T>,
    K: Ord + Debug,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
    M: Merge<V>,
{
    let mut merged: usize = 0;
    let m: BTreeMap<K, V> = items.into_iter().try_fold(BTreeMap::new(), |mut m, item| {
        let key: K = key_fn(&item);
        let val: V = val_fn(item);
        let neo: V = match m.remove(&key) {
            None => val,
            Some(old) => {
                merged += 1;
                merger.merge(old, val)?
            }
        };
        m.insert(key, neo);
        Ok::<_, Error>(m)
    })?;
    log::debug!(
        "converted to a map. entries={}, merged={merged}",
        m.len()
    );
    Ok(m)
}

/// Creates a [`BTreeMap`] which maps a key of a record to the record itself,
/// resolving key collisions using the merger.
pub fn convert_with_merge<I, T, K, F, M>(
    records: I,
    key_fn: F,
    merger: M,
) -> Result<BTreeMap<K, T>, Error>
where
    I: IntoIterator<Item = T>,
    K: Ord + Debug,
    F: Fn(&T) -> K,
    M: Merge<T>,
{
    to_map_merged(records, key_fn, core::convert::identity, merger)
}
