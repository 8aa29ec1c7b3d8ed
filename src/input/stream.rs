//! List-to-map conversion of streams.
//!
//! The stream is consumed sequentially; the first error stops the conversion.

use core::fmt::Debug;

use std::collections::BTreeMap;

use futures::Stream;
use futures::StreamExt;
use futures::TryStreamExt;

use crate::conv::merge::Merge;
use crate::error::Error;

/// Creates a [`BTreeMap`] from a stream of items; fails on the first duplicate key.
pub async fn to_map<S, T, K, V, KF, VF>(
    items: S,
    key_fn: KF,
    val_fn: VF,
) -> Result<BTreeMap<K, V>, Error>
where
    S: Stream<Item = Result<T, Error>>,
    K: Ord + Debug,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    let kf: &KF = &key_fn;
    let vf: &VF = &val_fn;
    let indexed = items.enumerate().map(|pair: (usize, _)| {
        let (ix, item) = pair;
        item.map(|t: T| (ix, t))
    });
    let m: BTreeMap<K, V> = indexed
        .try_fold(BTreeMap::new(), |mut m, pair| async move {
            let (ix, item) = pair;
            let key: K = kf(&item);
            if m.contains_key(&key) {
                log::warn!("duplicate key rejected. key={key:?}, index={ix}");
                return Err(Error::duplicate_key(&key, ix));
            }
            m.insert(key, vf(item));
            Ok::<_, Error>(m)
        })
        .await?;
    log::debug!("converted a stream to a map. entries={}", m.len());
    Ok(m)
}

/// Creates a [`BTreeMap`] from a stream of items, merging values of the same key.
pub async fn to_map_merged<S, T, K, V, KF, VF, M>(
    items: S,
    key_fn: KF,
    val_fn: VF,
    merger: M,
) -> Result<BTreeMap<K, V>, Error>
where
    S: Stream<Item = Result<T, Error>>,
    K: Ord + Debug,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
    M: Merge<V>,
{
    let kf: &KF = &key_fn;
    let vf: &VF = &val_fn;
    let mr: &M = &merger;
    let (m, merged): (BTreeMap<K, V>, usize) = items
        .try_fold((BTreeMap::new(), 0), |state, item| async move {
            let (mut m, mut merged) = state;
            let key: K = kf(&item);
            let val: V = vf(item);
            let neo: V = match m.remove(&key) {
                None => val,
                Some(old) => {
                    merged += 1;
                    mr.merge(old, val)?
                }
            };
            m.insert(key, neo);
            Ok::<_, Error>((m, merged))
        })
        .await?;
    log::debug!(
        "converted a stream to a map. entries={}, merged={merged}",
        m.len()
    );
    Ok(m)
}

pub async fn convert_stream<S, T, K, F>(records: S, key_fn: F) -> Result<BTreeMap<K, T>, Error>
where
    S: Stream<Item = Result<T, Error>>,
    K: Ord + Debug,
    F: Fn(&T) -> K,
{
    to_map(records, key_fn, core::convert::identity).await
}

pub async fn convert_stream_with_merge<S, T, K, F, M>(
    records: S,
    key_fn: F,
    merger: M,
) -> Result<BTreeMap<K, T>, Error>
where
    S: Stream<Item = Result<T, Error>>,
    K: Ord + Debug,
    F: Fn(&T) -> K,
    M: Merge<T>,
{
    to_map_merged(records, key_fn, core::convert::identity, merger).await
}
