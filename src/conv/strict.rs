use core::fmt::Debug;

use std::collections::BTreeMap;

use crate::error::Error;

/// Creates a [`BTreeMap`] from items; fails on the first duplicate key.
///
/// ## Arguments
/// - items: Items to be converted(the order is the order of duplicate detection)
/// - key_fn: Gets a key from an item
/// - val_fn: Converts an item to a value
///
/// ## Errors
/// [`Error::DuplicateKey`] with the key and the index of the first item whose key
/// was already seen. No map is returned in that case.
pub fn to_map<I, T, K, V, KF, VF>(
    items: I,
    key_fn: KF,
    val_fn: VF,
) -> Result<BTreeMap<K, V>, Error>
where
    I: IntoIterator<Item = T>,
    K: Ord + Debug,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    let mut indexed = items.into_iter().enumerate();
    let m: BTreeMap<K, V> = indexed.try_fold(BTreeMap::new(), |mut m, pair| {
        let (ix, item) = pair;
        let key: K = key_fn(&item);
        if m.contains_key(&key) {
            log::warn!("duplicate key rejected. key={key:?}, index={ix}");
            return Err(Error::duplicate_key(&key, ix));
        }
        m.insert(key, val_fn(item));
        Ok(m)
    })?;
    log::debug!("converted to a map. entries={}", m.len());
    Ok(m)
}

/// Creates a [`BTreeMap`] which maps a key of a record to the record itself.
///
/// This is a strict conversion: any key collision is an error.
pub fn convert<I, T, K, F>(records: I, key_fn: F) -> Result<BTreeMap<K, T>, Error>
where
    I: IntoIterator<Item = T>,
    K: Ord + Debug,
    F: Fn(&T) -> K,
{
    to_map(records, key_fn, core::convert::identity)
}
