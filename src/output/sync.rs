use core::fmt::Display;

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::Error;

pub fn save_many<I, T, O, E>(mut inputs: I, mut saver: O) -> Result<u64, E>
where
    I: Iterator<Item = T>,
    O: FnMut(T) -> Result<u64, E>,
{
    inputs.try_fold(0, |cnt, input| saver(input).map(|c| c + cnt))
}

pub fn entry_line<K, V>(key: &K, val: &V) -> String
where
    K: Display,
    V: Display,
{
    format!("key = {key}, value = {val}")
}

/// Writes all entries of a map(one line per entry, in key order).
///
/// Returns number of lines written.
pub fn write_entries<K, V, W>(m: &BTreeMap<K, V>, w: &mut W) -> Result<u64, Error>
where
    K: Display,
    V: Display,
    W: Write,
{
    let cnt: u64 = save_many(m.iter(), |pair| {
        let (k, v) = pair;
        writeln!(w, "{}", entry_line(k, v))?;
        Ok::<_, Error>(1)
    })?;
    w.flush()?;
    Ok(cnt)
}
