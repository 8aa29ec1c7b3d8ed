use std::io;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use tokio_stream::wrappers::LinesStream;
use tokio_stream::{Stream, StreamExt};

use crate::error::Error;
use crate::input::lines::json::sync::{is_blank, line2item};
use crate::record::Record;

/// Converts lines to items, skipping blank lines.
pub fn from_strings<S, T, C>(strings: S, conv: C) -> impl Stream<Item = Result<T, Error>>
where
    S: Stream<Item = Result<String, io::Error>>,
    C: Fn(&str) -> Result<T, Error>,
{
    strings.filter(|r| !is_blank(r)).map(move |r| {
        let line: String = r?;
        conv(&line)
    })
}

pub fn records_from_lines<S>(lines: S) -> impl Stream<Item = Result<Record, Error>>
where
    S: Stream<Item = Result<String, io::Error>>,
{
    from_strings(lines, line2item::<Record>)
}

pub fn reader2records<R>(r: R) -> impl Stream<Item = Result<Record, Error>>
where
    R: AsyncBufRead,
{
    records_from_lines(LinesStream::new(r.lines()))
}

pub async fn path2records<P>(p: P) -> Result<impl Stream<Item = Result<Record, Error>>, Error>
where
    P: AsRef<Path>,
{
    let f: File = File::open(p).await?;
    let br = BufReader::new(f);
    Ok(reader2records(br))
}
