use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::record::Record;

/// Decodes a json line; blank lines are not expected here.
pub fn line2item<T>(line: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let t: T = serde_json::from_str(line)?;
    Ok(t)
}

pub fn is_blank(line: &Result<String, io::Error>) -> bool {
    matches!(line, Ok(s) if s.trim().is_empty())
}

/// Converts lines to items, skipping blank lines.
pub fn from_strings<I, T, C>(strings: I, conv: C) -> impl Iterator<Item = Result<T, Error>>
where
    I: Iterator<Item = Result<String, io::Error>>,
    C: Fn(&str) -> Result<T, Error>,
{
    strings.filter(|r| !is_blank(r)).map(move |r| {
        let line: String = r?;
        conv(&line)
    })
}

pub fn records_from_lines<I>(lines: I) -> impl Iterator<Item = Result<Record, Error>>
where
    I: Iterator<Item = Result<String, io::Error>>,
{
    from_strings(lines, line2item::<Record>)
}

pub fn reader2records<R>(r: R) -> impl Iterator<Item = Result<Record, Error>>
where
    R: BufRead,
{
    records_from_lines(r.lines())
}

pub fn path2records<P>(p: P) -> Result<impl Iterator<Item = Result<Record, Error>>, Error>
where
    P: AsRef<Path>,
{
    let f: File = File::open(p)?;
    let br = BufReader::new(f);
    Ok(reader2records(br))
}

#[cfg(test)]
mod test_sync {
    mod reader2records {
        use std::collections::BTreeMap;

        use crate::error::Error;
        use crate::record::Record;

        const LINES: &str = r#"{"id":1,"name":"상품1old"}

{"id":1,"name":"상품1new"}
{"id":3,"name":"상품3"}
"#;

        #[test]
        fn decoded() {
            let records: Vec<Record> =
                crate::input::lines::json::sync::reader2records(LINES.as_bytes())
                    .collect::<Result<_, _>>()
                    .unwrap();
            assert_eq!(
                vec![
                    Record::of(1, "상품1old"),
                    Record::of(1, "상품1new"),
                    Record::of(3, "상품3"),
                ],
                records
            );
        }

        #[test]
        fn converted_with_merge() {
            let records: Vec<Record> =
                crate::input::lines::json::sync::reader2records(LINES.as_bytes())
                    .collect::<Result<_, _>>()
                    .unwrap();
            let got: BTreeMap<i64, Record> = crate::conv::merge::convert_with_merge(
                records,
                Record::id,
                crate::conv::merge::KeepLast,
            )
            .unwrap();
            assert_eq!("상품1new", got.get(&1).unwrap().name());
        }

        #[test]
        fn malformed() {
            let mut rows = crate::input::lines::json::sync::reader2records(
                r#"{"id":"one","name":"x"}"#.as_bytes(),
            );
            let first = rows.next().unwrap();
            assert!(matches!(first, Err(Error::Decode(_))));
        }
    }

    mod path2records {
        use std::path::PathBuf;

        use crate::error::Error;
        use crate::record::Record;

        #[test]
        fn from_file() {
            let p: PathBuf = std::env::temp_dir().join(format!(
                "list2map-sync-{}.jsonl",
                std::process::id()
            ));
            std::fs::write(
                &p,
                "{\"id\":1,\"name\":\"상품1old\"}\n{\"id\":1,\"name\":\"상품1new\"}\n{\"id\":3,\"name\":\"상품3\"}\n",
            )
            .unwrap();
            let got: Result<Vec<Record>, Error> = crate::input::lines::json::sync::path2records(&p)
                .unwrap()
                .collect();
            std::fs::remove_file(&p).unwrap();
            assert_eq!(
                vec![
                    Record::of(1, "상품1old"),
                    Record::of(1, "상품1new"),
                    Record::of(3, "상품3"),
                ],
                got.unwrap()
            );
        }

        #[test]
        fn missing_file() {
            let got = crate::input::lines::json::sync::path2records(
                "/path/to/missing/list2map/records.jsonl",
            );
            assert!(matches!(got, Err(Error::Io(_))));
        }
    }
}
