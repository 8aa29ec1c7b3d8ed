use core::fmt;

use serde::{Deserialize, Serialize};

/// An immutable product record(id + name).
///
/// The id is the natural key of a record, but it is not unique:
/// a list of records may contain many records with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: i64,
    name: String,
}

impl Record {
    pub fn of<S>(id: i64, name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Record(id={}, name={})", self.id, self.name)
    }
}
