// Data shapes stored in `users.json`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One name/email pair, stored exactly as the operator typed it.
///
/// Members other than `name` and `email` found in an existing file are
/// collected into `extra` and written back as they were.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        UserRecord {
            name: name.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }
}

/// Every record in the file, in insertion order. Duplicates are allowed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct UserCollection {
    records: Vec<UserRecord>,
}

impl UserCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collection with `record` added at the end.
    pub fn append(mut self, record: UserRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }
}

impl From<Vec<UserRecord>> for UserCollection {
    fn from(records: Vec<UserRecord>) -> Self {
        UserCollection { records }
    }
}
