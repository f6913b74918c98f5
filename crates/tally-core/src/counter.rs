//! Counter value type.
//!
//! On the wire a counter is a single-entry object keyed by its own name,
//! e.g. `{"foo": 3}`, so it serializes as a map rather than a struct.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A named counter snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub value: u64,
}

impl Counter {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Serialize for Counter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}
