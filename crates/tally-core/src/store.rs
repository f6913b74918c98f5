//! In-memory counter store.
//!
//! Backed by a `DashMap`: every mutation holds the shard lock for its key, so
//! concurrent increments of the same counter never lose updates and
//! create-if-absent is atomic.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::counter::Counter;
use crate::error::{Result, TallyError};

pub const DEFAULT_MAX_NAME_BYTES: usize = 128;

/// Owns every counter in the process.
#[derive(Debug)]
pub struct CounterStore {
    counters: DashMap<String, u64>,
    max_name_bytes: usize,
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NAME_BYTES)
    }
}

impl CounterStore {
    pub fn new(max_name_bytes: usize) -> Self {
        Self {
            counters: DashMap::new(),
            max_name_bytes,
        }
    }

    /// Create `name` with value 0. Fails with `Conflict` if it already exists.
    pub fn create(&self, name: &str) -> Result<Counter> {
        self.validate_name(name)?;
        match self.counters.entry(name.to_string()) {
            Entry::Occupied(_) => Err(TallyError::Conflict(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(0);
                Ok(Counter::new(name, 0))
            }
        }
    }

    /// Add exactly one to `name` and return the new value.
    pub fn increment(&self, name: &str) -> Result<Counter> {
        self.validate_name(name)?;
        let mut value = self
            .counters
            .get_mut(name)
            .ok_or_else(|| TallyError::NotFound(name.to_string()))?;
        let next = value
            .checked_add(1)
            .ok_or_else(|| TallyError::Internal(format!("counter overflow: {name}")))?;
        *value = next;
        Ok(Counter::new(name, next))
    }

    pub fn get(&self, name: &str) -> Result<Counter> {
        self.validate_name(name)?;
        self.counters
            .get(name)
            .map(|v| Counter::new(name, *v.value()))
            .ok_or_else(|| TallyError::NotFound(name.to_string()))
    }

    /// Remove `name`. Returns whether a counter was actually removed.
    ///
    /// Never fails: a name that could not have been created simply misses.
    pub fn delete(&self, name: &str) -> bool {
        self.counters.remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    fn validate_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(TallyError::BadRequest("counter name must not be empty".into()));
        }
        if name.len() > self.max_name_bytes {
            tracing::debug!(len = name.len(), max = self.max_name_bytes, "counter name rejected");
            return Err(TallyError::BadRequest(format!(
                "counter name exceeds {} bytes",
                self.max_name_bytes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn increment_at_max_is_rejected_and_value_kept() {
        let store = CounterStore::default();
        store.counters.insert("big".into(), u64::MAX);

        let err = store.increment("big").unwrap_err();
        assert_eq!(err.client_code().as_str(), "INTERNAL");
        assert_eq!(store.get("big").unwrap().value, u64::MAX);
    }
}
