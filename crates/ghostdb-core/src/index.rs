//! Value-count index
//!
//! Secondary structure mapping each value to the number of live keys holding
//! it. Reads of unseen values answer 0 without inserting anything, and a value
//! whose count drops to zero is removed, so the index only ever holds values
//! that some key currently maps to.

use hashbrown::HashMap;

/// Value → count of keys currently holding that value.
#[derive(Debug, Default, Clone)]
pub struct ValueIndex {
    counts: HashMap<String, usize>,
}

impl ValueIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self { counts: HashMap::new() }
    }

    /// One more key now holds `value`.
    pub fn increment(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_owned(), 1);
            }
        }
    }

    /// One key no longer holds `value`.
    ///
    /// Drops the entry when the count reaches zero. Decrementing a value the
    /// index does not know is a no-op.
    pub fn decrement(&mut self, value: &str) {
        if let Some(count) = self.counts.get_mut(value) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(value);
            }
        }
    }

    /// Number of keys holding `value`, 0 if none.
    pub fn count(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Distinct values held by at least one key.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no key holds any value.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (value, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(v, c)| (v.as_str(), *c))
    }
}
