//! Task code interning.
//!
//! External task codes are mapped to dense integer indices at registration
//! time so the solver works on plain vectors instead of hashing strings.

use rustc_hash::FxHashMap;

/// Interned task index (u32 for compact storage and fast hashing).
pub type TaskIdx = u32;

/// Maps task codes to the index they were registered under, and back.
#[derive(Debug, Clone)]
pub struct CodeInterner {
    to_idx: FxHashMap<String, TaskIdx>,
    from_idx: Vec<String>,
}

impl CodeInterner {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_idx: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_idx: Vec::with_capacity(capacity),
        }
    }

    /// Register a code under the next free index.
    ///
    /// Returns `None` if the code was already registered; the existing
    /// mapping is left untouched.
    pub fn insert_new(&mut self, code: &str) -> Option<TaskIdx> {
        if self.to_idx.contains_key(code) {
            return None;
        }
        let idx = self.from_idx.len() as TaskIdx;
        self.from_idx.push(code.to_string());
        self.to_idx.insert(code.to_string(), idx);
        Some(idx)
    }

    #[inline]
    pub fn get(&self, code: &str) -> Option<TaskIdx> {
        self.to_idx.get(code).copied()
    }

    #[inline]
    pub fn resolve(&self, idx: TaskIdx) -> Option<&str> {
        self.from_idx.get(idx as usize).map(|s| s.as_str())
    }

    /// Number of registered codes.
    pub fn len(&self) -> usize {
        self.from_idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_idx.is_empty()
    }
}

impl Default for CodeInterner {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
