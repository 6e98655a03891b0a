//! Dictionary persistence: named collections of recovered entries.
//!
//! The store trades in opaque JSON blobs keyed by dictionary name, so any
//! key-value backend satisfies it. [`MemoryStore`] is the in-process
//! implementation used by tests and short-lived tooling.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use trilex::VocabularyEntry;

use crate::error::StoreError;

/// A named word collection with its entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    pub name: String,
    #[serde(default)]
    pub words: Vec<VocabularyEntry>,
    /// Unix timestamp (seconds) of the last mutation.
    #[serde(default)]
    pub last_updated: u64,
}

impl Dictionary {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            words: Vec::new(),
            last_updated: now(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|entry| entry.word == word)
    }

    /// Inserts the entry, replacing an existing one for the same word.
    pub fn upsert(&mut self, entry: VocabularyEntry) {
        match self.words.iter_mut().find(|e| e.word == entry.word) {
            Some(existing) => *existing = entry,
            None => self.words.push(entry),
        }
        self.last_updated = now();
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// A key-value store of dictionaries.
pub trait DictionaryStore: Send + Sync {
    /// Names of all stored dictionaries.
    fn names(&self) -> Result<Vec<String>, StoreError>;

    /// Loads a dictionary, `None` when the name is unknown.
    fn get(&self, name: &str) -> Result<Option<Dictionary>, StoreError>;

    /// Saves the dictionary under its own name, replacing any previous blob.
    fn save(&self, dictionary: &Dictionary) -> Result<(), StoreError>;

    /// Deletes a dictionary; returns whether it existed.
    fn delete(&self, name: &str) -> Result<bool, StoreError>;
}

/// In-process store keeping serialized blobs in a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DictionaryStore for MemoryStore {
    fn names(&self) -> Result<Vec<String>, StoreError> {
        let blobs = self.blobs.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = blobs.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn get(&self, name: &str) -> Result<Option<Dictionary>, StoreError> {
        let blobs = self.blobs.read().unwrap_or_else(PoisonError::into_inner);
        match blobs.get(name) {
            Some(blob) => Ok(Some(serde_json::from_str(blob)?)),
            None => Ok(None),
        }
    }

    fn save(&self, dictionary: &Dictionary) -> Result<(), StoreError> {
        let blob = serde_json::to_string(dictionary)?;
        let mut blobs = self.blobs.write().unwrap_or_else(PoisonError::into_inner);
        blobs.insert(dictionary.name.clone(), blob);
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<bool, StoreError> {
        let mut blobs = self.blobs.write().unwrap_or_else(PoisonError::into_inner);
        Ok(blobs.remove(name).is_some())
    }
}
