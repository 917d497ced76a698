//! Named store of completed analyses.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::result::AnalysisResult;

/// Thread-safe map from signal name to its analysis bundle.
///
/// Entries are shared as [`Arc`]s: a reader clones the handle and drops
/// the lock immediately, so a retrieved bundle stays valid even if the
/// entry is later replaced or removed. Inserts take the write lock, one
/// writer at a time.
#[derive(Debug, Default)]
pub struct ResultStore {
    entries: RwLock<BTreeMap<String, Arc<AnalysisResult>>>,
}

impl ResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `result` under `name`, returning the entry it replaced.
    pub fn insert(
        &self,
        name: impl Into<String>,
        result: Arc<AnalysisResult>,
    ) -> Option<Arc<AnalysisResult>> {
        self.write().insert(name.into(), result)
    }

    /// Returns the bundle stored under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<AnalysisResult>> {
        self.read().get(name).cloned()
    }

    /// Returns all stored names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Returns the number of stored bundles.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Removes and returns the bundle stored under `name`.
    pub fn remove(&self, name: &str) -> Option<Arc<AnalysisResult>> {
        self.write().remove(name)
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.write().clear();
    }

    // Poisoning is ignored: every write is a single map operation.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Arc<AnalysisResult>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Arc<AnalysisResult>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epimode_emd::{EmdConfig, Signal, decompose};
    use epimode_hilbert::{SpectralConfig, analyze};

    fn result(name: &str) -> Arc<AnalysisResult> {
        let samples: Vec<f64> = (0..40).map(|i| (i as f64 * 1.1).sin()).collect();
        let signal = Signal::new(samples.clone()).unwrap();
        let d = decompose(&signal, &EmdConfig::default()).unwrap();
        let s = analyze(&d.to_matrix(), &SpectralConfig::default()).unwrap();
        Arc::new(AnalysisResult::new(name, &samples, 1.0, &d, s))
    }

    #[test]
    fn insert_get_remove() {
        let store = ResultStore::new();
        assert!(store.is_empty());
        assert!(store.insert("a", result("a")).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().signal_name, "a");
        assert!(store.get("b").is_none());
        assert!(store.remove("a").is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn names_are_sorted() {
        let store = ResultStore::new();
        for n in ["zika", "dengue", "malaria"] {
            store.insert(n, result(n));
        }
        assert_eq!(store.names(), vec!["dengue", "malaria", "zika"]);
    }

    #[test]
    fn insert_replaces_and_old_handle_survives() {
        let store = ResultStore::new();
        store.insert("x", result("first"));
        let held = store.get("x").unwrap();
        let replaced = store.insert("x", result("second")).unwrap();
        assert_eq!(replaced.signal_name, "first");
        assert_eq!(held.signal_name, "first");
        assert_eq!(store.get("x").unwrap().signal_name, "second");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_empties_store() {
        let store = ResultStore::new();
        store.insert("a", result("a"));
        store.insert("b", result("b"));
        store.clear();
        assert!(store.is_empty());
        assert!(store.names().is_empty());
    }

    #[test]
    fn store_is_send_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ResultStore>();
        assert_impl::<Arc<AnalysisResult>>();
    }
}
