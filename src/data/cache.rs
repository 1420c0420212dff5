//! Click Store Module
//! Memoizes loaded click tables by sampling parameter.

use crate::data::loader::{ClickSource, LoaderError};
use crate::data::processor::DataProcessor;
use polars::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};

/// Cache key: the full table or a seeded sample of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKey {
    Full,
    Rows(usize),
}

impl From<Option<usize>> for SampleKey {
    fn from(sample_size: Option<usize>) -> Self {
        match sample_size {
            Some(n) => SampleKey::Rows(n),
            None => SampleKey::Full,
        }
    }
}

impl fmt::Display for SampleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleKey::Full => write!(f, "full"),
            SampleKey::Rows(n) => write!(f, "sample({})", n),
        }
    }
}

/// Process-wide table cache in front of a [`ClickSource`].
///
/// Entries are never invalidated: the backing file is treated as immutable
/// for the life of the process. Failed loads are not stored.
pub struct ClickStore<S: ClickSource> {
    source: S,
    tables: Mutex<HashMap<SampleKey, DataFrame>>,
    reads: AtomicUsize,
}

impl<S: ClickSource> ClickStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            tables: Mutex::new(HashMap::new()),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the table for `sample_size`, reading the source only on a miss.
    ///
    /// `None` (and any size at or above the full row count) yields the full
    /// table; the two are still cached under distinct keys.
    pub fn load(&self, sample_size: Option<usize>) -> Result<DataFrame, LoaderError> {
        let key = SampleKey::from(sample_size);

        if let Some(df) = self.cached(key) {
            debug!(%key, "click table cache hit");
            return Ok(df);
        }

        info!(%key, source = %self.source.describe(), "click table cache miss");
        self.reads.fetch_add(1, Ordering::Relaxed);
        let full = self.source.read()?;

        let table = match key {
            SampleKey::Rows(n) if n < full.height() => DataProcessor::sample_rows(&full, n)?,
            _ => full,
        };

        // Lock is not held while reading; a concurrent miss on the same key
        // keeps whichever table landed first.
        let mut tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        Ok(tables.entry(key).or_insert(table).clone())
    }

    /// Number of times the underlying source has been read.
    pub fn source_reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    pub fn cached_keys(&self) -> Vec<SampleKey> {
        let tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        tables.keys().copied().collect()
    }

    fn cached(&self, key: SampleKey) -> Option<DataFrame> {
        let tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        tables.get(&key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    struct MemorySource {
        rows: usize,
        fail: AtomicBool,
    }

    impl MemorySource {
        fn new(rows: usize) -> Self {
            Self {
                rows,
                fail: AtomicBool::new(false),
            }
        }
    }

    impl ClickSource for MemorySource {
        fn read(&self) -> Result<DataFrame, LoaderError> {
            if self.fail.load(Ordering::Relaxed) {
                return Err(LoaderError::DataMalformed("boom".to_string()));
            }
            let ids: Vec<i64> = (0..self.rows as i64).collect();
            Ok(df!("ip" => ids).unwrap())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    #[test]
    fn repeated_load_hits_cache() {
        let store = ClickStore::new(MemorySource::new(5000));
        let first = store.load(Some(1000)).unwrap();
        let second = store.load(Some(1000)).unwrap();

        assert_eq!(store.source_reads(), 1);
        assert!(first.equals(&second));
        assert_eq!(first.height(), 1000);
    }

    #[test]
    fn full_and_sampled_are_distinct_keys() {
        let store = ClickStore::new(MemorySource::new(3000));
        assert_eq!(store.load(None).unwrap().height(), 3000);
        assert_eq!(store.load(Some(2000)).unwrap().height(), 2000);
        assert_eq!(store.load(Some(5000)).unwrap().height(), 3000);
        assert_eq!(store.source_reads(), 3);

        let mut keys = store.cached_keys();
        keys.sort_by_key(|k| match k {
            SampleKey::Full => 0,
            SampleKey::Rows(n) => *n,
        });
        assert_eq!(
            keys,
            vec![SampleKey::Full, SampleKey::Rows(2000), SampleKey::Rows(5000)]
        );
    }

    #[test]
    fn failed_load_is_not_cached() {
        let store = ClickStore::new(MemorySource::new(1500));
        store.source().fail.store(true, Ordering::Relaxed);
        assert!(store.load(None).is_err());
        assert!(store.cached_keys().is_empty());

        store.source().fail.store(false, Ordering::Relaxed);
        assert_eq!(store.load(None).unwrap().height(), 1500);
        assert_eq!(store.source_reads(), 2);
    }

    #[test]
    fn sample_key_display() {
        assert_eq!(SampleKey::Full.to_string(), "full");
        assert_eq!(SampleKey::from(Some(10_000)).to_string(), "sample(10000)");
    }
}
