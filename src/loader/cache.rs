//! Load-once cache for the dataset files.
//!
//! Entries are keyed by canonical path and invalidated when the file's
//! modification time or length changes. The cache is a plain value owned by
//! the caller, so each test can start from an empty one.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use crate::error::LoadError;
use crate::loader::boundaries::{ProvinceBoundary, load_boundaries};
use crate::loader::records::load_records;
use crate::record::AnimalRecord;

/// Identity of a file's contents as far as the cache is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSignature {
    pub modified: Option<SystemTime>,
    pub len: u64,
}

impl FileSignature {
    pub fn of(path: &Path) -> Result<Self, LoadError> {
        let meta = std::fs::metadata(path).map_err(|e| LoadError::io(path, e))?;
        Ok(Self {
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

struct Entry<T> {
    signature: FileSignature,
    value: Arc<T>,
}

#[derive(Default)]
pub struct DatasetCache {
    records: HashMap<PathBuf, Entry<Vec<AnimalRecord>>>,
    boundaries: HashMap<PathBuf, Entry<ProvinceBoundary>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the normalized records at `path`, reading the file only when
    /// it is not cached or has changed since the last read.
    pub fn load_records(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Arc<Vec<AnimalRecord>>, LoadError> {
        get_or_load(&mut self.records, path.as_ref(), load_records)
    }

    /// Returns the boundaries at `path`, with the same caching rule as
    /// [`DatasetCache::load_records`].
    pub fn load_boundaries(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Arc<ProvinceBoundary>, LoadError> {
        get_or_load(&mut self.boundaries, path.as_ref(), load_boundaries)
    }

    pub fn len(&self) -> usize {
        self.records.len() + self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.boundaries.clear();
    }
}

fn get_or_load<T>(
    entries: &mut HashMap<PathBuf, Entry<T>>,
    path: &Path,
    load: impl FnOnce(&Path) -> Result<T, LoadError>,
) -> Result<Arc<T>, LoadError> {
    let key = std::fs::canonicalize(path).map_err(|e| LoadError::io(path, e))?;
    let signature = FileSignature::of(&key)?;

    if let Some(entry) = entries.get(&key) {
        if entry.signature == signature {
            debug!(path = %key.display(), "Dataset cache hit");
            return Ok(Arc::clone(&entry.value));
        }
        debug!(path = %key.display(), "Dataset changed on disk, reloading");
    } else {
        debug!(path = %key.display(), "Dataset cache miss");
    }

    let value = Arc::new(load(&key)?);
    entries.insert(
        key,
        Entry {
            signature,
            value: Arc::clone(&value),
        },
    );
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    const HEADER: &str = "careNm,happenDt,processState,neuterYn,sexCd,lat,lng\n";

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_unchanged_file_is_cached() {
        let path = temp_path("shelter_report_cache_hit.csv");
        fs::write(&path, format!("{HEADER}A,20210301,보호중,Y,M,1.0,1.0\n")).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.load_records(&path).unwrap();
        let second = cache.load_records(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_fresh_caches_return_equal_values() {
        let path = temp_path("shelter_report_cache_fresh.csv");
        fs::write(&path, format!("{HEADER}A(x),20220101,종료(입양),N,F,2.0,3.0\n")).unwrap();

        let first = DatasetCache::new().load_records(&path).unwrap();
        let second = DatasetCache::new().load_records(&path).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_changed_file_is_reloaded() {
        let path = temp_path("shelter_report_cache_reload.csv");
        fs::write(&path, format!("{HEADER}A,20210301,보호중,Y,M,1.0,1.0\n")).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.load_records(&path).unwrap();
        assert_eq!(first.len(), 1);

        fs::write(
            &path,
            format!(
                "{HEADER}A,20210301,보호중,Y,M,1.0,1.0\n\
                 B,20220301,종료(반환),U,Q,2.0,2.0\n"
            ),
        )
        .unwrap();

        let second = cache.load_records(&path).unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(cache.len(), 1);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let path = temp_path("shelter_report_cache_bad.csv");
        fs::write(&path, format!("{HEADER}A,bad-date,보호중,Y,M,1.0,1.0\n")).unwrap();

        let mut cache = DatasetCache::new();
        assert!(cache.load_records(&path).is_err());
        assert!(cache.is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_boundaries_are_cached() {
        let path = temp_path("shelter_report_cache_bounds.json");
        fs::write(&path, r#"{"type": "FeatureCollection", "features": []}"#).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.load_boundaries(&path).unwrap();
        let second = cache.load_boundaries(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.feature_count(), 0);

        cache.clear();
        assert!(cache.is_empty());

        fs::remove_file(&path).unwrap();
    }
}
