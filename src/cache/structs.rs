use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;

/// File-based JSON cache; one pretty-printed file per key
pub struct Cache {
    cache_dir: PathBuf,
}

impl Cache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();

        fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

        Ok(Self { cache_dir })
    }

    /// Save an API response exactly as received
    pub fn save_raw(&self, key: &str, data: &Value) -> Result<()> {
        let file_path = self.path(key);
        self.write_json(&file_path, data)?;
        info!("Saved raw data to cache: {}", file_path.display());
        Ok(())
    }

    pub fn load_raw(&self, key: &str) -> Result<Option<Value>> {
        self.read_json_opt(&self.path(key))
    }

    /// Load cached data into a typed structure
    pub fn load_parsed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        self.read_json_opt(&self.path(key))
    }

    /// File contents without parsing, for serving as-is
    pub fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read cache file {}", path.display()))?;
        Ok(Some(bytes))
    }

    pub fn last_modified(&self, key: &str) -> Result<Option<SystemTime>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        let modified = fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .with_context(|| format!("Failed to stat cache file {}", path.display()))?;
        Ok(Some(modified))
    }

    /// Check if cached data exists
    pub fn exists(&self, key: &str) -> bool {
        self.path(key).exists()
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    // --- Helper Methods ---

    /// Write to a uniquely named temp file and rename it over the target,
    /// so readers never see half a file even when writers overlap
    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;

        let mut temp = NamedTempFile::new_in(&self.cache_dir).context("Failed to create temp cache file")?;
        temp.write_all(json.as_bytes())
            .context("Failed to write cache file")?;
        temp.persist(path)
            .context("Failed to move cache file into place")?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Summary {
        count: usize,
    }

    #[test]
    fn test_cache_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::new(dir.path().join("cache")).unwrap();
        let data = json!({ "result": [], "count": 3 });

        cache.save_raw("tournaments", &data).unwrap();

        assert!(cache.exists("tournaments"));
        assert_eq!(cache.load_raw("tournaments").unwrap(), Some(data));
        assert_eq!(
            cache.load_parsed::<Summary>("tournaments").unwrap(),
            Some(Summary { count: 3 })
        );
        assert_eq!(fs::read_dir(dir.path().join("cache")).unwrap().count(), 1);
    }

    #[test]
    fn test_overlapping_writers_leave_a_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = std::sync::Arc::new(Cache::new(dir.path()).unwrap());

        let writers: Vec<_> = (0..8)
            .map(|n| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    let items: Vec<usize> = (0..2_000).collect();
                    for _ in 0..5 {
                        cache
                            .save_raw("tournaments", &json!({ "result": items, "count": n }))
                            .unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let stored = cache.load_raw("tournaments").unwrap().unwrap();
        assert_eq!(stored["result"].as_array().unwrap().len(), 2_000);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::new(dir.path()).unwrap();

        assert!(!cache.exists("tournaments"));
        assert_eq!(cache.load_raw("tournaments").unwrap(), None);
        assert_eq!(cache.read_bytes("tournaments").unwrap(), None);
        assert_eq!(cache.last_modified("tournaments").unwrap(), None);
    }

    #[test]
    fn test_raw_bytes_are_pretty_printed_and_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::new(dir.path()).unwrap();

        cache.save_raw("tournaments", &json!({ "storeName": "Pöttyös Zebra" })).unwrap();

        let text = String::from_utf8(cache.read_bytes("tournaments").unwrap().unwrap()).unwrap();
        assert!(text.contains("Pöttyös Zebra"));
        assert!(text.contains('\n'));
        assert!(cache.last_modified("tournaments").unwrap().is_some());
    }

    #[test]
    fn test_corrupt_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::new(dir.path()).unwrap();
        fs::write(cache.path("tournaments"), "{ nope").unwrap();

        assert!(cache.load_raw("tournaments").is_err());
    }
}
