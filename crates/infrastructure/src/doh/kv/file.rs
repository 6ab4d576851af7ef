use async_trait::async_trait;
use ferrous_doh_application::ports::KeyValueStore;
use ferrous_doh_domain::DomainError;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Distinguishes temporary files of concurrent writers within one process.
static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// One file per key inside a directory. Writes go through a temporary file
/// and a rename so readers never observe a half-written value. Concurrent
/// writers each get their own temporary file; the last rename wins.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(DomainError::Storage(format!("invalid key '{}'", key)));
        }
        Ok(self.dir.join(key))
    }
}

#[async_trait]
impl KeyValueStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let path = self.path_for(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::IoError(format!(
                "reading {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DomainError::IoError(format!("creating {}: {}", self.dir.display(), e)))?;

        let tmp = self.dir.join(format!(
            ".{}.{}.{}.tmp",
            key,
            std::process::id(),
            TMP_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        let written = match tokio::fs::write(&tmp, &value).await {
            Ok(()) => tokio::fs::rename(&tmp, &path)
                .await
                .map_err(|e| format!("renaming {}: {}", tmp.display(), e)),
            Err(e) => Err(format!("writing {}: {}", tmp.display(), e)),
        };
        if let Err(message) = written {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(DomainError::IoError(message));
        }

        debug!(path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path());
        assert!(store.get("metrics_v1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path().join("nested"));
        store.put("metrics_v1", b"{}".to_vec()).await.unwrap();
        store.put("metrics_v1", b"{\"a\":1}".to_vec()).await.unwrap();
        assert_eq!(
            store.get("metrics_v1").await.unwrap(),
            Some(b"{\"a\":1}".to_vec())
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_puts_keep_a_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(FileKvStore::new(dir.path()));
        let values: Vec<Vec<u8>> = (1..=6).map(|i| vec![b'a' + i as u8; i * 97]).collect();

        for _ in 0..50 {
            let writers: Vec<_> = values
                .iter()
                .cloned()
                .map(|value| {
                    let store = store.clone();
                    tokio::spawn(async move { store.put("metrics_v1", value).await })
                })
                .collect();
            for writer in writers {
                writer.await.unwrap().unwrap();
            }

            let stored = store.get("metrics_v1").await.unwrap().unwrap();
            assert!(values.contains(&stored), "stored {} bytes", stored.len());
        }

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path());
        assert!(store.get("../etc/passwd").await.is_err());
        assert!(store.put("..", vec![]).await.is_err());
    }
}
