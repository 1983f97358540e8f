//! Fire-and-forget archival of raw frames.
//!
//! Archival is a non-critical side effect: it runs detached from the survey
//! and its outcome is only ever logged. A survey result that has already
//! been computed is never invalidated by a storage failure.

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{SystemTime, UNIX_EPOCH};

/// Storage backend boundary (object store, filesystem, ...). Implementations
/// live outside this workspace.
pub trait FrameArchive: Send + Sync {
    fn store(&self, key: &str, bytes: &[u8]) -> Result<(), ArchiveError>;
}

#[derive(thiserror::Error, Debug)]
#[error("archive store failed: {0}")]
pub struct ArchiveError(pub String);

/// Object key for an archived frame: unix seconds plus a `.jpg` suffix.
pub fn timestamp_key() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{secs}.jpg")
}

/// Store the frame bytes on a detached thread. Errors are logged, never
/// returned; the handle is only useful to tests that want to wait.
pub fn archive_detached(
    archive: Arc<dyn FrameArchive>,
    key: String,
    bytes: Vec<u8>,
) -> JoinHandle<()> {
    std::thread::spawn(move || match archive.store(&key, &bytes) {
        Ok(()) => log::debug!("frame archived as {key}"),
        Err(err) => log::warn!("frame archival failed for {key}: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingArchive {
        stored: Mutex<Vec<(String, usize)>>,
    }

    impl FrameArchive for RecordingArchive {
        fn store(&self, key: &str, bytes: &[u8]) -> Result<(), ArchiveError> {
            self.stored
                .lock()
                .expect("unpoisoned")
                .push((key.to_string(), bytes.len()));
            Ok(())
        }
    }

    struct BrokenArchive;

    impl FrameArchive for BrokenArchive {
        fn store(&self, _: &str, _: &[u8]) -> Result<(), ArchiveError> {
            Err(ArchiveError("bucket unreachable".into()))
        }
    }

    #[test]
    fn detached_store_receives_key_and_payload() {
        let archive = Arc::new(RecordingArchive {
            stored: Mutex::new(Vec::new()),
        });
        let handle = archive_detached(archive.clone(), "123.jpg".into(), vec![7u8; 42]);
        handle.join().expect("archival thread");

        let stored = archive.stored.lock().expect("unpoisoned");
        assert_eq!(stored.as_slice(), &[("123.jpg".to_string(), 42)]);
    }

    #[test]
    fn storage_failure_is_swallowed() {
        let handle = archive_detached(Arc::new(BrokenArchive), timestamp_key(), vec![0u8; 8]);
        // Must not panic; the error is only logged.
        handle.join().expect("archival thread");
    }

    #[test]
    fn timestamp_key_has_jpg_suffix() {
        let key = timestamp_key();
        assert!(key.ends_with(".jpg"));
        assert!(key.trim_end_matches(".jpg").parse::<u64>().is_ok());
    }
}
