//! Transactional refcount store for CAS blobs (§3, §4.B algorithm 1, §9).
//!
//! A process-wide sidecar file (`.refcounts`) holds the `digest -> count`
//! map, guarded by a single `parking_lot::Mutex` so that a blob's presence
//! check, the write-if-missing of its bytes, and the refcount bump happen as
//! one critical section — the "single transaction per ref change" discipline
//! §5's shared-resource table requires.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use parking_lot::Mutex;

/// Digest-keyed reference counts for CAS blobs, persisted as JSON.
pub struct RefcountStore {
    path: PathBuf,
    counts: Mutex<HashMap<String, u64>>,
}

impl RefcountStore {
    /// Load the refcount table from `path`, treating a missing file as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load(path: PathBuf) -> io::Result<Self> {
        let counts = match std::fs::read(&path) {
            Ok(data) => serde_json::from_slice(&data).unwrap_or_default(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };
        Ok(Self {
            path,
            counts: Mutex::new(counts),
        })
    }

    /// Current refcount for `digest`, `0` if untracked.
    #[must_use]
    pub fn get(&self, digest: &str) -> u64 {
        *self.counts.lock().get(digest).unwrap_or(&0)
    }

    /// Add a reference to `digest`, running `write_blob` first if this is the
    /// first reference (the blob doesn't exist yet).
    ///
    /// # Errors
    ///
    /// Returns an error if `write_blob` fails or the table can't be persisted.
    /// On failure the in-memory count is left unchanged.
    pub fn insert_reference(
        &self,
        digest: &str,
        write_blob: impl FnOnce() -> io::Result<()>,
    ) -> io::Result<()> {
        let mut counts = self.counts.lock();
        let is_new = !counts.contains_key(digest);
        if is_new {
            write_blob()?;
        }
        *counts.entry(digest.to_owned()).or_insert(0) += 1;
        self.persist(&counts)
    }

    /// Remove a reference to `digest`, running `remove_blob` if the count
    /// drops to zero (the last reference is gone).
    ///
    /// # Errors
    ///
    /// Returns an error if `remove_blob` fails or the table can't be persisted.
    pub fn release_reference(
        &self,
        digest: &str,
        remove_blob: impl FnOnce() -> io::Result<()>,
    ) -> io::Result<()> {
        let mut counts = self.counts.lock();
        match counts.get_mut(digest) {
            Some(count) if *count > 1 => {
                *count -= 1;
            }
            Some(_) => {
                counts.remove(digest);
                remove_blob()?;
            }
            None => {}
        }
        self.persist(&counts)
    }

    fn persist(&self, counts: &HashMap<String, u64>) -> io::Result<()> {
        let data = serde_json::to_vec(counts)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, &data)?;
        std::fs::rename(&tmp, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, RefcountStore) {
        let dir = tempfile::tempdir().expect("test tempdir");
        let path = dir.path().join(".refcounts");
        let store = RefcountStore::load(path).expect("test load");
        (dir, store)
    }

    #[test]
    fn test_should_start_at_zero_for_unknown_digest() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get("abc"), 0);
    }

    #[test]
    fn test_should_write_blob_only_on_first_reference() {
        let (_dir, store) = temp_store();
        let mut writes = 0;
        store
            .insert_reference("abc", || {
                writes += 1;
                Ok(())
            })
            .expect("test insert");
        store
            .insert_reference("abc", || {
                writes += 1;
                Ok(())
            })
            .expect("test insert");
        assert_eq!(writes, 1);
        assert_eq!(store.get("abc"), 2);
    }

    #[test]
    fn test_should_remove_blob_only_when_count_reaches_zero() {
        let (_dir, store) = temp_store();
        store.insert_reference("abc", || Ok(())).unwrap();
        store.insert_reference("abc", || Ok(())).unwrap();
        store.insert_reference("abc", || Ok(())).unwrap();

        store.release_reference("abc", || panic!("must not remove")).unwrap();
        store.release_reference("abc", || panic!("must not remove")).unwrap();
        assert_eq!(store.get("abc"), 1);

        let mut removed = false;
        store
            .release_reference("abc", || {
                removed = true;
                Ok(())
            })
            .unwrap();
        assert!(removed);
        assert_eq!(store.get("abc"), 0);
    }

    #[test]
    fn test_should_tolerate_release_of_untracked_digest() {
        let (_dir, store) = temp_store();
        store
            .release_reference("never-inserted", || panic!("must not remove"))
            .unwrap();
    }

    #[test]
    fn test_should_persist_across_reload() {
        let dir = tempfile::tempdir().expect("test tempdir");
        let path = dir.path().join(".refcounts");
        {
            let store = RefcountStore::load(path.clone()).expect("test load");
            store.insert_reference("digest1", || Ok(())).unwrap();
            store.insert_reference("digest1", || Ok(())).unwrap();
        }
        let reloaded = RefcountStore::load(path).expect("test reload");
        assert_eq!(reloaded.get("digest1"), 2);
    }
}
