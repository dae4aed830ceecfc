//! Single-instance guard
//!
//! Holds an exclusive, non-blocking advisory lock on a well-known file in the
//! platform temp directory. The OS drops the lock when the process dies, so a
//! stale file left behind by a crash is harmless: the next launch simply
//! re-locks it.
//!
//! The policy is fail-closed: any I/O error during acquisition is treated the
//! same as contention, never as permission to start a second instance.

mod sys;

use std::fs::OpenOptions;
use std::path::PathBuf;

/// Handle for the process-wide instance lock.
///
/// At most one live instance per machine can hold the lock on a given path.
/// Dropping the handle releases the lock and removes the backing file.
pub struct InstanceLock {
    path: PathBuf,
    file: Option<std::fs::File>,
}

impl InstanceLock {
    /// Create an unacquired lock handle for `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    /// Try to become the sole running instance.
    ///
    /// A single non-blocking attempt is definitive: no polling, no retry.
    /// Returns `true` iff the lock was obtained; `false` on contention or on
    /// any I/O failure.
    pub fn acquire(&mut self) -> bool {
        if self.file.is_some() {
            return true;
        }

        let file = match OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!("Could not open lock file {:?}: {}", self.path, e);
                return false;
            }
        };

        match sys::try_lock_exclusive(&file) {
            Ok(true) => {
                tracing::debug!("Acquired instance lock at {:?}", self.path);
                self.file = Some(file);
                true
            }
            Ok(false) => false,
            Err(e) => {
                tracing::debug!("Lock attempt on {:?} failed: {}", self.path, e);
                false
            }
        }
    }

    /// Release the lock and delete the backing file.
    ///
    /// Runs during process exit, so every error is swallowed. Whether the
    /// file survives is irrelevant to the next startup.
    pub fn release(&mut self) {
        if let Some(file) = self.file.take() {
            sys::unlock(&file);
            drop(file);
            let _ = std::fs::remove_file(&self.path);
        }
    }

    /// Whether this handle currently holds the lock.
    pub fn is_held(&self) -> bool {
        self.file.is_some()
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copycat.lock");

        let mut lock = InstanceLock::at(&path);
        assert!(!lock.is_held());
        assert!(lock.acquire());
        assert!(lock.is_held());
        assert!(path.exists());

        lock.release();
        assert!(!lock.is_held());
        assert!(!path.exists());
    }

    #[test]
    fn test_mutual_exclusion() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copycat.lock");

        let mut first = InstanceLock::at(&path);
        let mut second = InstanceLock::at(&path);

        assert!(first.acquire());
        assert!(!second.acquire());
        assert!(!second.is_held());

        // Releasing the holder lets the other side in.
        first.release();
        assert!(second.acquire());
    }

    #[test]
    fn test_acquire_is_idempotent_while_held() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copycat.lock");

        let mut lock = InstanceLock::at(&path);
        assert!(lock.acquire());
        assert!(lock.acquire());
        assert!(lock.is_held());
    }

    #[test]
    fn test_stale_file_is_relocked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copycat.lock");

        // A leftover file with no active lock, as after a crash.
        std::fs::write(&path, b"stale").unwrap();

        let mut lock = InstanceLock::at(&path);
        assert!(lock.acquire());
    }

    #[test]
    fn test_unopenable_path_fails_closed() {
        let dir = tempfile::tempdir().unwrap();

        // The path is a directory: open must fail, acquire must say no.
        let mut lock = InstanceLock::at(dir.path());
        assert!(!lock.acquire());
        assert!(!lock.is_held());
    }

    #[test]
    fn test_drop_releases() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copycat.lock");

        {
            let mut lock = InstanceLock::at(&path);
            assert!(lock.acquire());
        }

        let mut next = InstanceLock::at(&path);
        assert!(next.acquire());
    }
}
