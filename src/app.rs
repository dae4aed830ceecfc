//! Application context
//!
//! Owns the resources with process lifetime: the fixed configuration and the
//! single-instance lock handle. Constructed once at startup and handed to the
//! tray shell, whose quit and fatal-error paths call `shutdown` instead of
//! reaching for globals.

use crate::config::Config;
use crate::lock::InstanceLock;

pub struct App {
    pub config: Config,
    lock: InstanceLock,
}

impl App {
    pub fn new(config: Config, lock: InstanceLock) -> Self {
        Self { config, lock }
    }

    /// Best-effort teardown. Runs during process exit and must never fail;
    /// lock release errors are swallowed inside the guard.
    pub fn shutdown(&mut self) {
        self.lock.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_releases_lock() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copycat.lock");

        let mut lock = InstanceLock::at(&path);
        assert!(lock.acquire());

        let mut app = App::new(Config::default(), lock);
        app.shutdown();

        let mut next = InstanceLock::at(&path);
        assert!(next.acquire());
    }
}
