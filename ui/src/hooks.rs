//! Component lifetime helpers

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::on_cleanup;

/// Tracks whether the component that created it is still mounted and
/// which fetch run is the latest.
///
/// Mount-time fetches call [`MountGuard::begin_run`] before spawning and
/// check the token after awaiting. A response is dropped when the admin
/// has navigated away, and also when a route-param change has started a
/// newer run in the same component, so a slow early response can never
/// overwrite a later one.
#[derive(Clone)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
    run: Arc<AtomicU64>,
}

impl MountGuard {
    fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
            run: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Marks the start of a new fetch, making every earlier token stale
    pub fn begin_run(&self) -> RunToken {
        let run = self.run.fetch_add(1, Ordering::Relaxed) + 1;
        RunToken {
            guard: self.clone(),
            run,
        }
    }
}

/// Relevance token for one fetch run
pub struct RunToken {
    guard: MountGuard,
    run: u64,
}

impl RunToken {
    /// True while the component is mounted and no newer run has started
    pub fn is_current(&self) -> bool {
        self.guard.is_live() && self.guard.run.load(Ordering::Relaxed) == self.run
    }
}

/// Creates a guard tied to the current component scope
pub fn use_mount_guard() -> MountGuard {
    let guard = MountGuard::new();
    let flag = guard.alive.clone();
    on_cleanup(move || flag.store(false, Ordering::Relaxed));
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_run_makes_earlier_tokens_stale() {
        let guard = MountGuard::new();
        let first = guard.begin_run();
        assert!(first.is_current());

        let second = guard.begin_run();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn cleanup_invalidates_every_token() {
        let guard = MountGuard::new();
        let run = guard.begin_run();
        guard.alive.store(false, Ordering::Relaxed);
        assert!(!run.is_current());
        assert!(!guard.is_live());
    }
}
