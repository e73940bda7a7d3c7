//! Cancellable fixed-interval loops for `spawn_local`.
//!
//! DESIGN
//! ======
//! A loop owns a shared alive flag. The owning component stops it from
//! `on_cleanup`, and the tick closure can end it early by returning
//! `ControlFlow::Break`. The flag is checked after every sleep so a
//! stopped loop never runs another tick.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle to a running loop.
#[derive(Clone, Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl PollHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Default for PollHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `tick` every `period_ms` until it breaks or the handle is stopped.
///
/// The first tick runs after one full period.
#[cfg(feature = "hydrate")]
pub fn spawn_poll<F, Fut>(period_ms: u64, mut tick: F) -> PollHandle
where
    F: FnMut() -> Fut + 'static,
    Fut: std::future::Future<Output = ControlFlow<()>> + 'static,
{
    let handle = PollHandle::new();
    let task_handle = handle.clone();
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(period_ms)).await;
            if !task_handle.is_alive() {
                break;
            }
            if tick().await.is_break() {
                task_handle.stop();
                break;
            }
        }
    });
    handle
}

/// No timers on the server; the returned handle is already stopped.
#[cfg(not(feature = "hydrate"))]
pub fn spawn_poll<F, Fut>(period_ms: u64, tick: F) -> PollHandle
where
    F: FnMut() -> Fut + 'static,
    Fut: std::future::Future<Output = ControlFlow<()>> + 'static,
{
    let _ = (period_ms, tick);
    let handle = PollHandle::new();
    handle.stop();
    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_starts_alive_and_stops_for_all_clones() {
        let handle = PollHandle::new();
        let clone = handle.clone();
        assert!(clone.is_alive());
        handle.stop();
        assert!(!clone.is_alive());
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn server_poll_never_starts() {
        let handle = spawn_poll(10, || async { ControlFlow::Continue(()) });
        assert!(!handle.is_alive());
    }
}
