//! The per-mount view of a resource.
//!
//! [`use_resource`] mounts a widget's data dependency: it subscribes to the
//! cache and returns at once with a [`ResourceHandle`] whose state only ever
//! moves from `Loading` to `Ready` or `Error`. Dropping the handle is the
//! unmount; any completion arriving afterwards is ignored.

use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::cache::QueryCache;
use super::resource::{FetchState, ResourceKey};

pub struct ResourceHandle {
    key: ResourceKey,
    state: watch::Receiver<FetchState>,
    unmounted: CancellationToken,
}

/// Mount `key`. Never waits for the network.
pub fn use_resource(cache: &QueryCache, key: ResourceKey) -> ResourceHandle {
    let mut upstream = cache.subscribe(&key);
    let current = upstream.borrow_and_update().clone();
    let unmounted = CancellationToken::new();

    if current.is_settled() {
        let (_, state) = watch::channel(current);
        return ResourceHandle { key, state, unmounted };
    }

    let (local, state) = watch::channel(FetchState::Loading);
    let token = unmounted.clone();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = token.cancelled() => return,
                changed = upstream.changed() => {
                    // cache slot dropped: stay in Loading
                    if changed.is_err() {
                        return;
                    }
                    let next = upstream.borrow_and_update().clone();
                    if next.is_settled() {
                        if !token.is_cancelled() {
                            local.send_replace(next);
                        }
                        return;
                    }
                }
            }
        }
    });

    ResourceHandle { key, state, unmounted }
}

impl ResourceHandle {
    pub fn key(&self) -> &ResourceKey {
        &self.key
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Wait until the state settles or `budget` elapses, then return a snapshot.
    pub async fn settled(&self, budget: Duration) -> FetchState {
        let mut rx = self.state.clone();
        let wait = async {
            // Err means the forwarder ended without settling
            let _ = rx.wait_for(FetchState::is_settled).await;
        };
        let _ = tokio::time::timeout(budget, wait).await;
        self.state()
    }
}

impl Drop for ResourceHandle {
    fn drop(&mut self) {
        self.unmounted.cancel();
    }
}
