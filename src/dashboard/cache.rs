//! Query cache keyed by [`ResourceKey`].
//!
//! One slot per key. A slot holds the latest [`FetchState`] in a `watch`
//! channel so any number of mounts can observe the same request. A new
//! request is only started when the slot is empty, errored, stale or
//! invalidated; concurrent mounts of a loading key share its in-flight request.
//!
//! Each request carries the slot generation it was started under. Invalidation
//! bumps the generation, so a completion from before the invalidation is
//! dropped instead of overwriting newer data.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::watch;

use super::fetcher::Fetcher;
use super::resource::{FetchState, Payload, ResourceKey};

struct Slot {
    tx: watch::Sender<FetchState>,
    generation: u64,
    settled_at: Option<Instant>,
}

type Slots = Arc<Mutex<HashMap<ResourceKey, Slot>>>;

pub struct QueryCache {
    fetcher: Arc<dyn Fetcher>,
    stale_after: Duration,
    slots: Slots,
}

fn lock(slots: &Slots) -> MutexGuard<'_, HashMap<ResourceKey, Slot>> {
    slots.lock().unwrap_or_else(PoisonError::into_inner)
}

impl QueryCache {
    pub fn new(fetcher: Arc<dyn Fetcher>, stale_after: Duration) -> Self {
        Self {
            fetcher,
            stale_after,
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Observe `key`, starting a request if nothing usable is cached.
    ///
    /// Must be called from within a tokio runtime.
    pub fn subscribe(&self, key: &ResourceKey) -> watch::Receiver<FetchState> {
        let mut slots = lock(&self.slots);
        let slot = slots.entry(key.clone()).or_insert_with(|| Slot {
            tx: watch::channel(FetchState::Loading).0,
            generation: 0,
            settled_at: None,
        });

        let needs_request = match &*slot.tx.borrow() {
            // in flight, unless nothing was ever started for a fresh slot
            FetchState::Loading => slot.generation == 0,
            FetchState::Error(_) => true,
            FetchState::Ready(_) => slot
                .settled_at
                .is_none_or(|at| at.elapsed() >= self.stale_after),
        };
        if needs_request {
            self.start_request(key, slot);
        }
        slot.tx.subscribe()
    }

    /// Drop whatever is cached for `key`.
    ///
    /// If mounts are still observing the key a fresh request starts at once;
    /// otherwise the slot is removed and the next mount refetches.
    pub fn invalidate(&self, key: &ResourceKey) {
        let mut slots = lock(&self.slots);
        let observed = match slots.get(key) {
            Some(slot) => slot.tx.receiver_count() > 0,
            None => return,
        };
        if observed {
            if let Some(slot) = slots.get_mut(key) {
                log::debug!("Invalidating {key}, refetching for active mounts");
                self.start_request(key, slot);
            }
        } else {
            log::debug!("Invalidating {key}");
            slots.remove(key);
        }
    }

    /// Current cached state for `key`, without starting a request.
    pub fn peek(&self, key: &ResourceKey) -> Option<FetchState> {
        lock(&self.slots).get(key).map(|slot| slot.tx.borrow().clone())
    }

    fn start_request(&self, key: &ResourceKey, slot: &mut Slot) {
        slot.generation += 1;
        slot.settled_at = None;
        slot.tx.send_replace(FetchState::Loading);

        let generation = slot.generation;
        let fetcher = Arc::clone(&self.fetcher);
        let slots = Arc::clone(&self.slots);
        let key = key.clone();
        tokio::spawn(async move {
            let state = match fetcher.get_json(key.as_str()).await {
                Ok(body) => match Payload::decode_for(&key, body) {
                    Ok(payload) => FetchState::Ready(Arc::new(payload)),
                    Err(e) => FetchState::Error(e),
                },
                Err(e) => FetchState::Error(e),
            };
            if let FetchState::Error(e) = &state {
                log::warn!("Fetching {key} failed: {e}");
            }

            let mut slots = lock(&slots);
            match slots.get_mut(&key) {
                Some(slot) if slot.generation == generation => {
                    slot.settled_at = Some(Instant::now());
                    slot.tx.send_replace(state);
                }
                _ => log::debug!("Discarding stale result for {key} (generation {generation})"),
            }
        });
    }
}
