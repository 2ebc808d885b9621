//! The dashboard runtime: resource handles over a shared query cache, view
//! derivations, widgets and page composition.

pub mod api_client;
pub mod cache;
pub mod derive;
pub mod fetcher;
pub mod hook;
pub mod mutations;
pub mod notify;
pub mod page;
pub mod resource;
pub mod router;
pub mod style;
pub mod widget;

use std::sync::Arc;
use std::time::Duration;

pub use self::api_client::ClientsApi;
pub use self::cache::QueryCache;
pub use self::fetcher::{Fetcher, HttpFetcher};
pub use self::hook::{ResourceHandle, use_resource};
pub use self::mutations::ClientMutations;
pub use self::notify::{LogNotifier, Notifier, Toast};
pub use self::resource::{FetchError, FetchState, Payload, ResourceKey};
pub use self::router::{Dispatch, Route, RouteDispatcher};

/// Everything the page handlers need, shared across workers.
pub struct DashboardState {
    pub cache: Arc<QueryCache>,
    pub notifier: Arc<dyn Notifier>,
    pub clients: ClientMutations,
    pub dispatcher: RouteDispatcher,
    /// How long a page render waits for widgets before sending skeletons.
    pub render_budget: Duration,
}

impl DashboardState {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        notifier: Arc<dyn Notifier>,
        stale_after: Duration,
        render_budget: Duration,
    ) -> Self {
        let cache = Arc::new(QueryCache::new(Arc::clone(&fetcher), stale_after));
        let clients = ClientMutations::new(ClientsApi::new(fetcher), Arc::clone(&cache));
        Self {
            cache,
            notifier,
            clients,
            dispatcher: RouteDispatcher::standard(),
            render_budget,
        }
    }
}
