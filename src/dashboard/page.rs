//! Page composition.
//!
//! A page is a fixed set of widgets laid out in regions. Every widget mounts
//! its own resource handle; all of them settle concurrently within one render
//! budget, and whatever is still loading at the deadline renders as a
//! skeleton the browser fills in later.

use std::time::Duration;

use futures::future::join_all;

use super::cache::QueryCache;
use super::hook::{ResourceHandle, use_resource};
use super::notify::{Notifier, Toast};
use super::resource::FetchState;
use super::router::Route;
use super::widget::{RenderedWidget, WidgetKind, WidgetSpec, render_widget};
use crate::errors::AppError;
use crate::models::ResourceKind;

/// Transient, per-request UI state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiToggles {
    /// Mobile navigation overlay.
    pub menu_open: bool,
}

impl UiToggles {
    /// Read toggles from a raw query string (`menu=open`).
    pub fn from_query(query: &str) -> Self {
        let menu_open = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(k, v)| k == "menu" && v == "open");
        Self { menu_open }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    MetricsRow,
    MapPanel,
    Summary,
    FullWidth,
}

impl Region {
    pub fn class(self) -> &'static str {
        match self {
            Region::MetricsRow => "region region-metrics",
            Region::MapPanel => "region region-map",
            Region::Summary => "region region-summary",
            Region::FullWidth => "region region-full",
        }
    }
}

const METRICS: WidgetSpec = WidgetSpec::new("metrics", "Resumen de operación", WidgetKind::MetricCards);
const FLEET_MAP: WidgetSpec = WidgetSpec::new("fleet-map", "Mapa de la flota", WidgetKind::FleetMap);
const FEATURED: WidgetSpec =
    WidgetSpec::new("featured-vehicles", "Vehículos destacados", WidgetKind::FeaturedVehicles);
const ALERTS: WidgetSpec = WidgetSpec::new("alerts", "Alertas activas", WidgetKind::AlertList);
const RECENT_ORDERS: WidgetSpec =
    WidgetSpec::new("recent-orders", "Pedidos recientes", WidgetKind::RecentOrders);
const LOW_STOCK: WidgetSpec = WidgetSpec::new("low-stock", "Stock bajo", WidgetKind::LowStock);
const FINANCE: WidgetSpec =
    WidgetSpec::new("finance-summary", "Resumen financiero", WidgetKind::FinanceSummary);

const fn table(title: &'static str, kind: ResourceKind) -> WidgetSpec {
    WidgetSpec::new("table", title, WidgetKind::Table(kind))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub route: Route,
    pub regions: Vec<(Region, Vec<WidgetSpec>)>,
}

impl PageLayout {
    pub fn for_route(route: Route) -> Self {
        use Region::*;
        let regions = match route {
            Route::Dashboard => vec![
                (MetricsRow, vec![METRICS]),
                (MapPanel, vec![FLEET_MAP, FEATURED]),
                (Summary, vec![ALERTS, RECENT_ORDERS]),
            ],
            Route::Fleet => vec![
                (MapPanel, vec![FLEET_MAP, FEATURED]),
                (FullWidth, vec![table("Vehículos", ResourceKind::Vehicles)]),
            ],
            Route::Routes => vec![(FullWidth, vec![table("Rutas de entrega", ResourceKind::Routes)])],
            Route::Orders => vec![
                (Summary, vec![RECENT_ORDERS, ALERTS]),
                (FullWidth, vec![table("Todos los pedidos", ResourceKind::Orders)]),
            ],
            Route::Clients => vec![(FullWidth, vec![table("Clientes", ResourceKind::Clients)])],
            Route::Inventory => vec![
                (Summary, vec![LOW_STOCK]),
                (FullWidth, vec![table("Inventario", ResourceKind::Inventory)]),
            ],
            Route::Drivers => vec![(FullWidth, vec![table("Conductores", ResourceKind::Drivers)])],
            Route::Maintenance => vec![(
                FullWidth,
                vec![table("Mantenimientos", ResourceKind::Maintenance)],
            )],
            Route::Fuel => vec![(FullWidth, vec![table("Cargas de combustible", ResourceKind::Fuel)])],
            Route::Suppliers => vec![(FullWidth, vec![table("Proveedores", ResourceKind::Suppliers)])],
            Route::Finances => vec![
                (MetricsRow, vec![FINANCE]),
                (FullWidth, vec![table("Movimientos", ResourceKind::Finances)]),
            ],
            Route::Reports => vec![(FullWidth, vec![table("Reportes", ResourceKind::Reports)])],
        };
        Self { route, regions }
    }

    pub fn widgets(&self) -> impl Iterator<Item = &WidgetSpec> {
        self.regions.iter().flat_map(|(_, widgets)| widgets.iter())
    }

    pub fn widget(&self, id: &str) -> Option<&WidgetSpec> {
        self.widgets().find(|w| w.id == id)
    }

    /// Mount every widget. Returns at once; nothing here waits on the network.
    pub fn mount(&self, cache: &QueryCache) -> MountedPage {
        let widgets = self
            .regions
            .iter()
            .flat_map(|(region, widgets)| {
                widgets.iter().map(move |spec| MountedWidget {
                    region: *region,
                    spec: *spec,
                    handle: use_resource(cache, spec.key()),
                })
            })
            .collect();
        MountedPage { route: self.route, widgets }
    }
}

struct MountedWidget {
    region: Region,
    spec: WidgetSpec,
    handle: ResourceHandle,
}

/// A composer's live handles. Dropping it unmounts every widget.
pub struct MountedPage {
    route: Route,
    widgets: Vec<MountedWidget>,
}

#[derive(Debug, Clone)]
pub struct SettledWidget {
    pub region: Region,
    pub spec: WidgetSpec,
    pub state: FetchState,
}

impl MountedPage {
    pub fn route(&self) -> Route {
        self.route
    }

    /// Wait up to `budget` for all widgets at once and snapshot their states.
    pub async fn settle(&self, budget: Duration) -> Vec<SettledWidget> {
        let states = join_all(self.widgets.iter().map(|w| w.handle.settled(budget))).await;
        self.widgets
            .iter()
            .zip(states)
            .map(|(w, state)| SettledWidget { region: w.region, spec: w.spec, state })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct RenderedRegion {
    pub class: &'static str,
    pub widgets: Vec<RenderedWidget>,
}

/// Render settled widgets into their regions. Failures go to `notifier` and
/// come back as toasts for the page.
pub fn compose(
    route: Route,
    settled: &[SettledWidget],
    notifier: &dyn Notifier,
) -> Result<(Vec<RenderedRegion>, Vec<Toast>), AppError> {
    let mut regions: Vec<(Region, Vec<RenderedWidget>)> = Vec::new();
    let mut toasts = Vec::new();

    for widget in settled {
        let rendered = render_widget(route.slug(), &widget.spec, &widget.state)?;
        if let Some(error) = &rendered.failure {
            let toast = Toast::fetch_failed(widget.spec.title, error);
            notifier.notify(&toast);
            toasts.push(toast);
        }
        match regions.last_mut() {
            Some((region, widgets)) if *region == widget.region => widgets.push(rendered),
            _ => regions.push((widget.region, vec![rendered])),
        }
    }

    let regions = regions
        .into_iter()
        .map(|(region, widgets)| RenderedRegion { class: region.class(), widgets })
        .collect();
    Ok((regions, toasts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggle_reads_query() {
        assert!(UiToggles::from_query("menu=open").menu_open);
        assert!(UiToggles::from_query("notice=created&menu=open").menu_open);
        assert!(!UiToggles::from_query("menu=closed").menu_open);
        assert!(!UiToggles::from_query("").menu_open);
    }

    #[test]
    fn every_route_has_a_layout_with_unique_widget_ids() {
        for route in Route::ALL {
            let layout = PageLayout::for_route(route);
            let ids: Vec<&str> = layout.widgets().map(|w| w.id).collect();
            assert!(!ids.is_empty(), "{route:?} has no widgets");
            let mut deduped = ids.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), ids.len(), "{route:?} repeats a widget id");
        }
    }

    #[test]
    fn dashboard_regions_in_order() {
        let layout = PageLayout::for_route(Route::Dashboard);
        let regions: Vec<Region> = layout.regions.iter().map(|(r, _)| *r).collect();
        assert_eq!(regions, vec![Region::MetricsRow, Region::MapPanel, Region::Summary]);
        assert_eq!(layout.widget("fleet-map").map(|w| w.kind), Some(WidgetKind::FleetMap));
        assert!(layout.widget("table").is_none());
    }
}
