//! Presentational widgets.
//!
//! A widget has one data dependency and renders in exactly one of three
//! states: skeleton placeholders while loading, a "no data" note when the
//! derived view is empty, or one unit per derived element. A failed fetch
//! renders an "unavailable" note and hands the error back to the caller,
//! which forwards it to the notifier.

use askama::Template;

use super::derive::{self, Cell};
use super::resource::{FetchError, FetchState, Payload, ResourceKey};
use super::style::{StyleToken, Toned};
use crate::errors::AppError;
use crate::models::*;
use crate::templates_structs::{
    FleetMapTemplate, ListTemplate, MetricCardsTemplate, TableTemplate, VehicleCardsTemplate,
};

pub const EMPTY_MESSAGE: &str = "No hay datos disponibles";
pub const UNAVAILABLE_MESSAGE: &str = "Información no disponible en este momento";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    MetricCards,
    FeaturedVehicles,
    FleetMap,
    AlertList,
    RecentOrders,
    LowStock,
    FinanceSummary,
    Table(ResourceKind),
}

impl WidgetKind {
    /// The collection this widget reads.
    pub fn resource(self) -> ResourceKind {
        match self {
            WidgetKind::MetricCards => ResourceKind::Metrics,
            WidgetKind::FeaturedVehicles | WidgetKind::FleetMap => ResourceKind::Vehicles,
            WidgetKind::AlertList => ResourceKind::Alerts,
            WidgetKind::RecentOrders => ResourceKind::Orders,
            WidgetKind::LowStock => ResourceKind::Inventory,
            WidgetKind::FinanceSummary => ResourceKind::Finances,
            WidgetKind::Table(kind) => kind,
        }
    }

    /// Skeleton blocks shown while loading.
    pub fn placeholders(self) -> usize {
        match self {
            WidgetKind::MetricCards => 4,
            WidgetKind::FeaturedVehicles => 2,
            WidgetKind::FleetMap => 1,
            WidgetKind::FinanceSummary => 3,
            WidgetKind::AlertList
            | WidgetKind::RecentOrders
            | WidgetKind::LowStock
            | WidgetKind::Table(_) => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSpec {
    /// Unique within a page; the last segment of the fragment URL.
    pub id: &'static str,
    pub title: &'static str,
    pub kind: WidgetKind,
}

impl WidgetSpec {
    pub const fn new(id: &'static str, title: &'static str, kind: WidgetKind) -> Self {
        Self { id, title, kind }
    }

    pub fn key(&self) -> ResourceKey {
        ResourceKey::for_kind(self.kind.resource())
    }
}

// ---------- Render state ----------

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetState<T> {
    Loading { placeholders: usize },
    Unavailable,
    Empty,
    Populated(Vec<T>),
}

impl<T> WidgetState<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            WidgetState::Empty
        } else {
            WidgetState::Populated(items)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetState::Loading { .. })
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, WidgetState::Unavailable)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, WidgetState::Empty)
    }

    /// Slot indices for the skeleton loop; empty unless loading.
    pub fn placeholders(&self) -> Vec<usize> {
        match self {
            WidgetState::Loading { placeholders } => (0..*placeholders).collect(),
            _ => Vec::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            WidgetState::Populated(items) => items,
            _ => &[],
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            WidgetState::Unavailable => UNAVAILABLE_MESSAGE,
            WidgetState::Empty => EMPTY_MESSAGE,
            _ => "",
        }
    }
}

/// Chrome shared by every widget template.
#[derive(Debug, Clone)]
pub struct WidgetFrame {
    pub id: &'static str,
    pub title: &'static str,
    /// Fragment URL the browser polls while the widget is loading.
    pub src: String,
}

// ---------- View items ----------

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleCard {
    pub id: i64,
    pub plate: String,
    pub model: String,
    pub driver: String,
    pub status: &'static str,
    pub tone: StyleToken,
    pub fuel: Option<String>,
}

impl From<&Vehicle> for VehicleCard {
    fn from(v: &Vehicle) -> Self {
        Self {
            id: v.id,
            plate: v.plate.clone(),
            model: v.model.clone(),
            driver: v.driver.clone().unwrap_or_else(|| "Sin conductor".to_string()),
            status: v.status.label(),
            tone: v.status.tone(),
            fuel: v.fuel_level.map(derive::format_percent),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub id: i64,
    pub title: String,
    pub detail: String,
    pub badge: Cell,
}

impl From<&Alert> for ListItem {
    fn from(a: &Alert) -> Self {
        let when = derive::format_timestamp(&a.created_at);
        let detail = match a.vehicle_id {
            Some(id) => format!("{when} · Vehículo #{id}"),
            None => when,
        };
        Self { id: a.id, title: a.message.clone(), detail, badge: Cell::badge(&a.severity) }
    }
}

impl From<&Order> for ListItem {
    fn from(o: &Order) -> Self {
        Self {
            id: o.id,
            title: o.code.clone(),
            detail: format!("{} · {}", o.destination, derive::format_money(o.total)),
            badge: Cell::badge(&o.status),
        }
    }
}

impl From<&InventoryItem> for ListItem {
    fn from(i: &InventoryItem) -> Self {
        let badge = if i.quantity <= 0 {
            Cell { text: "Agotado".to_string(), tone: Some(StyleToken::Danger) }
        } else {
            Cell { text: "Stock bajo".to_string(), tone: Some(StyleToken::Warning) }
        };
        Self {
            id: i.id,
            title: i.name.clone(),
            detail: format!(
                "{} · {} de {}",
                i.sku,
                derive::format_count(i.quantity),
                derive::format_count(i.reorder_level)
            ),
            badge,
        }
    }
}

/// A map marker placed inside the map box, in percent from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPin {
    pub id: i64,
    pub plate: String,
    pub status: &'static str,
    pub tone: StyleToken,
    pub left: String,
    pub top: String,
}

const MAP_MARGIN: f64 = 5.0;

/// Fit the markers' bounding box into the map with a small margin.
pub fn place_pins(markers: &[derive::MapMarker]) -> Vec<MapPin> {
    let bounds = |get: fn(&derive::MapMarker) -> f64| {
        markers.iter().map(get).fold((f64::MAX, f64::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)))
    };
    let (min_lat, max_lat) = bounds(|m| m.lat);
    let (min_lng, max_lng) = bounds(|m| m.lng);
    let scale = |offset: f64, span: f64| {
        if span <= f64::EPSILON {
            50.0
        } else {
            MAP_MARGIN + offset / span * (100.0 - 2.0 * MAP_MARGIN)
        }
    };

    markers
        .iter()
        .map(|m| MapPin {
            id: m.id,
            plate: m.plate.clone(),
            status: m.status,
            tone: m.tone,
            left: format!("{:.1}", scale(m.lng - min_lng, max_lng - min_lng)),
            top: format!("{:.1}", scale(max_lat - m.lat, max_lat - min_lat)),
        })
        .collect()
}

// ---------- Rendering ----------

#[derive(Debug, Clone)]
pub struct RenderedWidget {
    pub id: &'static str,
    pub html: String,
    /// Set when the widget's fetch failed; the caller reports it.
    pub failure: Option<FetchError>,
}

/// Map a fetch state onto a render state, deriving the view when ready.
fn project<T>(
    state: &FetchState,
    placeholders: usize,
    view: impl FnOnce(&Payload) -> Option<Vec<T>>,
) -> (WidgetState<T>, Option<FetchError>) {
    match state {
        FetchState::Loading => (WidgetState::Loading { placeholders }, None),
        FetchState::Error(e) => (WidgetState::Unavailable, Some(e.clone())),
        FetchState::Ready(payload) => match view(payload) {
            Some(items) => (WidgetState::from_items(items), None),
            None => (
                WidgetState::Unavailable,
                Some(FetchError::Decode(format!(
                    "unexpected {} payload",
                    payload.kind().name()
                ))),
            ),
        },
    }
}

pub fn fragment_url(page: &str, widget: &str) -> String {
    format!("/widgets/{page}/{widget}")
}

/// Render one widget of page `page` in the given fetch state.
pub fn render_widget(
    page: &str,
    spec: &WidgetSpec,
    state: &FetchState,
) -> Result<RenderedWidget, AppError> {
    let frame = WidgetFrame { id: spec.id, title: spec.title, src: fragment_url(page, spec.id) };
    let n = spec.kind.placeholders();

    let (html, failure) = match spec.kind {
        WidgetKind::MetricCards => {
            let (state, failure) = project(state, n, |p| match p {
                Payload::Metrics(m) => Some(derive::metric_summary(m)),
                _ => None,
            });
            (MetricCardsTemplate { frame, state }.render()?, failure)
        }
        WidgetKind::FinanceSummary => {
            let (state, failure) = project(state, n, |p| match p {
                Payload::Finances(entries) => Some(derive::finance_summary(entries)),
                _ => None,
            });
            (MetricCardsTemplate { frame, state }.render()?, failure)
        }
        WidgetKind::FeaturedVehicles => {
            let (state, failure) = project(state, n, |p| match p {
                Payload::Vehicles(v) => Some(
                    derive::featured_vehicles(v).into_iter().map(VehicleCard::from).collect(),
                ),
                _ => None,
            });
            (VehicleCardsTemplate { frame, state }.render()?, failure)
        }
        WidgetKind::FleetMap => {
            let (state, failure) = project(state, n, |p| match p {
                Payload::Vehicles(v) => Some(place_pins(&derive::map_markers(v))),
                _ => None,
            });
            (FleetMapTemplate { frame, state }.render()?, failure)
        }
        WidgetKind::AlertList => {
            let (state, failure) = project(state, n, |p| match p {
                Payload::Alerts(a) => Some(
                    derive::active_alerts(a, derive::ALERTS_LIMIT)
                        .into_iter()
                        .map(ListItem::from)
                        .collect(),
                ),
                _ => None,
            });
            (ListTemplate { frame, state }.render()?, failure)
        }
        WidgetKind::RecentOrders => {
            let (state, failure) = project(state, n, |p| match p {
                Payload::Orders(o) => Some(
                    derive::recent_orders(o, derive::RECENT_ORDERS_LIMIT)
                        .into_iter()
                        .map(ListItem::from)
                        .collect(),
                ),
                _ => None,
            });
            (ListTemplate { frame, state }.render()?, failure)
        }
        WidgetKind::LowStock => {
            let (state, failure) = project(state, n, |p| match p {
                Payload::Inventory(items) => {
                    Some(derive::low_stock(items).into_iter().map(ListItem::from).collect())
                }
                _ => None,
            });
            (ListTemplate { frame, state }.render()?, failure)
        }
        WidgetKind::Table(kind) => {
            let (state, failure) = project(state, n, |p| {
                if p.kind() == kind { derive::table_for(p) } else { None }
            });
            let row_link = (kind == ResourceKind::Clients).then_some("/clients?edit=");
            let template = TableTemplate {
                frame,
                columns: derive::table_columns(kind),
                row_link,
                state,
            };
            (template.render()?, failure)
        }
    };

    Ok(RenderedWidget { id: spec.id, html, failure })
}
