use askama::Template;

use crate::dashboard::derive::{MetricCard, TableRow};
use crate::dashboard::widget::{ListItem, MapPin, VehicleCard, WidgetFrame, WidgetState};

#[derive(Template)]
#[template(path = "widgets/metric_cards.html")]
pub struct MetricCardsTemplate {
    pub frame: WidgetFrame,
    pub state: WidgetState<MetricCard>,
}

#[derive(Template)]
#[template(path = "widgets/vehicle_cards.html")]
pub struct VehicleCardsTemplate {
    pub frame: WidgetFrame,
    pub state: WidgetState<VehicleCard>,
}

#[derive(Template)]
#[template(path = "widgets/fleet_map.html")]
pub struct FleetMapTemplate {
    pub frame: WidgetFrame,
    pub state: WidgetState<MapPin>,
}

/// Alerts, recent orders and low stock share one list layout.
#[derive(Template)]
#[template(path = "widgets/list.html")]
pub struct ListTemplate {
    pub frame: WidgetFrame,
    pub state: WidgetState<ListItem>,
}

#[derive(Template)]
#[template(path = "widgets/table.html")]
pub struct TableTemplate {
    pub frame: WidgetFrame,
    pub columns: &'static [&'static str],
    /// Prefix of a per-row link; the row id is appended.
    pub row_link: Option<&'static str>,
    pub state: WidgetState<TableRow>,
}
