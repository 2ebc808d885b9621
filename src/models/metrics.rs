use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::{MaintenanceRecord, MaintenanceStatus, Order, OrderStatus, Vehicle, VehicleStatus};

/// Flat record behind `GET /api/dashboard/metrics`.
///
/// Every field is optional on the wire; consumers apply their own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_vehicles: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_deliveries: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_orders: Option<i64>,
    /// Percentage, 0-100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<f64>,
}

/// Aggregate the dashboard counters from the stored collections.
///
/// Deliveries count toward the calendar day of `now`, with every order
/// stamp first moved into the zone of `now`.
pub fn compute<Tz: TimeZone>(
    vehicles: &[Vehicle],
    orders: &[Order],
    maintenance: &[MaintenanceRecord],
    now: &DateTime<Tz>,
) -> DashboardMetrics {
    let zone = now.timezone();
    let today = now.date_naive();

    let active_vehicles = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Active)
        .count() as i64;

    let daily_deliveries = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .filter(|o| order_date(o, &zone) == Some(today))
        .count() as i64;

    let pending_orders = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count() as i64;

    let compliance = if maintenance.is_empty() {
        None
    } else {
        let on_time = maintenance
            .iter()
            .filter(|m| m.status != MaintenanceStatus::Overdue)
            .count();
        let pct = on_time as f64 * 100.0 / maintenance.len() as f64;
        Some((pct * 10.0).round() / 10.0)
    };

    DashboardMetrics {
        active_vehicles: Some(active_vehicles),
        daily_deliveries: Some(daily_deliveries),
        pending_orders: Some(pending_orders),
        compliance,
    }
}

fn order_date<Tz: TimeZone>(order: &Order, zone: &Tz) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(&order.created_at)
        .ok()
        .map(|dt| dt.with_timezone(zone).date_naive())
}
