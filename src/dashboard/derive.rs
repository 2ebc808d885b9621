//! View derivations: pure functions from a fetched collection to what a
//! widget displays. None of them mutate their input.

use std::cmp::Reverse;

use chrono::{DateTime, FixedOffset};

use super::resource::Payload;
use super::style::{Icon, StyleToken, Toned, Trend};
use crate::models::*;

// ---------- Featured vehicles ----------

pub const FEATURED_STATUSES: [VehicleStatus; 2] = [VehicleStatus::Active, VehicleStatus::Warning];
pub const FEATURED_LIMIT: usize = 2;

/// Vehicles worth highlighting: active or warning, in fetched order, at most two.
pub fn featured_vehicles(vehicles: &[Vehicle]) -> Vec<&Vehicle> {
    vehicles
        .iter()
        .filter(|v| FEATURED_STATUSES.contains(&v.status))
        .take(FEATURED_LIMIT)
        .collect()
}

// ---------- Metric cards ----------

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub trend: Trend,
    pub icon: Icon,
    pub tone: StyleToken,
}

enum MetricValue {
    Count(fn(&DashboardMetrics) -> Option<i64>),
    Percent(fn(&DashboardMetrics) -> Option<f64>),
}

struct MetricSlot {
    label: &'static str,
    value: MetricValue,
    trend: Trend,
    icon: Icon,
    tone: StyleToken,
}

fn active_vehicles(m: &DashboardMetrics) -> Option<i64> {
    m.active_vehicles
}

fn daily_deliveries(m: &DashboardMetrics) -> Option<i64> {
    m.daily_deliveries
}

fn pending_orders(m: &DashboardMetrics) -> Option<i64> {
    m.pending_orders
}

fn compliance(m: &DashboardMetrics) -> Option<f64> {
    m.compliance
}

const METRIC_SLOTS: [MetricSlot; 4] = [
    MetricSlot {
        label: "Vehículos activos",
        value: MetricValue::Count(active_vehicles),
        trend: Trend::Up,
        icon: Icon::Truck,
        tone: StyleToken::Primary,
    },
    MetricSlot {
        label: "Entregas hoy",
        value: MetricValue::Count(daily_deliveries),
        trend: Trend::Up,
        icon: Icon::Package,
        tone: StyleToken::Success,
    },
    MetricSlot {
        label: "Pedidos pendientes",
        value: MetricValue::Count(pending_orders),
        trend: Trend::Down,
        icon: Icon::Clock,
        tone: StyleToken::Warning,
    },
    MetricSlot {
        label: "Cumplimiento",
        value: MetricValue::Percent(compliance),
        trend: Trend::Up,
        icon: Icon::ShieldCheck,
        tone: StyleToken::Info,
    },
];

pub const METRIC_LABELS: [&str; 4] = [
    METRIC_SLOTS[0].label,
    METRIC_SLOTS[1].label,
    METRIC_SLOTS[2].label,
    METRIC_SLOTS[3].label,
];

/// The four dashboard cards, always in the same order. Missing counts read
/// `0`, a missing percentage reads `0%`.
pub fn metric_summary(metrics: &DashboardMetrics) -> Vec<MetricCard> {
    METRIC_SLOTS
        .iter()
        .map(|slot| MetricCard {
            label: slot.label,
            value: match slot.value {
                MetricValue::Count(get) => format_count(get(metrics).unwrap_or(0)),
                MetricValue::Percent(get) => format_percent(get(metrics).unwrap_or(0.0)),
            },
            trend: slot.trend,
            icon: slot.icon,
            tone: slot.tone,
        })
        .collect()
}

/// Income, expenses and balance over all entries.
pub fn finance_summary(entries: &[FinanceEntry]) -> Vec<MetricCard> {
    let total = |kind: EntryKind| -> f64 {
        entries.iter().filter(|e| e.kind == kind).map(|e| e.amount).sum()
    };
    let income = total(EntryKind::Income);
    let expenses = total(EntryKind::Expense);
    let balance = income - expenses;

    vec![
        MetricCard {
            label: "Ingresos",
            value: format_money(income),
            trend: Trend::Up,
            icon: Icon::Wallet,
            tone: StyleToken::Success,
        },
        MetricCard {
            label: "Gastos",
            value: format_money(expenses),
            trend: Trend::Down,
            icon: Icon::TrendingDown,
            tone: StyleToken::Danger,
        },
        MetricCard {
            label: "Balance",
            value: format_money(balance),
            trend: if balance >= 0.0 { Trend::Up } else { Trend::Down },
            icon: Icon::Scale,
            tone: if balance >= 0.0 { StyleToken::Primary } else { StyleToken::Danger },
        },
    ]
}

// ---------- Map, lists ----------

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: i64,
    pub plate: String,
    pub status: &'static str,
    pub tone: StyleToken,
    pub lat: f64,
    pub lng: f64,
}

/// One marker per vehicle with a known position.
pub fn map_markers(vehicles: &[Vehicle]) -> Vec<MapMarker> {
    vehicles
        .iter()
        .filter_map(|v| {
            v.location.map(|at| MapMarker {
                id: v.id,
                plate: v.plate.clone(),
                status: v.status.label(),
                tone: v.status.tone(),
                lat: at.lat,
                lng: at.lng,
            })
        })
        .collect()
}

pub const RECENT_ORDERS_LIMIT: usize = 5;
pub const ALERTS_LIMIT: usize = 5;

/// Point in time of an RFC 3339 stamp, whatever its offset.
fn instant(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

/// Newest orders first. Ties and unparseable stamps keep their fetched
/// order, the latter after every dated order.
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by_cached_key(|o| Reverse(instant(&o.created_at)));
    sorted.truncate(limit);
    sorted
}

/// Most severe first, then newest.
pub fn active_alerts(alerts: &[Alert], limit: usize) -> Vec<&Alert> {
    let mut sorted: Vec<&Alert> = alerts.iter().collect();
    sorted.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| instant(&b.created_at).cmp(&instant(&a.created_at)))
    });
    sorted.truncate(limit);
    sorted
}

pub fn low_stock(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items.iter().filter(|i| i.needs_reorder()).collect()
}

// ---------- Tables ----------

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub tone: Option<StyleToken>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: None }
    }

    pub fn badge<T: Toned>(value: &T) -> Self {
        Self { text: value.label().to_string(), tone: Some(value.tone()) }
    }

    pub fn is_badge(&self) -> bool {
        self.tone.is_some()
    }

    pub fn class(&self) -> &'static str {
        self.tone.map_or("", StyleToken::class)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: i64,
    pub cells: Vec<Cell>,
}

/// Records that render as a table row.
pub trait Tabular {
    const COLUMNS: &'static [&'static str];

    fn row_id(&self) -> i64;
    fn cells(&self) -> Vec<Cell>;
}

pub fn table_rows<T: Tabular>(records: &[T]) -> Vec<TableRow> {
    records
        .iter()
        .map(|r| TableRow { id: r.row_id(), cells: r.cells() })
        .collect()
}

fn or_dash(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "—".to_string())
}

impl Tabular for Vehicle {
    const COLUMNS: &'static [&'static str] = &["Placa", "Modelo", "Conductor", "Combustible", "Estado"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.plate),
            Cell::text(&self.model),
            Cell::text(or_dash(self.driver.clone())),
            Cell::text(or_dash(self.fuel_level.map(format_percent))),
            Cell::badge(&self.status),
        ]
    }
}

impl Tabular for DeliveryRoute {
    const COLUMNS: &'static [&'static str] = &["Ruta", "Origen", "Destino", "Distancia", "Estado"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::text(&self.origin),
            Cell::text(&self.destination),
            Cell::text(format!("{} km", format_decimal(self.distance_km))),
            Cell::badge(&self.status),
        ]
    }
}

impl Tabular for Order {
    const COLUMNS: &'static [&'static str] = &["Pedido", "Destino", "Total", "Creado", "Estado"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.code),
            Cell::text(&self.destination),
            Cell::text(format_money(self.total)),
            Cell::text(format_timestamp(&self.created_at)),
            Cell::badge(&self.status),
        ]
    }
}

impl Tabular for Client {
    const COLUMNS: &'static [&'static str] = &["Nombre", "Correo", "Teléfono", "Dirección", "Tipo", "Prioridad"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::text(&self.email),
            Cell::text(or_dash(Some(self.phone.clone()))),
            Cell::text(or_dash(Some(self.address.clone()))),
            Cell::badge(&self.client_type),
            Cell::badge(&self.priority),
        ]
    }
}

impl Tabular for InventoryItem {
    const COLUMNS: &'static [&'static str] = &["SKU", "Artículo", "Cantidad", "Punto de reorden", "Ubicación"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        let quantity = Cell {
            text: format_count(self.quantity),
            tone: self.needs_reorder().then_some(StyleToken::Danger),
        };
        vec![
            Cell::text(&self.sku),
            Cell::text(&self.name),
            quantity,
            Cell::text(format_count(self.reorder_level)),
            Cell::text(or_dash(Some(self.location.clone()))),
        ]
    }
}

impl Tabular for Driver {
    const COLUMNS: &'static [&'static str] = &["Nombre", "Licencia", "Teléfono", "Vehículo", "Estado"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::text(&self.license),
            Cell::text(or_dash(Some(self.phone.clone()))),
            Cell::text(or_dash(self.vehicle_id.map(|id| format!("#{id}")))),
            Cell::badge(&self.status),
        ]
    }
}

impl Tabular for MaintenanceRecord {
    const COLUMNS: &'static [&'static str] = &["Vehículo", "Servicio", "Fecha", "Costo", "Estado"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(format!("#{}", self.vehicle_id)),
            Cell::text(&self.description),
            Cell::text(&self.scheduled_for),
            Cell::text(format_money(self.cost)),
            Cell::badge(&self.status),
        ]
    }
}

impl Tabular for FuelRecord {
    const COLUMNS: &'static [&'static str] = &["Vehículo", "Litros", "Costo", "Estación", "Fecha"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(format!("#{}", self.vehicle_id)),
            Cell::text(format_decimal(self.liters)),
            Cell::text(format_money(self.cost)),
            Cell::text(or_dash(Some(self.station.clone()))),
            Cell::text(format_timestamp(&self.filled_at)),
        ]
    }
}

impl Tabular for Supplier {
    const COLUMNS: &'static [&'static str] = &["Proveedor", "Contacto", "Correo", "Teléfono", "Categoría"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::text(or_dash(Some(self.contact.clone()))),
            Cell::text(or_dash(Some(self.email.clone()))),
            Cell::text(or_dash(Some(self.phone.clone()))),
            Cell::text(or_dash(Some(self.category.clone()))),
        ]
    }
}

impl Tabular for FinanceEntry {
    const COLUMNS: &'static [&'static str] = &["Fecha", "Categoría", "Descripción", "Monto", "Tipo"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.date),
            Cell::text(or_dash(Some(self.category.clone()))),
            Cell::text(or_dash(Some(self.description.clone()))),
            Cell::text(format_money(self.amount)),
            Cell::badge(&self.kind),
        ]
    }
}

impl Tabular for Report {
    const COLUMNS: &'static [&'static str] = &["Reporte", "Periodo", "Generado", "Estado"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.title),
            Cell::text(or_dash(Some(self.period.clone()))),
            Cell::text(format_timestamp(&self.generated_at)),
            Cell::badge(&self.status),
        ]
    }
}

impl Tabular for Alert {
    const COLUMNS: &'static [&'static str] = &["Fecha", "Mensaje", "Severidad"];

    fn row_id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(format_timestamp(&self.created_at)),
            Cell::text(&self.message),
            Cell::badge(&self.severity),
        ]
    }
}

/// Column headings of the table projection for `kind`.
pub fn table_columns(kind: ResourceKind) -> &'static [&'static str] {
    match kind {
        ResourceKind::Vehicles => Vehicle::COLUMNS,
        ResourceKind::Routes => DeliveryRoute::COLUMNS,
        ResourceKind::Orders => Order::COLUMNS,
        ResourceKind::Clients => Client::COLUMNS,
        ResourceKind::Inventory => InventoryItem::COLUMNS,
        ResourceKind::Drivers => Driver::COLUMNS,
        ResourceKind::Maintenance => MaintenanceRecord::COLUMNS,
        ResourceKind::Fuel => FuelRecord::COLUMNS,
        ResourceKind::Suppliers => Supplier::COLUMNS,
        ResourceKind::Finances => FinanceEntry::COLUMNS,
        ResourceKind::Reports => Report::COLUMNS,
        ResourceKind::Alerts => Alert::COLUMNS,
        ResourceKind::Metrics => &[],
    }
}

/// Table rows for any collection payload. The metrics record has no table.
pub fn table_for(payload: &Payload) -> Option<Vec<TableRow>> {
    Some(match payload {
        Payload::Vehicles(v) => table_rows(v),
        Payload::Routes(v) => table_rows(v),
        Payload::Orders(v) => table_rows(v),
        Payload::Clients(v) => table_rows(v),
        Payload::Inventory(v) => table_rows(v),
        Payload::Drivers(v) => table_rows(v),
        Payload::Maintenance(v) => table_rows(v),
        Payload::Fuel(v) => table_rows(v),
        Payload::Suppliers(v) => table_rows(v),
        Payload::Finances(v) => table_rows(v),
        Payload::Reports(v) => table_rows(v),
        Payload::Alerts(v) => table_rows(v),
        Payload::Metrics(_) => return None,
    })
}

// ---------- Formatting ----------

/// Thousands separated with '.', as written in Colombia.
pub fn format_count(n: i64) -> String {
    let grouped = group_thousands(n.unsigned_abs());
    if n < 0 { format!("-{grouped}") } else { grouped }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Whole pesos. Magnitudes past `u64::MAX` saturate.
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round();
    let grouped = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-$ {grouped}")
    } else {
        format!("$ {grouped}")
    }
}

/// At most one decimal, none when the value is whole.
pub fn format_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value))
}

/// `YYYY-MM-DD HH:MM` for RFC 3339 input, the raw text otherwise.
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: i64, status: VehicleStatus) -> Vehicle {
        Vehicle {
            id,
            plate: format!("PLT-{id}"),
            model: "NHR".to_string(),
            status,
            driver: None,
            location: None,
            fuel_level: None,
        }
    }

    #[test]
    fn featured_keeps_order_and_limit() {
        let fleet = vec![
            vehicle(1, VehicleStatus::Inactive),
            vehicle(2, VehicleStatus::Warning),
            vehicle(3, VehicleStatus::Maintenance),
            vehicle(4, VehicleStatus::Active),
            vehicle(5, VehicleStatus::Active),
        ];
        let ids: Vec<i64> = featured_vehicles(&fleet).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn featured_holds_for_every_status_mix() {
        use VehicleStatus::*;
        let statuses = [Active, Warning, Inactive, Maintenance];
        // every sequence of length 0..=4 over the four statuses
        for len in 0..=4u32 {
            for combo in 0..4usize.pow(len) {
                let fleet: Vec<Vehicle> = (0..len as usize)
                    .map(|i| vehicle(i as i64, statuses[(combo / 4usize.pow(i as u32)) % 4]))
                    .collect();
                let featured = featured_vehicles(&fleet);
                assert!(featured.len() <= FEATURED_LIMIT);
                assert!(featured.iter().all(|v| FEATURED_STATUSES.contains(&v.status)));
                assert!(featured.windows(2).all(|w| w[0].id < w[1].id));
                let eligible = fleet.iter().filter(|v| FEATURED_STATUSES.contains(&v.status)).count();
                assert_eq!(featured.len(), eligible.min(FEATURED_LIMIT));
            }
        }
    }

    #[test]
    fn metric_summary_defaults_missing_fields() {
        let cards = metric_summary(&DashboardMetrics::default());
        let labels: Vec<&str> = cards.iter().map(|c| c.label).collect();
        assert_eq!(labels, METRIC_LABELS.to_vec());
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["0", "0", "0", "0%"]);
    }

    #[test]
    fn metric_summary_formats_present_fields() {
        let metrics = DashboardMetrics {
            active_vehicles: Some(1204),
            daily_deliveries: None,
            pending_orders: Some(7),
            compliance: Some(98.5),
        };
        let values: Vec<String> = metric_summary(&metrics).into_iter().map(|c| c.value).collect();
        assert_eq!(values, vec!["1.204", "0", "7", "98.5%"]);
        assert_eq!(metric_summary(&metrics), metric_summary(&metrics));
    }

    #[test]
    fn finance_summary_balances() {
        let entry = |kind, amount| FinanceEntry {
            id: 0,
            kind,
            category: String::new(),
            amount,
            date: "2026-01-01".to_string(),
            description: String::new(),
        };
        let cards = finance_summary(&[
            entry(EntryKind::Income, 1_000_000.0),
            entry(EntryKind::Expense, 1_250_000.0),
        ]);
        assert_eq!(cards[0].value, "$ 1.000.000");
        assert_eq!(cards[1].value, "$ 1.250.000");
        assert_eq!(cards[2].value, "-$ 250.000");
        assert_eq!(cards[2].tone, StyleToken::Danger);

        let empty = finance_summary(&[]);
        assert!(empty.iter().all(|c| c.value == "$ 0"));
    }

    #[test]
    fn markers_skip_vehicles_without_location() {
        let mut located = vehicle(1, VehicleStatus::Active);
        located.location = Some(GeoPoint { lat: 4.7, lng: -74.1 });
        let markers = map_markers(&[located, vehicle(2, VehicleStatus::Active)]);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, 1);
        assert_eq!(markers[0].tone, StyleToken::Success);
    }

    #[test]
    fn alerts_sort_by_severity_then_recency() {
        let alert = |id, severity, created_at: &str| Alert {
            id,
            severity,
            message: String::new(),
            vehicle_id: None,
            created_at: created_at.to_string(),
        };
        let alerts = [
            alert(1, AlertSeverity::Info, "2026-01-03T00:00:00Z"),
            alert(2, AlertSeverity::Critical, "2026-01-01T00:00:00Z"),
            alert(3, AlertSeverity::Warning, "2026-01-02T00:00:00Z"),
            alert(4, AlertSeverity::Critical, "2026-01-02T00:00:00Z"),
        ];
        let ids: Vec<i64> = active_alerts(&alerts, 3).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![4, 2, 3]);

        // same severity, stamps in different offsets
        let alerts = [
            alert(5, AlertSeverity::Warning, "2026-03-14T10:00:00Z"),
            alert(6, AlertSeverity::Warning, "2026-03-14T09:30:00-05:00"),
        ];
        let ids: Vec<i64> = active_alerts(&alerts, 5).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![6, 5]);
    }

    #[test]
    fn recent_orders_compare_instants_across_offsets() {
        let order = |id, created_at: &str| Order {
            id,
            code: format!("PED-{id}"),
            client_id: None,
            destination: "Cali".to_string(),
            status: OrderStatus::Pending,
            total: 0.0,
            created_at: created_at.to_string(),
        };
        let orders = [
            order(1, "sin fecha"),
            order(2, "2026-03-14T10:00:00Z"),
            order(3, "2026-03-14T09:30:00-05:00"),
            order(4, ""),
            order(5, "2026-03-14T15:00:00+05:00"),
        ];
        let ids: Vec<i64> = recent_orders(&orders, 5).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 2, 5, 1, 4]);

        let ids: Vec<i64> = recent_orders(&orders, 2).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn table_rows_are_keyed_by_id() {
        let rows = table_rows(&[vehicle(9, VehicleStatus::Warning)]);
        assert_eq!(rows[0].id, 9);
        assert_eq!(rows[0].cells.len(), Vehicle::COLUMNS.len());
        assert!(rows[0].cells[4].is_badge());
        assert_eq!(rows[0].cells[3].text, "—");
    }

    #[test]
    fn formatting() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(-1234567), "-1.234.567");
        assert_eq!(format_count(i64::MIN), "-9.223.372.036.854.775.808");
        assert_eq!(format_money(-1_250.4), "-$ 1.250");
        assert_eq!(format_money(-0.4), "$ 0");
        assert_eq!(format_money(-1e19), "-$ 10.000.000.000.000.000.000");
        assert_eq!(format_money(f64::MIN), "-$ 18.446.744.073.709.551.615");
        assert_eq!(format_money(f64::NAN), "$ 0");
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(66.66), "66.7%");
        assert_eq!(format_timestamp("2026-03-14T09:30:00-05:00"), "2026-03-14 09:30");
        assert_eq!(format_timestamp("ayer"), "ayer");
    }
}
