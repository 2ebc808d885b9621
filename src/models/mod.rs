pub mod alert;
pub mod client;
pub mod driver;
pub mod entity;
pub mod finance;
pub mod fuel;
pub mod inventory;
pub mod maintenance;
pub mod metrics;
pub mod order;
pub mod record;
pub mod report;
pub mod route;
pub mod supplier;
pub mod vehicle;

pub use self::alert::{Alert, AlertSeverity};
pub use self::client::{Client, ClientPatch, ClientType, NewClient, Priority};
pub use self::driver::{Driver, DriverStatus};
pub use self::finance::{EntryKind, FinanceEntry};
pub use self::fuel::FuelRecord;
pub use self::inventory::InventoryItem;
pub use self::maintenance::{MaintenanceRecord, MaintenanceStatus};
pub use self::metrics::DashboardMetrics;
pub use self::order::{Order, OrderStatus};
pub use self::record::{Document, ResourceKind};
pub use self::report::{Report, ReportStatus};
pub use self::route::{DeliveryRoute, RouteStatus};
pub use self::supplier::Supplier;
pub use self::vehicle::{GeoPoint, Vehicle, VehicleStatus};
