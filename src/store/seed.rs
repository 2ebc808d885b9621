use chrono::{Duration, Local};
use serde::Serialize;

use super::{Repository, StoreError};
use crate::models::record::to_fields;
use crate::models::*;

async fn insert_all<T: Serialize>(
    repo: &dyn Repository,
    kind: ResourceKind,
    records: &[T],
) -> Result<usize, StoreError> {
    for record in records {
        repo.insert(kind, to_fields(record)?).await?;
    }
    Ok(records.len())
}

/// Seed demo fleet data. Skipped when the repository already holds vehicles.
/// Returns the number of records created.
pub async fn seed_demo(repo: &dyn Repository) -> Result<usize, StoreError> {
    let existing = repo.count(ResourceKind::Vehicles).await?;
    if existing > 0 {
        log::info!("Repository already holds {existing} vehicles, skipping demo seed");
        return Ok(0);
    }

    let now = Local::now();
    let ts = |hours_ago: i64| (now - Duration::hours(hours_ago)).to_rfc3339();
    let day = |days_ahead: i64| (now + Duration::days(days_ahead)).format("%Y-%m-%d").to_string();

    let mut created = 0;

    created += insert_all(repo, ResourceKind::Vehicles, &[
        vehicle("JKL-482", "Chevrolet NHR", VehicleStatus::Active, Some("Carlos Ruiz"), Some((4.711, -74.072)), 78.0),
        vehicle("MNT-115", "Hino 300", VehicleStatus::Warning, Some("Luisa Gómez"), Some((6.244, -75.581)), 22.0),
        vehicle("QWE-903", "Foton Aumark", VehicleStatus::Active, Some("Andrés Pardo"), Some((3.451, -76.532)), 64.0),
        vehicle("RTA-660", "Isuzu NPR", VehicleStatus::Maintenance, None, Some((4.813, -75.694)), 40.0),
        vehicle("ZXC-274", "JAC X200", VehicleStatus::Inactive, None, None, 0.0),
        vehicle("BNM-538", "Kenworth T370", VehicleStatus::Active, Some("Diana Mora"), Some((10.391, -75.479)), 91.0),
    ]).await?;

    created += insert_all(repo, ResourceKind::Clients, &[
        NewClient {
            name: "Distribuidora La Cosecha".to_string(),
            email: "compras@lacosecha.co".to_string(),
            phone: "+57 310 555 0192".to_string(),
            address: "Cra 15 # 88-21, Bogotá".to_string(),
            client_type: ClientType::Distributor,
            priority: Priority::High,
        },
        NewClient {
            name: "Agroinsumos del Valle".to_string(),
            email: "pedidos@agrovalle.co".to_string(),
            phone: "+57 315 220 7781".to_string(),
            address: "Calle 5 # 38-40, Cali".to_string(),
            client_type: ClientType::Customer,
            priority: Priority::Normal,
        },
    ]).await?;

    created += insert_all(repo, ResourceKind::Orders, &[
        order("PED-1042", Some(2), "Cali", OrderStatus::Delivered, 1_850_000.0, ts(3)),
        order("PED-1043", Some(1), "Bogotá", OrderStatus::InTransit, 920_000.0, ts(5)),
        order("PED-1044", Some(1), "Medellín", OrderStatus::Pending, 2_300_000.0, ts(1)),
        order("PED-1045", None, "Cartagena", OrderStatus::Pending, 480_000.0, ts(30)),
        order("PED-1041", Some(2), "Pereira", OrderStatus::Cancelled, 150_000.0, ts(52)),
    ]).await?;

    created += insert_all(repo, ResourceKind::Routes, &[
        DeliveryRoute {
            id: 0,
            name: "Corredor Bogotá - Medellín".to_string(),
            origin: "Bogotá".to_string(),
            destination: "Medellín".to_string(),
            distance_km: 415.0,
            status: RouteStatus::Active,
            vehicle_id: Some(2),
        },
        DeliveryRoute {
            id: 0,
            name: "Costa Caribe".to_string(),
            origin: "Barranquilla".to_string(),
            destination: "Cartagena".to_string(),
            distance_km: 120.0,
            status: RouteStatus::Planned,
            vehicle_id: None,
        },
    ]).await?;

    created += insert_all(repo, ResourceKind::Drivers, &[
        driver("Carlos Ruiz", "C2-1029384", DriverStatus::OnRoute, Some(1)),
        driver("Luisa Gómez", "C2-5583920", DriverStatus::OnRoute, Some(2)),
        driver("Andrés Pardo", "C3-7720015", DriverStatus::Available, Some(3)),
        driver("Diana Mora", "C3-6648102", DriverStatus::OffDuty, None),
    ]).await?;

    created += insert_all(repo, ResourceKind::Inventory, &[
        item("FIL-ACE-01", "Filtro de aceite", 4, 10, "Bodega Norte"),
        item("LLA-295-80", "Llanta 295/80 R22.5", 16, 8, "Bodega Norte"),
        item("LUB-15W40", "Lubricante 15W-40 (galón)", 30, 12, "Bodega Sur"),
    ]).await?;

    created += insert_all(repo, ResourceKind::Maintenance, &[
        MaintenanceRecord {
            id: 0,
            vehicle_id: 4,
            description: "Cambio de frenos".to_string(),
            scheduled_for: day(0),
            status: MaintenanceStatus::InProgress,
            cost: 1_200_000.0,
        },
        MaintenanceRecord {
            id: 0,
            vehicle_id: 2,
            description: "Revisión técnico-mecánica".to_string(),
            scheduled_for: day(-3),
            status: MaintenanceStatus::Overdue,
            cost: 350_000.0,
        },
        MaintenanceRecord {
            id: 0,
            vehicle_id: 1,
            description: "Cambio de aceite".to_string(),
            scheduled_for: day(7),
            status: MaintenanceStatus::Scheduled,
            cost: 280_000.0,
        },
    ]).await?;

    created += insert_all(repo, ResourceKind::Fuel, &[
        FuelRecord {
            id: 0,
            vehicle_id: 1,
            liters: 120.0,
            cost: 1_140_000.0,
            station: "Terpel Autopista Norte".to_string(),
            filled_at: ts(20),
        },
        FuelRecord {
            id: 0,
            vehicle_id: 3,
            liters: 95.5,
            cost: 905_000.0,
            station: "Primax Cali Sur".to_string(),
            filled_at: ts(44),
        },
    ]).await?;

    created += insert_all(repo, ResourceKind::Suppliers, &[Supplier {
        id: 0,
        name: "Repuestos Andinos S.A.S.".to_string(),
        contact: "Marta Salazar".to_string(),
        email: "ventas@repuestosandinos.co".to_string(),
        phone: "+57 601 745 2200".to_string(),
        category: "Repuestos".to_string(),
    }]).await?;

    created += insert_all(repo, ResourceKind::Finances, &[
        entry(EntryKind::Income, "Fletes", 12_400_000.0, day(-2), "Fletes semana 10"),
        entry(EntryKind::Expense, "Combustible", 2_045_000.0, day(-1), "Tanqueos flota"),
        entry(EntryKind::Expense, "Mantenimiento", 1_550_000.0, day(0), "Frenos y revisión"),
    ]).await?;

    created += insert_all(repo, ResourceKind::Reports, &[Report {
        id: 0,
        title: "Consumo de combustible mensual".to_string(),
        period: now.format("%Y-%m").to_string(),
        generated_at: ts(12),
        status: ReportStatus::Ready,
    }]).await?;

    created += insert_all(repo, ResourceKind::Alerts, &[
        Alert {
            id: 0,
            severity: AlertSeverity::Warning,
            message: "MNT-115 con nivel de combustible bajo (22%)".to_string(),
            vehicle_id: Some(2),
            created_at: ts(2),
        },
        Alert {
            id: 0,
            severity: AlertSeverity::Critical,
            message: "Revisión técnico-mecánica vencida para MNT-115".to_string(),
            vehicle_id: Some(2),
            created_at: ts(6),
        },
        Alert {
            id: 0,
            severity: AlertSeverity::Info,
            message: "RTA-660 ingresó a taller".to_string(),
            vehicle_id: Some(4),
            created_at: ts(8),
        },
    ]).await?;

    log::info!("Demo seed complete: {created} records");
    Ok(created)
}

fn vehicle(
    plate: &str,
    model: &str,
    status: VehicleStatus,
    driver: Option<&str>,
    location: Option<(f64, f64)>,
    fuel_level: f64,
) -> Vehicle {
    Vehicle {
        id: 0,
        plate: plate.to_string(),
        model: model.to_string(),
        status,
        driver: driver.map(str::to_string),
        location: location.map(|(lat, lng)| GeoPoint { lat, lng }),
        fuel_level: Some(fuel_level),
    }
}

fn order(
    code: &str,
    client_id: Option<i64>,
    destination: &str,
    status: OrderStatus,
    total: f64,
    created_at: String,
) -> Order {
    Order {
        id: 0,
        code: code.to_string(),
        client_id,
        destination: destination.to_string(),
        status,
        total,
        created_at,
    }
}

fn driver(name: &str, license: &str, status: DriverStatus, vehicle_id: Option<i64>) -> Driver {
    Driver {
        id: 0,
        name: name.to_string(),
        license: license.to_string(),
        phone: String::new(),
        status,
        vehicle_id,
    }
}

fn item(sku: &str, name: &str, quantity: i64, reorder_level: i64, location: &str) -> InventoryItem {
    InventoryItem {
        id: 0,
        sku: sku.to_string(),
        name: name.to_string(),
        quantity,
        reorder_level,
        location: location.to_string(),
    }
}

fn entry(kind: EntryKind, category: &str, amount: f64, date: String, description: &str) -> FinanceEntry {
    FinanceEntry {
        id: 0,
        kind,
        category: category.to_string(),
        amount,
        date,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryRepository, list_as};

    #[tokio::test]
    async fn seed_is_idempotent_and_decodable() {
        let repo = MemoryRepository::new();
        let created = seed_demo(&repo).await.expect("seed");
        assert!(created > 0);
        assert_eq!(seed_demo(&repo).await.expect("reseed"), 0);

        let vehicles: Vec<Vehicle> = list_as(&repo, ResourceKind::Vehicles).await.expect("vehicles");
        assert_eq!(vehicles.len(), 6);
        let clients: Vec<Client> = list_as(&repo, ResourceKind::Clients).await.expect("clients");
        assert_eq!(clients.len(), 2);
        let alerts: Vec<Alert> = list_as(&repo, ResourceKind::Alerts).await.expect("alerts");
        assert_eq!(alerts.len(), 3);
    }
}
