use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::errors::AppError;
use crate::models::{MaintenanceRecord, Order, ResourceKind, Vehicle, metrics};
use crate::store::{Repository, list_as};

/// GET /api/dashboard/metrics - Counters computed from the stored collections
pub async fn show(repo: web::Data<dyn Repository>) -> Result<HttpResponse, AppError> {
    let repo = repo.get_ref();
    let vehicles: Vec<Vehicle> = list_as(repo, ResourceKind::Vehicles).await?;
    let orders: Vec<Order> = list_as(repo, ResourceKind::Orders).await?;
    let maintenance: Vec<MaintenanceRecord> = list_as(repo, ResourceKind::Maintenance).await?;

    let now = Local::now();
    Ok(HttpResponse::Ok().json(metrics::compute(&vehicles, &orders, &maintenance, &now)))
}
