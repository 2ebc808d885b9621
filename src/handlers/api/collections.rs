use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::{Document, ResourceKind};
use crate::store::Repository;

fn collection(name: &str) -> Result<ResourceKind, AppError> {
    ResourceKind::from_collection(name).ok_or(AppError::NotFound)
}

/// GET /api/{collection} - Every record of a read-only collection
pub async fn list(
    repo: web::Data<dyn Repository>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let kind = collection(&path)?;
    let docs = repo.list(kind).await?;
    let items: Vec<_> = docs.iter().map(Document::to_json).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/{collection}/{id}
pub async fn read(
    repo: web::Data<dyn Repository>,
    path: web::Path<(String, i64)>,
) -> Result<HttpResponse, AppError> {
    let (name, id) = path.into_inner();
    let kind = collection(&name)?;
    let doc = repo.get(kind, id).await?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(doc.to_json()))
}
