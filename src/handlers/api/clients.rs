use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::record::to_fields;
use crate::models::{ClientPatch, Document, NewClient, ResourceKind};
use crate::store::{Repository, StoreError};
use crate::templates_structs::ApiErrorResponse;

/// GET /api/clients - List clients in creation order
pub async fn list(repo: web::Data<dyn Repository>) -> Result<HttpResponse, AppError> {
    let docs = repo.list(ResourceKind::Clients).await?;
    let items: Vec<_> = docs.iter().map(Document::to_json).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/clients/{id} - Get single client by ID
pub async fn read(
    repo: web::Data<dyn Repository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let doc = repo
        .get(ResourceKind::Clients, path.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(doc.to_json()))
}

/// POST /api/clients - Create new client, 201 with the stored record
pub async fn create(
    repo: web::Data<dyn Repository>,
    body: web::Json<NewClient>,
) -> Result<HttpResponse, AppError> {
    let client = body.into_inner();

    let errors = client.validate();
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse::validation(&errors)));
    }

    let fields = to_fields(&client).map_err(StoreError::from)?;
    let doc = repo.insert(ResourceKind::Clients, fields).await?;
    log::info!("Client {} created via API", doc.id);

    Ok(HttpResponse::Created().json(doc.to_json()))
}

/// PATCH /api/clients/{id} - Change only the fields present in the body
pub async fn update(
    repo: web::Data<dyn Repository>,
    path: web::Path<i64>,
    body: web::Json<ClientPatch>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = body.into_inner();

    let errors = patch.validate();
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse::validation(&errors)));
    }

    if patch.is_empty() {
        let doc = repo
            .get(ResourceKind::Clients, id)
            .await?
            .ok_or(AppError::NotFound)?;
        return Ok(HttpResponse::Ok().json(doc.to_json()));
    }

    let fields = to_fields(&patch).map_err(StoreError::from)?;
    let doc = repo
        .update(ResourceKind::Clients, id, fields)
        .await?
        .ok_or(AppError::NotFound)?;
    log::info!("Client {id} updated via API");

    Ok(HttpResponse::Ok().json(doc.to_json()))
}

/// DELETE /api/clients/{id} - 204 on success
pub async fn delete(
    repo: web::Data<dyn Repository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if !repo.delete(ResourceKind::Clients, id).await? {
        return Err(AppError::NotFound);
    }
    log::info!("Client {id} deleted via API");
    Ok(HttpResponse::NoContent().finish())
}
