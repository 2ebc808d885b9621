pub mod clients;
pub mod collections;
pub mod metrics;

use actix_web::{
    web, Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, header},
    middleware::Next,
};

use crate::templates_structs::ApiErrorResponse;

fn is_json(req: &ServiceRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

/// Client mutations must declare a JSON body, even DELETE. Reads pass through.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let mutating = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE].contains(req.method());
    if mutating && !is_json(&req) {
        log::debug!("Rejected {} {} without a JSON content type", req.method(), req.path());
        let response = HttpResponse::BadRequest().json(ApiErrorResponse::new(
            "Content-Type must be application/json for mutation requests",
        ));
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Malformed or mistyped JSON bodies get the same error shape as validation failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ApiErrorResponse {
            error: "Invalid JSON body".to_string(),
            details: Some(err.to_string()),
        });
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// Configure REST API routes. Registration order matters: the metrics record
/// and the clients scope come before the generic collection routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .route("/dashboard/metrics", web::get().to(metrics::show))
            .service(
                web::scope("/clients")
                    .wrap(actix_web::middleware::from_fn(require_json_content_type))
                    .route("", web::get().to(clients::list))
                    .route("", web::post().to(clients::create))
                    .route("/{id}", web::get().to(clients::read))
                    .route("/{id}", web::patch().to(clients::update))
                    .route("/{id}", web::delete().to(clients::delete)),
            )
            .route("/{collection}", web::get().to(collections::list))
            .route("/{collection}/{id}", web::get().to(collections::read)),
    );
}
