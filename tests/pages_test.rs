/// Integration tests for page routing and composition.
///
/// The dashboard's data source is a `StubFetcher`, so every widget state
/// (populated, empty, unavailable, still loading) can be forced per path.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

use fleetdash::dashboard::Route;
use fleetdash::handlers;

mod common;
use common::{SETTLE_BUDGET, SHORT_BUDGET, StubFetcher, dashboard, memory_repo, server_error};

fn metrics_body() -> Value {
    json!({"activeVehicles": 12, "dailyDeliveries": 1500, "pendingOrders": 3, "compliance": 98.5})
}

fn vehicles_body() -> Value {
    json!([
        {"id": 1, "plate": "JKL-482", "model": "Chevrolet NHR", "status": "active",
         "driver": "Carlos Ruiz", "location": {"lat": 4.711, "lng": -74.072}, "fuelLevel": 78.0},
        {"id": 2, "plate": "MNT-115", "model": "Hino 300", "status": "warning",
         "location": {"lat": 6.244, "lng": -75.581}},
        {"id": 3, "plate": "ZXC-274", "model": "JAC X200", "status": "inactive"}
    ])
}

async fn get_page(stub: StubFetcher, budget: std::time::Duration, uri: &str) -> (StatusCode, String) {
    let (dash, _) = dashboard(Arc::new(stub), budget);
    let app = test::init_service(
        App::new()
            .app_data(memory_repo())
            .app_data(dash)
            .configure(handlers::configure),
    )
    .await;
    let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[actix_rt::test]
async fn test_every_route_renders_its_page() {
    let (dash, _) = dashboard(Arc::new(StubFetcher::new()), SETTLE_BUDGET);
    let app = test::init_service(
        App::new()
            .app_data(memory_repo())
            .app_data(dash)
            .configure(handlers::configure),
    )
    .await;

    for route in Route::ALL {
        let req = test::TestRequest::get().uri(route.path()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", route.path());
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
        assert!(
            body.contains(&format!("<h1 class=\"page-title\">{}</h1>", route.title())),
            "{} rendered the wrong page",
            route.path()
        );
    }
}

#[actix_rt::test]
async fn test_unknown_paths_render_not_found() {
    for path in ["/nope", "/fleet/", "/clients/extra/segment"] {
        let (status, body) = get_page(StubFetcher::new(), SHORT_BUDGET, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(body.contains("no existe"), "{path}");
        assert!(body.contains("Volver al panel"));
    }
}

#[actix_rt::test]
async fn test_unknown_api_paths_answer_json() {
    let (status, body) = get_page(StubFetcher::new(), SHORT_BUDGET, "/api/vehicles/1/history").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(json["error"], "Not found");
}

#[actix_rt::test]
async fn test_navigation_marks_the_current_page() {
    let (_, body) = get_page(StubFetcher::new(), SHORT_BUDGET, "/fleet").await;
    assert!(body.contains("class=\"active\" aria-current=\"page\">Flota</a>"));
    assert_eq!(body.matches("aria-current").count(), 1);
}

#[actix_rt::test]
async fn test_menu_toggle_is_carried_in_the_query() {
    let (_, closed) = get_page(StubFetcher::new(), SHORT_BUDGET, "/orders").await;
    assert!(!closed.contains("nav-open"));
    assert!(closed.contains("?menu=open\""));

    let (_, open) = get_page(StubFetcher::new(), SHORT_BUDGET, "/orders?menu=open").await;
    assert!(open.contains("class=\"nav-open\""));
}

// ---------------------------------------------------------------------------
// Widget states
// ---------------------------------------------------------------------------

#[actix_rt::test]
async fn test_dashboard_renders_populated_widgets() {
    let stub = StubFetcher::new()
        .with("/api/dashboard/metrics", metrics_body())
        .with("/api/vehicles", vehicles_body())
        .with("/api/alerts", json!([]))
        .with("/api/orders", json!([]));
    let (status, body) = get_page(stub, SETTLE_BUDGET, "/").await;
    assert_eq!(status, StatusCode::OK);

    for label in ["Vehículos activos", "Entregas hoy", "Pedidos pendientes", "Cumplimiento"] {
        assert!(body.contains(label), "missing metric {label}");
    }
    assert!(body.contains("1.500"));
    assert!(body.contains("98.5%"));

    // featured: active and warning vehicles, at most two
    assert!(body.contains("JKL-482"));
    assert!(body.contains("MNT-115"));
    assert!(body.contains("class=\"map-pin"));

    assert!(body.contains("No hay datos disponibles"));
    assert!(!body.contains("data-widget-src"), "nothing should still be loading");
}

#[actix_rt::test]
async fn test_failed_widget_is_unavailable_and_reported() {
    let stub = StubFetcher::new()
        .with("/api/dashboard/metrics", metrics_body())
        .with("/api/vehicles", vehicles_body())
        .with("/api/alerts", json!([]))
        .with_error("/api/orders", server_error());
    let (dash, notifier) = dashboard(Arc::new(stub), SETTLE_BUDGET);
    let app = test::init_service(
        App::new()
            .app_data(memory_repo())
            .app_data(dash)
            .configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "one failed widget never fails the page");
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");

    assert!(body.contains("Información no disponible en este momento"));
    assert!(body.contains("Vehículos activos"), "other widgets still render");
    assert!(body.contains("No se pudo cargar «Pedidos recientes»"));

    let toasts = notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert!(toasts[0].detail.contains("HTTP 500"));
}

#[actix_rt::test]
async fn test_slow_widgets_render_as_skeletons() {
    let (stub, _gate) = StubFetcher::gated();
    let (status, body) = get_page(stub, SHORT_BUDGET, "/").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body.contains("data-widget-src=\"/widgets/dashboard/metrics\""));
    assert!(body.contains("data-widget-src=\"/widgets/dashboard/fleet-map\""));
    assert!(body.contains("data-widget-src=\"/widgets/dashboard/recent-orders\""));
    // four metric placeholders plus two featured-vehicle placeholders at least
    assert!(body.matches("skeleton").count() >= 6);
}

#[actix_rt::test]
async fn test_clients_page_shows_table_and_form() {
    let stub = StubFetcher::new().with(
        "/api/clients",
        json!([{
            "id": 7,
            "name": "Distribuidora Andina",
            "email": "compras@andina.co",
            "clientType": "distributor",
            "priority": "urgent"
        }]),
    );
    let (status, body) = get_page(stub, SETTLE_BUDGET, "/clients?notice=created").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body.contains("Cliente creado correctamente"));
    assert!(body.contains("Distribuidora Andina"));
    assert!(body.contains("Distribuidor"));
    assert!(body.contains("Urgente"));
    assert!(body.contains("href=\"/clients?edit=7\""));
    assert!(body.contains("Nuevo cliente"));
    assert!(body.contains("name=\"clientType\""));
}
