use actix_web::{web, HttpResponse};

use super::pages::{PageExtras, render_page};
use crate::dashboard::page::UiToggles;
use crate::dashboard::{DashboardState, FetchError, Route, Toast};
use crate::errors::AppError;
use crate::models::{ClientPatch, NewClient};
use crate::templates_structs::ClientFormView;

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Re-render the clients page with the submitted values and what went wrong.
async fn rejected(
    dash: &DashboardState,
    form: ClientFormView,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let extras = PageExtras { errors, client_form: Some(form), ..Default::default() };
    render_page(dash, Route::Clients, UiToggles::default(), extras).await
}

fn api_failure(dash: &DashboardState, action: &str, e: &FetchError) -> Vec<String> {
    dash.notifier.notify(&Toast {
        message: format!("No se pudo {action} el cliente"),
        detail: e.to_string(),
    });
    vec![format!("No se pudo {action} el cliente ({e})")]
}

/// POST /clients - Create a client from the page form
pub async fn create(
    dash: web::Data<DashboardState>,
    form: web::Form<NewClient>,
) -> Result<HttpResponse, AppError> {
    let client = form.into_inner();

    let errors = client.validate();
    if !errors.is_empty() {
        return rejected(&dash, ClientFormView::refill_create(&client), errors).await;
    }

    match dash.clients.create(&client).await {
        Ok(_) => Ok(see_other("/clients?notice=created")),
        Err(e) => {
            let errors = api_failure(&dash, "crear", &e);
            rejected(&dash, ClientFormView::refill_create(&client), errors).await
        }
    }
}

/// POST /clients/{id} - Update a client from the edit form
pub async fn update(
    dash: web::Data<DashboardState>,
    path: web::Path<i64>,
    form: web::Form<ClientPatch>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = form.into_inner();

    let errors = patch.validate();
    if !errors.is_empty() {
        return rejected(&dash, ClientFormView::refill_edit(id, &patch), errors).await;
    }

    match dash.clients.update(id, &patch).await {
        Ok(_) => Ok(see_other("/clients?notice=updated")),
        Err(e) if e.status() == Some(404) => Err(AppError::NotFound),
        Err(e) => {
            let errors = api_failure(&dash, "actualizar", &e);
            rejected(&dash, ClientFormView::refill_edit(id, &patch), errors).await
        }
    }
}
