use actix_web::{http::Method, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::dashboard::page::{PageLayout, UiToggles, compose};
use crate::dashboard::{DashboardState, Dispatch, Route, Toast};
use crate::errors::{AppError, render};
use crate::templates_structs::{
    ApiErrorResponse, ClientFormView, NotFoundTemplate, PageContext, PageTemplate,
};

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    notice: Option<String>,
    edit: Option<i64>,
}

fn notice_message(code: &str) -> Option<&'static str> {
    match code {
        "created" => Some("Cliente creado correctamente"),
        "updated" => Some("Cliente actualizado correctamente"),
        _ => None,
    }
}

/// What a handler adds to a page beyond its widgets.
#[derive(Default)]
pub struct PageExtras {
    pub flash: Option<String>,
    pub errors: Vec<String>,
    pub client_form: Option<ClientFormView>,
}

/// Fallback for every path no other service claims: a dashboard page when
/// the dispatcher knows the path, the not-found view otherwise.
pub async fn dispatch(
    req: HttpRequest,
    dash: web::Data<DashboardState>,
) -> Result<HttpResponse, AppError> {
    let path = req.path();
    let toggles = UiToggles::from_query(req.query_string());

    let route = match dash.dispatcher.dispatch(path) {
        Dispatch::Page(route) if req.method() == Method::GET => route,
        _ => return not_found(path, toggles),
    };

    let query = web::Query::<PageQuery>::from_query(req.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default();
    let mut extras = PageExtras {
        flash: query.notice.as_deref().and_then(notice_message).map(str::to_string),
        ..Default::default()
    };
    if route == Route::Clients {
        extras.client_form = Some(client_form(&dash, query.edit).await);
    }

    render_page(&dash, route, toggles, extras).await
}

/// Create form, or the edit form for `edit` when that client can be loaded.
async fn client_form(dash: &DashboardState, edit: Option<i64>) -> ClientFormView {
    let Some(id) = edit else {
        return ClientFormView::create();
    };
    match dash.clients.api().get(id).await {
        Ok(client) => ClientFormView::edit(&client),
        Err(e) => {
            dash.notifier.notify(&Toast {
                message: format!("No se pudo cargar el cliente #{id}"),
                detail: e.to_string(),
            });
            ClientFormView::create()
        }
    }
}

/// Mount the page's widgets, give them the render budget, and render.
pub async fn render_page(
    dash: &DashboardState,
    route: Route,
    toggles: UiToggles,
    extras: PageExtras,
) -> Result<HttpResponse, AppError> {
    let layout = PageLayout::for_route(route);
    let mounted = layout.mount(&dash.cache);
    let settled = mounted.settle(dash.render_budget).await;
    drop(mounted);

    let (regions, toasts) = compose(route, &settled, dash.notifier.as_ref())?;

    let mut ctx = PageContext::build(route.path(), route.title(), toggles);
    ctx.toasts = toasts;
    ctx.flash = extras.flash;
    ctx.errors = extras.errors;

    render(PageTemplate { ctx, regions, client_form: extras.client_form })
}

fn not_found(path: &str, toggles: UiToggles) -> Result<HttpResponse, AppError> {
    if path.starts_with("/api/") || path == "/api" {
        return Ok(HttpResponse::NotFound().json(ApiErrorResponse::new("Not found")));
    }
    let tmpl = NotFoundTemplate {
        ctx: PageContext::build(path, "Página no encontrada", toggles),
        path: path.to_string(),
    };
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(askama::Template::render(&tmpl)?))
}
