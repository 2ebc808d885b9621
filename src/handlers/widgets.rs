use actix_web::{web, HttpResponse};

use crate::dashboard::page::PageLayout;
use crate::dashboard::widget::render_widget;
use crate::dashboard::{DashboardState, FetchState, Route, Toast, use_resource};
use crate::errors::AppError;

/// GET /widgets/{page}/{widget} - One widget on its own, used by the browser
/// to replace a loading skeleton. Still-loading widgets come back as skeletons.
///
/// A key whose last request failed is rendered from the cache as is: polling
/// a skeleton never retries a failure. The next page load does.
pub async fn fragment(
    dash: web::Data<DashboardState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (page, widget) = path.into_inner();
    let route = Route::from_slug(&page).ok_or(AppError::NotFound)?;
    let layout = PageLayout::for_route(route);
    let spec = *layout.widget(&widget).ok_or(AppError::NotFound)?;

    let key = spec.key();
    let state = match dash.cache.peek(&key) {
        Some(failed @ FetchState::Error(_)) => failed,
        _ => {
            let handle = use_resource(&dash.cache, key);
            handle.settled(dash.render_budget).await
        }
    };

    let rendered = render_widget(route.slug(), &spec, &state)?;
    if let Some(error) = &rendered.failure {
        dash.notifier.notify(&Toast::fetch_failed(spec.title, error));
    }

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(rendered.html))
}
