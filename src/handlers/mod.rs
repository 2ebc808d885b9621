pub mod api;
pub mod client_forms;
pub mod pages;
pub mod widgets;

use actix_web::web;

/// Every route of the application. Page paths are not registered one by one:
/// unclaimed requests fall through to the route dispatcher.
pub fn configure(cfg: &mut web::ServiceConfig) {
    api::configure(cfg);
    cfg.route("/widgets/{page}/{widget}", web::get().to(widgets::fragment))
        // GET /clients is a page; only the form posts are claimed here
        .service(
            web::resource("/clients")
                .route(web::post().to(client_forms::create))
                .default_service(web::to(pages::dispatch)),
        )
        .service(
            web::resource("/clients/{id}")
                .route(web::post().to(client_forms::update))
                .default_service(web::to(pages::dispatch)),
        )
        .service(actix_files::Files::new("/static", "./static"))
        .default_service(web::to(pages::dispatch));
}
