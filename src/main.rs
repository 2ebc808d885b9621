use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use fleetdash::config::AppConfig;
use fleetdash::dashboard::{DashboardState, HttpFetcher, LogNotifier};
use fleetdash::store::{MemoryRepository, PgRepository, Repository, seed};
use fleetdash::{db, handlers};

async fn open_repository(config: &AppConfig) -> io::Result<Arc<dyn Repository>> {
    let Some(url) = config.database_url.as_deref() else {
        log::warn!("DATABASE_URL not set, records are kept in memory and lost on restart");
        return Ok(Arc::new(MemoryRepository::new()));
    };
    let pool = db::init_pool(url).await.map_err(io::Error::other)?;
    db::run_migrations(&pool).await.map_err(io::Error::other)?;
    Ok(Arc::new(PgRepository::new(pool)))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let repository = open_repository(&config).await?;

    if config.seed_demo {
        let created = seed::seed_demo(repository.as_ref())
            .await
            .map_err(io::Error::other)?;
        if created > 0 {
            log::info!("Seeded {created} demo records");
        }
    }

    let fetcher = Arc::new(HttpFetcher::new(config.api_base.clone()));
    let dashboard = web::Data::new(DashboardState::new(
        fetcher,
        Arc::new(LogNotifier),
        config.cache_ttl,
        config.render_budget,
    ));
    let repo: web::Data<dyn Repository> = web::Data::from(repository);

    log::info!("Starting server at http://{}", config.bind);
    log::info!("Dashboard data from {}", config.api_base);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .app_data(dashboard.clone())
            .configure(handlers::configure)
    })
    .bind(config.bind)?
    .run()
    .await
}
