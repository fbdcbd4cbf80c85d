use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use banquetdesk::config::Config;
use banquetdesk::middleware::{ErrorHandler, RequestId};
use banquetdesk::modules::catalog::controllers as catalog_controllers;
use banquetdesk::modules::catalog::repositories::CatalogRepository;
use banquetdesk::modules::catalog::services::CatalogService;
use banquetdesk::modules::proposals::controllers as proposal_controllers;
use banquetdesk::modules::proposals::services::ProposalRenderer;
use banquetdesk::modules::quotations::controllers as quotation_controllers;
use banquetdesk::modules::quotations::repositories::{
    MySqlQuotationRepository, QuotationRepository,
};
use banquetdesk::modules::quotations::services::{HttpDiscountChecker, QuotationService};
use banquetdesk::modules::settings::controllers as settings_controllers;
use banquetdesk::modules::settings::repositories::SettingsRepository;
use banquetdesk::modules::settings::services::SettingsService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "banquetdesk=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting BanquetDesk Sales Operations Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Wire repositories and services
    let quotation_repo: Arc<dyn QuotationRepository> =
        Arc::new(MySqlQuotationRepository::new(db_pool.clone()));
    let settings_repo = Arc::new(SettingsRepository::new(db_pool.clone()));
    let catalog_repo = Arc::new(CatalogRepository::new(db_pool.clone()));

    let catalog_service = Arc::new(CatalogService::new(catalog_repo));
    let settings_service = Arc::new(SettingsService::new(settings_repo.clone()));
    let discount_checker = Arc::new(HttpDiscountChecker::new(
        config.pricing.discount_check_base_url.clone(),
    ));
    let quotation_service = Arc::new(QuotationService::new(
        quotation_repo.clone(),
        settings_repo,
        catalog_service.clone(),
        discount_checker,
    ));
    let proposal_renderer = Arc::new(ProposalRenderer::new(quotation_repo));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let server = HttpServer::new(move || {
        // First-registered middleware sits closest to the handlers
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(catalog_service.clone()))
            .app_data(web::Data::new(settings_service.clone()))
            .app_data(web::Data::new(quotation_service.clone()))
            .app_data(web::Data::new(proposal_renderer.clone()))
            .configure(catalog_controllers::configure)
            .configure(settings_controllers::configure)
            .configure(quotation_controllers::configure)
            .configure(proposal_controllers::configure)
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "banquetdesk"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "BanquetDesk Sales Operations",
        "version": "0.1.0",
        "status": "running"
    }))
}
