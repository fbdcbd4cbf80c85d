//! Catalog read endpoints
//!
//! Read-only; catalog maintenance is not part of this service.

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::Result;
use crate::modules::catalog::services::CatalogService;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/catalog")
            .route("/venues", web::get().to(list_venues))
            .route("/room-types", web::get().to(list_room_types))
            .route("/menu-packages", web::get().to(list_menu_packages))
            .route(
                "/menu-packages/{id}/items",
                web::get().to(list_package_items),
            )
            .route("/additional-items", web::get().to(list_additional_items)),
    );
}

/// GET /catalog/venues
async fn list_venues(service: web::Data<Arc<CatalogService>>) -> Result<HttpResponse> {
    let venues = service.list_venues().await?;
    Ok(HttpResponse::Ok().json(venues))
}

/// GET /catalog/room-types
async fn list_room_types(service: web::Data<Arc<CatalogService>>) -> Result<HttpResponse> {
    let room_types = service.list_room_types().await?;
    Ok(HttpResponse::Ok().json(room_types))
}

/// GET /catalog/menu-packages
async fn list_menu_packages(service: web::Data<Arc<CatalogService>>) -> Result<HttpResponse> {
    let packages = service.list_menu_packages().await?;
    Ok(HttpResponse::Ok().json(packages))
}

/// GET /catalog/menu-packages/{id}/items
async fn list_package_items(
    service: web::Data<Arc<CatalogService>>,
    package_id: web::Path<String>,
) -> Result<HttpResponse> {
    let items = service.list_package_items(&package_id).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /catalog/additional-items
async fn list_additional_items(service: web::Data<Arc<CatalogService>>) -> Result<HttpResponse> {
    let items = service.list_additional_items().await?;
    Ok(HttpResponse::Ok().json(items))
}
