//! System settings endpoints

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::Result;
use crate::modules::settings::models::DiscountCheckRequest;
use crate::modules::settings::services::SettingsService;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/settings")
            .route("", web::get().to(get_settings))
            .route("/discount-check", web::post().to(check_discount)),
    );
}

/// GET /settings
async fn get_settings(service: web::Data<Arc<SettingsService>>) -> Result<HttpResponse> {
    let settings = service.get_settings().await?;
    Ok(HttpResponse::Ok().json(settings))
}

/// POST /settings/discount-check
///
/// The stateless ceiling check the live form calls before a discount is
/// considered applied. The response is binding on the caller.
async fn check_discount(
    service: web::Data<Arc<SettingsService>>,
    request: web::Json<DiscountCheckRequest>,
) -> Result<HttpResponse> {
    let verdict = service.check_discount(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(verdict))
}
