//! Quotation lifecycle endpoints

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::core::Result;
use crate::modules::quotations::models::{
    ApplyDiscountRequest, CreateQuotationRequest, UpdateQuotationRequest,
};
use crate::modules::quotations::services::QuotationService;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/quotations")
            .route("", web::post().to(create_quotation))
            .route("", web::get().to(list_quotations))
            .route("/{id}", web::get().to(get_quotation))
            .route("/{id}", web::put().to(update_quotation))
            .route("/{id}/discount", web::post().to(apply_discount))
            .route("/{id}/submit", web::post().to(submit_quotation)),
    );
}

#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(default = "default_limit")]
    limit: i64,
    #[serde(default)]
    offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// POST /quotations
async fn create_quotation(
    service: web::Data<Arc<QuotationService>>,
    request: web::Json<CreateQuotationRequest>,
) -> Result<HttpResponse> {
    let response = service.create_quotation(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// GET /quotations
async fn list_quotations(
    service: web::Data<Arc<QuotationService>>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let responses = service.list_quotations(params.limit, params.offset).await?;
    Ok(HttpResponse::Ok().json(responses))
}

/// GET /quotations/{id}
async fn get_quotation(
    service: web::Data<Arc<QuotationService>>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let response = service.get_quotation(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// PUT /quotations/{id}
async fn update_quotation(
    service: web::Data<Arc<QuotationService>>,
    id: web::Path<String>,
    request: web::Json<UpdateQuotationRequest>,
) -> Result<HttpResponse> {
    let response = service.update_quotation(&id, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /quotations/{id}/discount
async fn apply_discount(
    service: web::Data<Arc<QuotationService>>,
    id: web::Path<String>,
    request: web::Json<ApplyDiscountRequest>,
) -> Result<HttpResponse> {
    let response = service.apply_discount(&id, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /quotations/{id}/submit
async fn submit_quotation(
    service: web::Data<Arc<QuotationService>>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let response = service.submit_quotation(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}
