//! Proposal endpoint
//!
//! Returns the pre-rounded, pre-formatted breakdown object the PDF engine
//! consumes. Document layout itself lives outside this service.

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::Result;
use crate::modules::proposals::services::ProposalRenderer;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/quotations/{id}/proposal",
        web::get().to(get_proposal),
    );
}

/// GET /quotations/{id}/proposal
async fn get_proposal(
    renderer: web::Data<Arc<ProposalRenderer>>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let document = renderer.render(&id).await?;
    Ok(HttpResponse::Ok().json(document))
}
