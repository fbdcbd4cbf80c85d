use async_trait::async_trait;
use tracing::info;

use crate::core::Result;
use crate::modules::settings::models::{DiscountCheckRequest, DiscountCheckResponse};

/// The discount-ceiling round-trip.
///
/// A discount is not considered applied until this check resolves; on
/// failure the prior discount state stays in effect. The returned amount
/// and verdict are binding; the caller must not substitute its own
/// recomputation.
#[async_trait]
pub trait DiscountChecker: Send + Sync {
    async fn check(&self, request: &DiscountCheckRequest) -> Result<DiscountCheckResponse>;
}

/// Checker backed by the settings service's HTTP endpoint. The sales desk
/// and the settings deployment are separate processes in production, so
/// this goes over the wire even when both happen to be co-hosted.
pub struct HttpDiscountChecker {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDiscountChecker {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl DiscountChecker for HttpDiscountChecker {
    async fn check(&self, request: &DiscountCheckRequest) -> Result<DiscountCheckResponse> {
        let url = format!("{}/settings/discount-check", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<DiscountCheckResponse>()
            .await?;

        info!(
            exceeds_limit = response.exceeds_limit,
            discount_amount = %response.discount_amount,
            "discount check verdict received"
        );

        Ok(response)
    }
}
