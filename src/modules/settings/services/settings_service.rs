use std::sync::Arc;

use tracing::{info, warn};

use crate::core::Result;
use crate::modules::pricing::services::DiscountResolver;
use crate::modules::settings::models::{
    DiscountCheckRequest, DiscountCheckResponse, SystemSettings,
};
use crate::modules::settings::repositories::SettingsRepository;

/// Service for system settings and the authoritative discount check.
///
/// The check runs the same resolver the live form uses, so there is exactly
/// one formula in the codebase; what makes this path authoritative is that
/// it owns the fixed-mode ceiling verdict and the current ceiling value.
pub struct SettingsService {
    settings_repo: Arc<SettingsRepository>,
}

impl SettingsService {
    pub fn new(settings_repo: Arc<SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    pub async fn get_settings(&self) -> Result<SystemSettings> {
        self.settings_repo.get().await
    }

    /// Resolve a requested discount against the configured ceiling and
    /// report the binding verdict.
    pub async fn check_discount(
        &self,
        request: DiscountCheckRequest,
    ) -> Result<DiscountCheckResponse> {
        DiscountResolver::validate_value(request.discount_value)?;

        let settings = self.settings_repo.get().await?;
        let ceiling = settings.max_discount_percentage;

        let resolution = DiscountResolver::resolve_authoritative(
            request.discount_type,
            request.discount_value,
            request.grand_total,
            ceiling,
        );

        let reason = if resolution.exceeds_limit {
            warn!(
                discount_type = %request.discount_type,
                discount_value = %request.discount_value,
                ceiling = %ceiling,
                "discount exceeds configured ceiling"
            );
            format!(
                "Discount exceeds the configured limit of {}%; admin will be notified",
                ceiling
            )
        } else {
            info!(
                discount_type = %request.discount_type,
                discount_value = %request.discount_value,
                "discount within ceiling"
            );
            "Discount within the configured limit".to_string()
        };

        Ok(DiscountCheckResponse {
            exceeds_limit: resolution.exceeds_limit,
            reason,
            discount_amount: resolution.amount,
            max_discount_percentage: ceiling,
        })
    }
}
