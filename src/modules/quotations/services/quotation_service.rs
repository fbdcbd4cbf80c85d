use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::catalog::services::CatalogService;
use crate::modules::pricing::models::MenuItemSelection;
use crate::modules::pricing::services::DiscountResolver;
use crate::modules::quotations::models::{
    ApplyDiscountRequest, CreateQuotationRequest, Quotation, QuotationResponse, QuotationStatus,
    UpdateQuotationRequest,
};
use crate::modules::quotations::repositories::QuotationRepository;
use crate::modules::quotations::services::DiscountChecker;
use crate::modules::settings::models::DiscountCheckRequest;
use crate::modules::settings::repositories::SettingsRepository;

/// Service for quotation business logic.
///
/// Every write path ends in a recompute; the cached totals on a quotation
/// are never trusted across an edit. Submission recomputes once more
/// defensively so a stale cache can never reach an issued proposal.
pub struct QuotationService {
    quotation_repo: Arc<dyn QuotationRepository>,
    settings_repo: Arc<SettingsRepository>,
    catalog_service: Arc<CatalogService>,
    discount_checker: Arc<dyn DiscountChecker>,
}

impl QuotationService {
    pub fn new(
        quotation_repo: Arc<dyn QuotationRepository>,
        settings_repo: Arc<SettingsRepository>,
        catalog_service: Arc<CatalogService>,
        discount_checker: Arc<dyn DiscountChecker>,
    ) -> Self {
        Self {
            quotation_repo,
            settings_repo,
            catalog_service,
            discount_checker,
        }
    }

    async fn discount_ceiling(&self) -> Result<Decimal> {
        Ok(self.settings_repo.get().await?.max_discount_percentage)
    }

    /// Create a draft quotation with an initial recompute.
    pub async fn create_quotation(
        &self,
        request: CreateQuotationRequest,
    ) -> Result<QuotationResponse> {
        let ceiling = self.discount_ceiling().await?;

        let quotation = Quotation::new(
            request.client_name,
            request.client_contact,
            request.event_date,
            request.lines,
            request.include_gst,
            ceiling,
        )?;

        self.quotation_repo.create(&quotation).await?;

        info!(
            quotation_id = quotation.id.as_deref().unwrap_or_default(),
            grand_total = %quotation.grand_total,
            "quotation created"
        );

        Ok(quotation.into())
    }

    pub async fn get_quotation(&self, id: &str) -> Result<QuotationResponse> {
        let quotation = self.load(id).await?;
        Ok(quotation.into())
    }

    pub async fn list_quotations(&self, limit: i64, offset: i64) -> Result<Vec<QuotationResponse>> {
        let quotations = self.quotation_repo.list(limit, offset).await?;
        Ok(quotations.into_iter().map(Into::into).collect())
    }

    /// Edit a draft; totals are recomputed and overwritten whatever changed.
    pub async fn update_quotation(
        &self,
        id: &str,
        request: UpdateQuotationRequest,
    ) -> Result<QuotationResponse> {
        let mut quotation = self.load(id).await?;

        if !quotation.is_editable() {
            return Err(AppError::validation(format!(
                "Quotation {} is not editable in status {}",
                id, quotation.status
            )));
        }

        if let Some(client_name) = request.client_name {
            if client_name.trim().is_empty() {
                return Err(AppError::validation("Client name cannot be empty"));
            }
            quotation.client_name = client_name;
        }
        if let Some(client_contact) = request.client_contact {
            quotation.client_contact = Some(client_contact);
        }
        if let Some(event_date) = request.event_date {
            quotation.event_date = Some(event_date);
        }
        if let Some(lines) = request.lines {
            quotation.lines = lines;
        }
        if let Some(include_gst) = request.include_gst {
            quotation.include_gst = include_gst;
        }

        let ceiling = self.discount_ceiling().await?;
        quotation.recalculate(ceiling);

        self.quotation_repo.update(&quotation).await?;

        Ok(quotation.into())
    }

    /// Apply a discount, gated on the authoritative ceiling check.
    ///
    /// No optimistic application: if the round-trip fails the stored
    /// discount state is untouched. The server's amount and verdict replace
    /// anything computed locally.
    pub async fn apply_discount(
        &self,
        id: &str,
        request: ApplyDiscountRequest,
    ) -> Result<QuotationResponse> {
        DiscountResolver::validate_value(request.discount_value)?;

        let mut quotation = self.load(id).await?;

        if !quotation.is_editable() {
            return Err(AppError::validation(format!(
                "Quotation {} is not editable in status {}",
                id, quotation.status
            )));
        }

        // Pre-discount GST-inclusive subtotal is the base the check runs on
        let breakdown = quotation.breakdown();
        let verdict = self
            .discount_checker
            .check(&DiscountCheckRequest {
                discount_type: request.discount_type,
                discount_value: request.discount_value,
                grand_total: breakdown.total_with_gst,
            })
            .await?;

        if verdict.exceeds_limit {
            warn!(
                quotation_id = id,
                discount_value = %request.discount_value,
                ceiling = %verdict.max_discount_percentage,
                "discount applied above ceiling; admin notification raised"
            );
        }

        quotation.discount_type = Some(request.discount_type);
        quotation.discount_value = request.discount_value;
        quotation.discount_amount = verdict.discount_amount;
        quotation.discount_reason = request.discount_reason;
        quotation.discount_exceeds_limit = verdict.exceeds_limit;

        let ceiling = self.discount_ceiling().await?;
        quotation.recalculate(ceiling);

        self.quotation_repo.update(&quotation).await?;

        Ok(quotation.into())
    }

    /// Submit a draft: defensive recompute, integrity checks, then the
    /// status flip. A menu package with no resolvable items anywhere blocks
    /// submission, since defaulting it to zero would silently understate the
    /// charge.
    pub async fn submit_quotation(&self, id: &str) -> Result<QuotationResponse> {
        let mut quotation = self.load(id).await?;

        self.resolve_missing_menu_items(&mut quotation).await?;

        let ceiling = self.discount_ceiling().await?;
        quotation.recalculate(ceiling);
        quotation.update_status(QuotationStatus::Submitted)?;

        self.quotation_repo.update(&quotation).await?;

        info!(
            quotation_id = id,
            final_total = %quotation.final_total,
            "quotation submitted"
        );

        Ok(quotation.into())
    }

    /// Fill item lists for menu selections that arrived without them, from
    /// the catalog; fail when no source can produce any.
    async fn resolve_missing_menu_items(&self, quotation: &mut Quotation) -> Result<()> {
        for selection in &mut quotation.lines.menus {
            if !selection.has_no_items() {
                continue;
            }

            let items = self
                .catalog_service
                .list_package_items(&selection.package_id)
                .await?;

            if items.is_empty() {
                return Err(AppError::integrity(format!(
                    "Menu package '{}' has no line items from any source; cannot submit",
                    if selection.package_name.is_empty() {
                        &selection.package_id
                    } else {
                        &selection.package_name
                    }
                )));
            }

            selection.selected_items = items
                .into_iter()
                .map(|item| MenuItemSelection {
                    item_id: Some(item.id),
                    name: item.name,
                    is_package_item: true,
                    price: item.price,
                    additional_price: item.additional_price,
                    quantity: Some(1),
                })
                .collect();
        }

        Ok(())
    }

    async fn load(&self, id: &str) -> Result<Quotation> {
        self.quotation_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Quotation {}", id)))
    }
}
