// Quotation persistence.
//
// The three line collections are stored verbatim as one JSON document; the
// cached totals live in their own columns so reporting queries never have
// to unpack the document. Last save wins: there is no optimistic
// concurrency check, each quotation is edited by one session at a time by
// convention.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{FromRow, MySqlPool};

use crate::core::{AppError, Result};
use crate::modules::pricing::models::{DiscountType, QuotationLines};
use crate::modules::quotations::models::{Quotation, QuotationStatus};

#[async_trait]
pub trait QuotationRepository: Send + Sync {
    async fn create(&self, quotation: &Quotation) -> Result<()>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Quotation>>;
    async fn update(&self, quotation: &Quotation) -> Result<()>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Quotation>>;
}

pub struct MySqlQuotationRepository {
    pool: MySqlPool,
}

impl MySqlQuotationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct QuotationRow {
    id: String,
    client_name: String,
    client_contact: Option<String>,
    event_date: Option<NaiveDate>,
    lines: Json<QuotationLines>,
    include_gst: bool,
    discount_type: Option<String>,
    discount_value: Decimal,
    discount_amount: Decimal,
    discount_reason: Option<String>,
    discount_exceeds_limit: bool,
    venue_rental_total: Decimal,
    room_total: Decimal,
    menu_total: Decimal,
    banquet_total: Decimal,
    grand_total: Decimal,
    final_total: Decimal,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl QuotationRow {
    fn into_quotation(self) -> Result<Quotation> {
        let discount_type = self
            .discount_type
            .as_deref()
            .map(DiscountType::from_str)
            .transpose()
            .map_err(AppError::internal)?;

        let status =
            QuotationStatus::from_str(&self.status).map_err(AppError::internal)?;

        Ok(Quotation {
            id: Some(self.id),
            client_name: self.client_name,
            client_contact: self.client_contact,
            event_date: self.event_date,
            lines: self.lines.0,
            include_gst: self.include_gst,
            discount_type,
            discount_value: self.discount_value,
            discount_amount: self.discount_amount,
            discount_reason: self.discount_reason,
            discount_exceeds_limit: self.discount_exceeds_limit,
            venue_rental_total: self.venue_rental_total,
            room_total: self.room_total,
            menu_total: self.menu_total,
            banquet_total: self.banquet_total,
            grand_total: self.grand_total,
            final_total: self.final_total,
            status,
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, client_name, client_contact, event_date, lines, include_gst,
           discount_type, discount_value, discount_amount, discount_reason,
           discount_exceeds_limit, venue_rental_total, room_total, menu_total,
           banquet_total, grand_total, final_total, status, created_at, updated_at
    FROM quotations
"#;

#[async_trait]
impl QuotationRepository for MySqlQuotationRepository {
    async fn create(&self, quotation: &Quotation) -> Result<()> {
        let id = quotation
            .id
            .as_deref()
            .ok_or_else(|| AppError::internal("Quotation has no id"))?;

        sqlx::query(
            r#"
            INSERT INTO quotations (
                id, client_name, client_contact, event_date, lines, include_gst,
                discount_type, discount_value, discount_amount, discount_reason,
                discount_exceeds_limit, venue_rental_total, room_total, menu_total,
                banquet_total, grand_total, final_total, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&quotation.client_name)
        .bind(&quotation.client_contact)
        .bind(quotation.event_date)
        .bind(Json(&quotation.lines))
        .bind(quotation.include_gst)
        .bind(quotation.discount_type.map(|t| t.to_string()))
        .bind(quotation.discount_value)
        .bind(quotation.discount_amount)
        .bind(&quotation.discount_reason)
        .bind(quotation.discount_exceeds_limit)
        .bind(quotation.venue_rental_total)
        .bind(quotation.room_total)
        .bind(quotation.menu_total)
        .bind(quotation.banquet_total)
        .bind(quotation.grand_total)
        .bind(quotation.final_total)
        .bind(quotation.status.to_string())
        .bind(quotation.created_at)
        .bind(quotation.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Quotation>> {
        let row = sqlx::query_as::<_, QuotationRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(QuotationRow::into_quotation).transpose()
    }

    async fn update(&self, quotation: &Quotation) -> Result<()> {
        let id = quotation
            .id
            .as_deref()
            .ok_or_else(|| AppError::internal("Quotation has no id"))?;

        let result = sqlx::query(
            r#"
            UPDATE quotations SET
                client_name = ?, client_contact = ?, event_date = ?, lines = ?,
                include_gst = ?, discount_type = ?, discount_value = ?,
                discount_amount = ?, discount_reason = ?, discount_exceeds_limit = ?,
                venue_rental_total = ?, room_total = ?, menu_total = ?,
                banquet_total = ?, grand_total = ?, final_total = ?, status = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&quotation.client_name)
        .bind(&quotation.client_contact)
        .bind(quotation.event_date)
        .bind(Json(&quotation.lines))
        .bind(quotation.include_gst)
        .bind(quotation.discount_type.map(|t| t.to_string()))
        .bind(quotation.discount_value)
        .bind(quotation.discount_amount)
        .bind(&quotation.discount_reason)
        .bind(quotation.discount_exceeds_limit)
        .bind(quotation.venue_rental_total)
        .bind(quotation.room_total)
        .bind(quotation.menu_total)
        .bind(quotation.banquet_total)
        .bind(quotation.grand_total)
        .bind(quotation.final_total)
        .bind(quotation.status.to_string())
        .bind(quotation.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Quotation {}", id)));
        }

        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Quotation>> {
        let rows = sqlx::query_as::<_, QuotationRow>(&format!(
            "{} ORDER BY created_at DESC LIMIT ? OFFSET ?",
            SELECT_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(QuotationRow::into_quotation)
            .collect()
    }
}
