use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::settings::models::SystemSettings;

/// Repository for the single system-settings row
pub struct SettingsRepository {
    pool: MySqlPool,
}

impl SettingsRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetch settings, defaulting when no row exists yet.
    pub async fn get(&self) -> Result<SystemSettings> {
        let settings = sqlx::query_as::<_, SystemSettings>(
            r#"
            SELECT max_discount_percentage
            FROM system_settings
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings.unwrap_or_default())
    }
}
