use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::catalog::models::{AdditionalItem, MenuItem, MenuPackage, RoomType, Venue};

/// Repository for catalog reads (venues, room types, menu packages/items).
///
/// All reads are idempotent and safely retryable; there is no write surface
/// here; catalog maintenance happens outside this service.
pub struct CatalogRepository {
    pool: MySqlPool,
}

impl CatalogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn list_venues(&self) -> Result<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(
            r#"
            SELECT id, name, spaces, hiring_charges, is_active
            FROM venues
            WHERE is_active = TRUE
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(venues)
    }

    pub async fn list_room_types(&self) -> Result<Vec<RoomType>> {
        let room_types = sqlx::query_as::<_, RoomType>(
            r#"
            SELECT id, category, base_rate, default_occupancy, max_occupancy,
                   extra_person_rate, is_active
            FROM room_types
            WHERE is_active = TRUE
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(room_types)
    }

    pub async fn list_menu_packages(&self) -> Result<Vec<MenuPackage>> {
        let packages = sqlx::query_as::<_, MenuPackage>(
            r#"
            SELECT id, name, price, is_active
            FROM menu_packages
            WHERE is_active = TRUE
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(packages)
    }

    pub async fn find_menu_package(&self, id: &str) -> Result<Option<MenuPackage>> {
        let package = sqlx::query_as::<_, MenuPackage>(
            r#"
            SELECT id, name, price, is_active
            FROM menu_packages
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(package)
    }

    pub async fn list_package_items(&self, package_id: &str) -> Result<Vec<MenuItem>> {
        let items = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, package_id, name, price, additional_price
            FROM menu_items
            WHERE package_id = ?
            ORDER BY name
            "#,
        )
        .bind(package_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn list_additional_items(&self) -> Result<Vec<AdditionalItem>> {
        let items = sqlx::query_as::<_, AdditionalItem>(
            r#"
            SELECT id, name, price, is_active
            FROM additional_items
            WHERE is_active = TRUE
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
