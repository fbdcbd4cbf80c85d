use std::sync::Arc;

use tracing::info;

use crate::core::Result;
use crate::modules::catalog::models::{AdditionalItem, MenuItem, MenuPackage, RoomType, Venue};
use crate::modules::catalog::repositories::CatalogRepository;
use crate::modules::pricing::models::{MenuItemSelection, MenuPackageSelection};

/// Service for catalog reads and selection defaults.
///
/// The pricing engine itself never touches the catalog; this service turns
/// catalog records into pre-populated line values at selection time, so the
/// aggregators stay pure.
pub struct CatalogService {
    catalog_repo: Arc<CatalogRepository>,
}

impl CatalogService {
    pub fn new(catalog_repo: Arc<CatalogRepository>) -> Self {
        Self { catalog_repo }
    }

    pub async fn list_venues(&self) -> Result<Vec<Venue>> {
        self.catalog_repo.list_venues().await
    }

    pub async fn list_room_types(&self) -> Result<Vec<RoomType>> {
        self.catalog_repo.list_room_types().await
    }

    pub async fn list_menu_packages(&self) -> Result<Vec<MenuPackage>> {
        self.catalog_repo.list_menu_packages().await
    }

    pub async fn list_package_items(&self, package_id: &str) -> Result<Vec<MenuItem>> {
        self.catalog_repo.list_package_items(package_id).await
    }

    pub async fn list_additional_items(&self) -> Result<Vec<AdditionalItem>> {
        self.catalog_repo.list_additional_items().await
    }

    /// Build a menu selection pre-populated from the catalog: price snapshot
    /// from the package record, every package item included.
    pub async fn menu_selection_defaults(
        &self,
        package_id: &str,
    ) -> Result<Option<MenuPackageSelection>> {
        let Some(package) = self.catalog_repo.find_menu_package(package_id).await? else {
            return Ok(None);
        };

        let items = self.catalog_repo.list_package_items(package_id).await?;

        info!(
            package_id = %package_id,
            items = items.len(),
            "menu selection seeded from catalog"
        );

        Ok(Some(MenuPackageSelection {
            package_id: package.id,
            package_name: package.name,
            package_price: package.price,
            custom_package_price: None,
            selected_items: items
                .into_iter()
                .map(|item| MenuItemSelection {
                    item_id: Some(item.id),
                    name: item.name,
                    is_package_item: true,
                    price: item.price,
                    additional_price: item.additional_price,
                    quantity: Some(1),
                })
                .collect(),
            custom_items: Vec::new(),
        }))
    }
}
