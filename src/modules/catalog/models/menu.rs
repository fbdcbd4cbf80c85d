use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A menu package: a named spread with a base price covering its included
/// items.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuPackage {
    pub id: String,
    pub name: String,

    /// Base price covering all package-included items
    pub price: Decimal,

    pub is_active: bool,
}

/// A dish belonging to a menu package.
///
/// `additional_price` is what the item costs when ordered outside a package
/// that includes it; inside its package it is covered by the package price.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuItem {
    pub id: String,
    pub package_id: String,
    pub name: String,
    pub price: Decimal,
    pub additional_price: Decimal,
}

/// An à-la-carte item offered outside any package (live counters, premium
/// dishes).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdditionalItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub is_active: bool,
}
