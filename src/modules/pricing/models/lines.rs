// Quotation line records as they arrive from the form layer.
//
// Fields come in loosely shaped (numbers, numeric strings, nulls); every
// entity exposes a single sanitize step that the aggregators call before
// any arithmetic, so the calculation code never branches on shape.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::money::{lenient_decimal, lenient_opt_count, lenient_opt_decimal};

fn lenient_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

/// One venue booked for one session on one date. The session rate is a flat
/// charge, never multiplied by guest count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRentalLine {
    #[serde(default, deserialize_with = "lenient_opt_date")]
    pub event_date: Option<NaiveDate>,

    #[serde(default)]
    pub venue: String,

    #[serde(default)]
    pub venue_space: String,

    #[serde(default)]
    pub session: String,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub session_rate: Decimal,
}

impl VenueRentalLine {
    /// Rate used for aggregation; negatives clamp to zero.
    pub fn sanitized_rate(&self) -> Decimal {
        self.session_rate.max(Decimal::ZERO)
    }
}

/// One room category booked in bulk, with an extra-occupant surcharge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPackageLine {
    #[serde(default)]
    pub category: String,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rate: Decimal,

    #[serde(default, deserialize_with = "lenient_opt_count")]
    pub number_of_rooms: Option<u32>,

    #[serde(default, deserialize_with = "lenient_opt_count")]
    pub total_occupancy: Option<u32>,

    #[serde(default, deserialize_with = "lenient_opt_count")]
    pub default_occupancy: Option<u32>,

    #[serde(default, deserialize_with = "lenient_opt_count")]
    pub max_occupancy: Option<u32>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub extra_person_rate: Decimal,
}

/// Room line after defaults and occupancy clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizedRoomLine {
    pub rate: Decimal,
    pub rooms: u32,
    pub extra_persons: u32,
    pub extra_person_rate: Decimal,
}

impl SanitizedRoomLine {
    /// rate × rooms plus the extra-occupant surcharge.
    pub fn base_amount(&self) -> Decimal {
        self.rate * Decimal::from(self.rooms)
            + Decimal::from(self.extra_persons) * self.extra_person_rate
    }
}

impl RoomPackageLine {
    /// Resolve defaults (rooms 1, default occupancy 2) and clamp total
    /// occupancy into `[default × rooms, max × rooms]`.
    pub fn sanitize(&self) -> SanitizedRoomLine {
        let rooms = self.number_of_rooms.filter(|n| *n > 0).unwrap_or(1);
        let default_occupancy = self.default_occupancy.filter(|n| *n > 0).unwrap_or(2);

        let included = default_occupancy * rooms;
        let mut total = self.total_occupancy.unwrap_or(included).max(included);
        if let Some(max_occupancy) = self.max_occupancy.filter(|n| *n > 0) {
            total = total.min((max_occupancy * rooms).max(included));
        }

        SanitizedRoomLine {
            rate: self.rate.max(Decimal::ZERO),
            rooms,
            extra_persons: total - included,
            extra_person_rate: self.extra_person_rate.max(Decimal::ZERO),
        }
    }
}

/// One menu item toggled inside a package selection.
///
/// Items flagged as part of the package are covered by the package price;
/// only the rest contribute `additional_price × quantity`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemSelection {
    #[serde(default)]
    pub item_id: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub is_package_item: bool,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub additional_price: Decimal,

    #[serde(default, deserialize_with = "lenient_opt_count")]
    pub quantity: Option<u32>,
}

impl MenuItemSelection {
    fn additional_amount(&self) -> Decimal {
        if self.is_package_item {
            Decimal::ZERO
        } else {
            self.additional_price.max(Decimal::ZERO)
                * Decimal::from(self.quantity.unwrap_or(0))
        }
    }
}

/// One menu package selected on a quotation.
///
/// `package_price` is the catalog base price snapshotted at selection time;
/// `custom_package_price` overrides it per quotation when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuPackageSelection {
    #[serde(default)]
    pub package_id: String,

    #[serde(default)]
    pub package_name: String,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub package_price: Decimal,

    #[serde(default, deserialize_with = "lenient_opt_decimal")]
    pub custom_package_price: Option<Decimal>,

    #[serde(default)]
    pub selected_items: Vec<MenuItemSelection>,

    #[serde(default)]
    pub custom_items: Vec<MenuItemSelection>,
}

/// Menu selection reduced to the two numbers the aggregator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizedMenuSelection {
    pub package_price: Decimal,
    pub additional_items_total: Decimal,
}

impl MenuPackageSelection {
    /// Custom per-quotation price wins over the catalog snapshot; absent
    /// either way means a zero-priced package, not an error.
    pub fn sanitize(&self) -> SanitizedMenuSelection {
        let package_price = self
            .custom_package_price
            .unwrap_or(self.package_price)
            .max(Decimal::ZERO);

        let additional_items_total = self
            .selected_items
            .iter()
            .chain(self.custom_items.iter())
            .map(MenuItemSelection::additional_amount)
            .sum();

        SanitizedMenuSelection {
            package_price,
            additional_items_total,
        }
    }

    /// True when no line items are resolvable from any source. Submission
    /// must refuse such a package rather than silently understate the charge.
    pub fn has_no_items(&self) -> bool {
        self.selected_items.is_empty() && self.custom_items.is_empty()
    }
}

/// The three line collections a quotation owns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationLines {
    #[serde(default)]
    pub venues: Vec<VenueRentalLine>,

    #[serde(default)]
    pub rooms: Vec<RoomPackageLine>,

    #[serde(default)]
    pub menus: Vec<MenuPackageSelection>,
}

impl QuotationLines {
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty() && self.rooms.is_empty() && self.menus.is_empty()
    }
}
