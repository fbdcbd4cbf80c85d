use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A room category with its rate card and occupancy rules. Selecting a
/// category seeds a room package line with these defaults.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomType {
    pub id: String,

    /// Category name shown on the quotation (Deluxe, Executive Suite)
    pub category: String,

    /// Per-room nightly rate; also decides the GST slab for the line
    pub base_rate: Decimal,

    pub default_occupancy: u32,
    pub max_occupancy: u32,

    /// Charge per occupant beyond the included count
    pub extra_person_rate: Decimal,

    pub is_active: bool,
}
