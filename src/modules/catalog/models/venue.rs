use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bookable venue with its spaces and per-session hiring charge.
///
/// The hiring charge is the default session rate copied onto a venue rental
/// line when the venue is selected; the line's own rate wins after that.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: String,
    pub name: String,

    /// Comma-separated space names within the venue (lawn, hall, terrace)
    pub spaces: Option<String>,

    /// Flat charge for one session, not per guest
    pub hiring_charges: Decimal,

    pub is_active: bool,
}

impl Venue {
    pub fn space_names(&self) -> Vec<&str> {
        self.spaces
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
