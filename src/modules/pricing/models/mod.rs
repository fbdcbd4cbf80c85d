mod breakdown;
mod discount;
mod lines;

pub use breakdown::{CategoryBases, CategoryBreakdown, QuoteBreakdown, QuoteTotals};
pub use discount::{DiscountResolution, DiscountSpec, DiscountType};
pub use lines::{
    MenuItemSelection, MenuPackageSelection, QuotationLines, RoomPackageLine, SanitizedMenuSelection,
    SanitizedRoomLine, VenueRentalLine,
};
