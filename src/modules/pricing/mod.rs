// Pricing engine

pub mod models;
pub mod services;

pub use models::{
    CategoryBases, DiscountResolution, DiscountSpec, DiscountType, MenuItemSelection,
    MenuPackageSelection, QuotationLines, QuoteBreakdown, QuoteTotals, RoomPackageLine,
    VenueRentalLine,
};
pub use services::{
    DiscountResolver, GstCalculator, LineAggregator, QuotationTotalizer, Recalculation,
};
