mod aggregator;
mod discount_resolver;
mod gst;
mod totalizer;

pub use aggregator::LineAggregator;
pub use discount_resolver::DiscountResolver;
pub use gst::{GstCalculator, GstCategory};
pub use totalizer::{QuotationTotalizer, Recalculation};
