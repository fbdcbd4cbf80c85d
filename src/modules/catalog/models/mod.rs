mod menu;
mod room_type;
mod venue;

pub use menu::{AdditionalItem, MenuItem, MenuPackage};
pub use room_type::RoomType;
pub use venue::Venue;
