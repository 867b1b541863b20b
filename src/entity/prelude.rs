pub use super::item::Entity as Item;
pub use super::point::Entity as Point;
pub use super::point_item::Entity as PointItem;
