pub mod item;
pub mod point;

pub use item::ItemRepository;
pub use point::PointRepository;
