pub mod item;
pub mod point;

pub use item::*;
pub use point::*;
