pub mod item;
pub mod point;
pub mod point_item;

pub mod prelude;

pub use prelude::*;
