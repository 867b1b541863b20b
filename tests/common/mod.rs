pub mod app;
pub mod factory;

pub use app::TestApp;
pub use factory::{unique_name, Factory};
