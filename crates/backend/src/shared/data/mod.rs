pub mod generator;
pub mod loader;
pub mod store;
