//! Data module - CSV loading and the immutable working set

mod dataset;
mod loader;

pub use dataset::{Dataset, Record};
pub use loader::{DatasetLoader, LoadError};
