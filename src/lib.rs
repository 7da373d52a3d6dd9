pub mod config;
pub mod demo;
pub mod errors;
pub mod frequency;
pub mod priority;
pub mod registry;
pub mod select;
pub mod sequences;

pub use errors::SelectError;
pub use select::{select_kth_smallest, BoundedSelector};
