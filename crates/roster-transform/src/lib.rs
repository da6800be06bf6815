pub mod clean;
pub mod stats;

pub use clean::clean_table;
pub use stats::{median, mode};
