pub mod store;

pub use store::{DEFAULT_DATA_DIR, DatasetStore};
