pub mod rules;

pub use rules::{Violation, validate_row};
