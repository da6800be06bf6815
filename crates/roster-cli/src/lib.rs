//! Library components of the roster shell.

pub mod logging;
