//! Configuration sources layered on top of the schema defaults.

pub mod environment;
pub mod file;
