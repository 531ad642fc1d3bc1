//! Database access layer

pub mod cafes;
