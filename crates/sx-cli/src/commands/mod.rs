//! Command implementations

pub mod common;
pub mod convert;
