// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod session;
pub use crate::core::table::FrequencyTable;
pub use crate::error::{GrocerError, Result};
