// src/core/mod.rs

pub mod normalize;
pub mod render;
pub mod table;
pub mod types;
