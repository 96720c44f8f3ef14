// src/gui/views/mod.rs

pub mod detail;
pub mod list;
