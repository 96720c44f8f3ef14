// src/controller/mod.rs

pub mod detail;
pub mod list;
