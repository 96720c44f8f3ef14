// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod views;
pub mod worker;

pub use app::run;
