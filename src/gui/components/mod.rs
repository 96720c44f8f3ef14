// src/gui/components/mod.rs

pub mod player_table;
pub mod toolbar;
