// src/api/mod.rs

pub mod client;
pub mod error;
pub mod types;

pub use client::{encode_path_segment, Gateway, HttpGateway};
pub use error::ApiError;
