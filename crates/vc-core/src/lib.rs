//! Core state model of the Velocity lead board: leads, pipeline stages,
//! drag-release classification and the conversion gate.

pub mod board;
pub mod config;
pub mod conversion;
pub mod health;
pub mod pipeline;
pub mod seed;
pub mod store;
pub mod transition;
pub mod types;
