//! HTTP API handlers for placeintel-is

pub mod enhance;
pub mod health;

pub use enhance::enhance_place;
pub use health::health_check;
