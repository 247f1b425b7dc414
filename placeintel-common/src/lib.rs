//! # PlaceIntel Common Library
//!
//! Shared code for the PlaceIntel services:
//! - Error types
//! - Clock, duration and rounding helpers
//! - Injectable randomness source

pub mod error;
pub mod rng;
pub mod time;

pub use error::{Error, Result};
pub use rng::{FixedSource, RandomSource, ThreadRngSource};
