//! Helper functions for the rendering boundary

mod date;

pub use date::*;
