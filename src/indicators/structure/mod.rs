//! Market-structure indicators.

pub mod fibonacci;
