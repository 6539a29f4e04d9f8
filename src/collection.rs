//! Memory data collection: the primary OS counters plus the optional
//! extended-memory device.

pub mod error;
pub mod extended;
pub mod memory;
