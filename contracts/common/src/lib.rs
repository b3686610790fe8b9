#![deny(warnings)]
#![no_std]

mod fixedi128;

pub use fixedi128::*;

/// One unit in WAD representation (18 decimals)
pub const WAD: i128 = 1_000_000_000_000_000_000;

/// Seconds in hour
pub const ONE_HOUR: u64 = 60 * 60;
