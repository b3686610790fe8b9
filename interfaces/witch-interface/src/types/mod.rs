pub mod auction;
pub mod error;
pub mod permission;
