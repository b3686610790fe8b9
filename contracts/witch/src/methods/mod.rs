pub mod buy;
pub mod grab;
pub mod grant_permission;
pub mod initialize;
pub mod permissioned;
pub mod proportion;
pub mod revoke_permission;
pub mod set_auction_time;
pub mod set_initial_proportion;
pub mod utils;
