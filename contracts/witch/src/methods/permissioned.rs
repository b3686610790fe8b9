use soroban_sdk::{Address, Env};
use witch_interface::types::permission::Permission;

use crate::storage::read_permission_owners;

pub fn permissioned(env: &Env, who: &Address, permission: &Permission) -> bool {
    read_permission_owners(env, permission)
        .binary_search(who)
        .is_ok()
}
