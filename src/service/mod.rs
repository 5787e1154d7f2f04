//! Service Module
//!
//! Account workflows: creation, lookup, listing and deletion.

mod account_number;
mod account_service;


pub use account_number::{generate_account_number, is_well_formed, ACCOUNT_NUMBER_PREFIX};
pub use account_service::{AccountService, MAX_LATE_COLLISION_RETRIES};
