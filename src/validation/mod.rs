//! Validation Module
//!
//! Business-rule checks consulted before an account is created.
//!
//! # Checks
//! - Account limit: a customer may own at most `MAX_ACCOUNTS_PER_CUSTOMER` accounts
//! - Offensive nickname: the nickname must not match a denylisted word

mod account_limit;
mod offensive_nickname;

pub use account_limit::{within_account_limit, ACCOUNT_LIMIT_MESSAGE, MAX_ACCOUNTS_PER_CUSTOMER};
pub use offensive_nickname::{is_acceptable_nickname, OFFENSIVE_NICKNAMES, OFFENSIVE_NICKNAME_MESSAGE};
