//! Accounts module (balance tracking with guarded mutation).
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod account;
pub mod overdraft;

pub use account::{Account, BankAccount};
pub use overdraft::OverdraftAccount;
