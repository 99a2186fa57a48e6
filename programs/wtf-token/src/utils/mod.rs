pub mod fee;
pub mod ledger;
pub mod vesting;
