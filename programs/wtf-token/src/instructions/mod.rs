pub mod approve;
pub mod burn;
pub mod emit_holder_status;
pub mod emit_ledger_info;
pub mod initialize;
pub mod mint;
pub mod set_fee_exemption;
pub mod set_fee_percents;
pub mod set_pool;
pub mod set_swap_and_liquify;
pub mod set_wallet_lockup;
pub mod transfer;
pub mod transfer_from;

pub use approve::*;
pub use burn::*;
pub use emit_holder_status::*;
pub use emit_ledger_info::*;
pub use initialize::*;
pub use mint::*;
pub use set_fee_exemption::*;
pub use set_fee_percents::*;
pub use set_pool::*;
pub use set_swap_and_liquify::*;
pub use set_wallet_lockup::*;
pub use transfer::*;
pub use transfer_from::*;
