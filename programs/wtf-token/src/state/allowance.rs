use anchor_lang::prelude::*;

/// Spending allowance granted by `owner` to `spender`. `approve` overwrites
/// (last write wins); `transfer_from` decrements.
#[account]
pub struct Allowance {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}

impl Allowance {
    pub const SIZE: usize =
        32 + // owner
        32 + // spender
        8;   // amount
}
