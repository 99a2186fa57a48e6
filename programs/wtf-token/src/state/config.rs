use anchor_lang::prelude::*;

/// Singleton ledger configuration PDA. All runtime-mutable parameters live
/// here and are written only through owner-gated instructions.
#[account]
pub struct LedgerConfig {
    /// Privileged identity set at initialization.
    pub owner: Pubkey,
    /// Liquidity pool address; `Pubkey::default()` until `set_pool`.
    pub pool: Pubkey,
    /// Sum of all holder balances at every instruction boundary.
    pub total_supply: u64,
    /// Cumulative fees diverted to the fee-collection holder.
    pub total_fees: u64,
    pub tax_fee_percent: u8,
    pub liquidity_fee_percent: u8,
    /// Toggle consumed by the external liquidity process.
    pub swap_and_liquify_enabled: bool,
    /// Reference instant (unix seconds) captured at initialization; all
    /// lockup thresholds are measured from here.
    pub beginning: i64,
}

impl LedgerConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // pool
        8 +  // total_supply
        8 +  // total_fees
        1 +  // tax_fee_percent
        1 +  // liquidity_fee_percent
        1 +  // swap_and_liquify_enabled
        8;   // beginning

    pub fn combined_fee_percent(&self) -> u8 {
        self.tax_fee_percent + self.liquidity_fee_percent
    }
}
