use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};
use crate::state::LedgerConfig;

/// Read-only introspection: token metadata plus the current ledger-wide
/// parameters, as one event.
pub fn emit_ledger_info(ctx: Context<EmitLedgerInfo>) -> Result<()> {
    let config = &ctx.accounts.config;

    emit!(LedgerInfo {
        name: TOKEN_NAME.to_string(),
        symbol: TOKEN_SYMBOL.to_string(),
        decimals: TOKEN_DECIMALS,
        total_supply: config.total_supply,
        total_fees: config.total_fees,
        beginning: config.beginning,
        tax_fee_percent: config.tax_fee_percent,
        liquidity_fee_percent: config.liquidity_fee_percent,
        pool: config.pool,
        swap_and_liquify_enabled: config.swap_and_liquify_enabled,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitLedgerInfo<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, LedgerConfig>,
}

#[event]
pub struct LedgerInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: u64,
    pub total_fees: u64,
    pub beginning: i64,
    pub tax_fee_percent: u8,
    pub liquidity_fee_percent: u8,
    pub pool: Pubkey,
    pub swap_and_liquify_enabled: bool,
}
