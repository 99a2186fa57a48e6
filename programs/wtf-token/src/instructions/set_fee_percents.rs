use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, MAX_COMBINED_FEE_PERCENT};
use crate::error::LedgerError;
use crate::state::LedgerConfig;

/// Owner-only. Rejected if the combined rate would exceed 100; previously
/// completed transfers are never re-priced.
pub fn set_tax_fee_percent(ctx: Context<UpdateFees>, percent: u8) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        LedgerError::NotAuthorized
    );
    let combined = percent as u16 + config.liquidity_fee_percent as u16;
    require!(
        combined <= MAX_COMBINED_FEE_PERCENT as u16,
        LedgerError::InvalidRate
    );
    config.tax_fee_percent = percent;

    emit!(FeeRateChanged {
        tax_fee_percent: config.tax_fee_percent,
        liquidity_fee_percent: config.liquidity_fee_percent,
    });
    Ok(())
}

/// Owner-only. Same combined-rate bound as `set_tax_fee_percent`.
pub fn set_liquidity_fee_percent(ctx: Context<UpdateFees>, percent: u8) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        LedgerError::NotAuthorized
    );
    let combined = percent as u16 + config.tax_fee_percent as u16;
    require!(
        combined <= MAX_COMBINED_FEE_PERCENT as u16,
        LedgerError::InvalidRate
    );
    config.liquidity_fee_percent = percent;

    emit!(FeeRateChanged {
        tax_fee_percent: config.tax_fee_percent,
        liquidity_fee_percent: config.liquidity_fee_percent,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateFees<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, LedgerConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct FeeRateChanged {
    pub tax_fee_percent: u8,
    pub liquidity_fee_percent: u8,
}
