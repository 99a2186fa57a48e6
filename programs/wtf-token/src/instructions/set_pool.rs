use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::LedgerError;
use crate::state::LedgerConfig;

/// Owner-only. Record the liquidity pool address consumed by the external
/// swap-and-liquify process.
pub fn set_pool(ctx: Context<SetPool>, pool: Pubkey) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.config.owner,
        LedgerError::NotAuthorized
    );
    require!(pool != Pubkey::default(), LedgerError::InvalidAddress);

    let config = &mut ctx.accounts.config;
    let old_pool = config.pool;
    config.pool = pool;

    emit!(PoolSet { old_pool, pool });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPool<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, LedgerConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct PoolSet {
    pub old_pool: Pubkey,
    pub pool: Pubkey,
}
