use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::LedgerError;
use crate::state::LedgerConfig;

/// Owner-only feature toggle; the ledger never performs the swap itself.
pub fn set_swap_and_liquify_enabled(
    ctx: Context<SetSwapAndLiquify>,
    enabled: bool,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.config.owner,
        LedgerError::NotAuthorized
    );

    ctx.accounts.config.swap_and_liquify_enabled = enabled;

    emit!(SwapAndLiquifyToggled { enabled });
    Ok(())
}

#[derive(Accounts)]
pub struct SetSwapAndLiquify<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, LedgerConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct SwapAndLiquifyToggled {
    pub enabled: bool,
}
