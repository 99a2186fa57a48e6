use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, HOLDER_SEED};
use crate::state::{Holder, LedgerConfig};
use crate::utils::ledger::apply_burn;

/// Self-service supply decrease: any holder may burn from their own balance.
pub fn burn(ctx: Context<Burn>, amount: u64) -> Result<()> {
    apply_burn(
        &mut ctx.accounts.config,
        &mut ctx.accounts.holder,
        amount,
    )?;

    emit!(Burned {
        holder: ctx.accounts.signer.key(),
        amount,
        total_supply: ctx.accounts.config.total_supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Burn<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, LedgerConfig>,

    #[account(mut, seeds = [HOLDER_SEED, signer.key().as_ref()], bump)]
    pub holder: Account<'info, Holder>,

    pub signer: Signer<'info>,
}

#[event]
pub struct Burned {
    pub holder: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}
