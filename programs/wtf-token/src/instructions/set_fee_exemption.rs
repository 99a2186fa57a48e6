use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, HOLDER_SEED};
use crate::error::LedgerError;
use crate::state::{Holder, LedgerConfig, VestingState};

/// Owner-only, idempotent. Transfers where either party is exempt carry no
/// fee; only subsequent transfers are affected by a toggle.
pub fn exclude_from_fee(ctx: Context<SetFeeExemption>, wallet: Pubkey) -> Result<()> {
    set_exemption(ctx, wallet, true)
}

/// Owner-only, idempotent counterpart to `exclude_from_fee`.
pub fn include_in_fee(ctx: Context<SetFeeExemption>, wallet: Pubkey) -> Result<()> {
    set_exemption(ctx, wallet, false)
}

fn set_exemption(ctx: Context<SetFeeExemption>, wallet: Pubkey, exempt: bool) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.config.owner,
        LedgerError::NotAuthorized
    );
    require!(wallet != Pubkey::default(), LedgerError::InvalidAddress);

    let holder = &mut ctx.accounts.holder;
    if holder.wallet == Pubkey::default() {
        holder.wallet = wallet;
        holder.vesting = VestingState::Unrestricted;
    }
    holder.fee_exempt = exempt;

    emit!(FeeExemptionChanged { wallet, exempt });
    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct SetFeeExemption<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, LedgerConfig>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Holder::SIZE,
        seeds = [HOLDER_SEED, wallet.as_ref()],
        bump
    )]
    pub holder: Account<'info, Holder>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct FeeExemptionChanged {
    pub wallet: Pubkey,
    pub exempt: bool,
}
