use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, HOLDER_SEED};
use crate::error::LedgerError;
use crate::state::{Holder, LedgerConfig, VestingState};
use crate::utils::ledger::apply_mint;

/// Owner-only supply increase. The recipient's holder account is created on
/// first reference.
pub fn mint(ctx: Context<Mint>, to: Pubkey, amount: u64) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.config.owner,
        LedgerError::NotAuthorized
    );
    require!(to != Pubkey::default(), LedgerError::InvalidAddress);

    let recipient = &mut ctx.accounts.recipient_holder;
    if recipient.wallet == Pubkey::default() {
        recipient.wallet = to;
        recipient.vesting = VestingState::Unrestricted;
    }

    apply_mint(&mut ctx.accounts.config, recipient, amount)?;

    emit!(Minted {
        to,
        amount,
        total_supply: ctx.accounts.config.total_supply,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct Mint<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, LedgerConfig>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Holder::SIZE,
        seeds = [HOLDER_SEED, to.as_ref()],
        bump
    )]
    pub recipient_holder: Account<'info, Holder>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Minted {
    pub to: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}
