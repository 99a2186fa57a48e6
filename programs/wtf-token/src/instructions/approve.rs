use anchor_lang::prelude::*;

use crate::constants::ALLOWANCE_SEED;
use crate::error::LedgerError;
use crate::state::Allowance;

/// Grant `spender` the right to move up to `amount` of the signer's balance.
/// Overwrite semantics: the new amount replaces any prior grant.
pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
    require!(spender != Pubkey::default(), LedgerError::InvalidAddress);

    let allowance = &mut ctx.accounts.allowance;
    allowance.owner = ctx.accounts.owner.key();
    allowance.spender = spender;
    allowance.amount = amount;

    emit!(Approval {
        owner: allowance.owner,
        spender,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(spender: Pubkey)]
pub struct Approve<'info> {
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Allowance::SIZE,
        seeds = [ALLOWANCE_SEED, owner.key().as_ref(), spender.as_ref()],
        bump
    )]
    pub allowance: Account<'info, Allowance>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Approval {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}
