use anchor_lang::prelude::*;

use crate::constants::{ALLOWANCE_SEED, CONFIG_SEED, HOLDER_SEED, SWAP_LIQUIFY_THRESHOLD};
use crate::instructions::transfer::{SwapAndLiquifyReady, TransferExecuted};
use crate::state::{Allowance, Holder, LedgerConfig, VestingState};
use crate::utils::ledger::{apply_transfer, check_transfer_parties, consume_allowance};

/// Spend from `owner`'s balance under a previously granted allowance. The
/// allowance is consumed first; `owner` is the effective sender for the
/// vesting gate, the sufficiency check, the fee exemption, and the holder
/// aliasing rule on `to`.
pub fn transfer_from(
    ctx: Context<TransferFrom>,
    owner: Pubkey,
    to: Pubkey,
    amount: u64,
) -> Result<()> {
    check_transfer_parties(owner, to, ctx.accounts.config.key())?;

    let recipient = &mut ctx.accounts.recipient_holder;
    if recipient.wallet == Pubkey::default() {
        recipient.wallet = to;
        recipient.vesting = VestingState::Unrestricted;
    }

    consume_allowance(&mut ctx.accounts.allowance, amount)?;

    let now = Clock::get()?.unix_timestamp;
    let elapsed = now.saturating_sub(ctx.accounts.config.beginning);

    let split = apply_transfer(
        &mut ctx.accounts.config,
        &mut ctx.accounts.owner_holder,
        &mut ctx.accounts.recipient_holder,
        &mut ctx.accounts.fee_vault,
        elapsed,
        amount,
    )?;

    emit!(TransferExecuted {
        from: owner,
        to,
        net: split.net,
        fee: split.fee,
    });

    let config = &ctx.accounts.config;
    let accumulated = ctx.accounts.fee_vault.balance;
    if config.swap_and_liquify_enabled && accumulated >= SWAP_LIQUIFY_THRESHOLD {
        emit!(SwapAndLiquifyReady { accumulated });
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(owner: Pubkey, to: Pubkey)]
pub struct TransferFrom<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, LedgerConfig>,

    #[account(
        mut,
        seeds = [ALLOWANCE_SEED, owner.as_ref(), spender.key().as_ref()],
        bump
    )]
    pub allowance: Account<'info, Allowance>,

    #[account(mut, seeds = [HOLDER_SEED, owner.as_ref()], bump)]
    pub owner_holder: Account<'info, Holder>,

    #[account(
        init_if_needed,
        payer = spender,
        space = 8 + Holder::SIZE,
        seeds = [HOLDER_SEED, to.as_ref()],
        bump
    )]
    pub recipient_holder: Account<'info, Holder>,

    #[account(mut, seeds = [HOLDER_SEED, config.key().as_ref()], bump)]
    pub fee_vault: Account<'info, Holder>,

    #[account(mut)]
    pub spender: Signer<'info>,

    pub system_program: Program<'info, System>,
}
