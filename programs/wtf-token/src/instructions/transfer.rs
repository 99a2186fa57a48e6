use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, HOLDER_SEED, SWAP_LIQUIFY_THRESHOLD};
use crate::state::{Holder, LedgerConfig, VestingState};
use crate::utils::ledger::{apply_transfer, check_transfer_parties};

/// Move `amount` from the signer to `to`: vesting gate, sufficiency check,
/// fee split, then the balance deltas as one atomic instruction. The
/// recipient's holder account is created on first reference. `to` must be
/// distinct from the sender and the fee-collection balance, or the aliased
/// holder accounts would clobber each other's writes.
pub fn transfer(ctx: Context<Transfer>, to: Pubkey, amount: u64) -> Result<()> {
    check_transfer_parties(
        ctx.accounts.sender.key(),
        to,
        ctx.accounts.config.key(),
    )?;

    let recipient = &mut ctx.accounts.recipient_holder;
    if recipient.wallet == Pubkey::default() {
        recipient.wallet = to;
        recipient.vesting = VestingState::Unrestricted;
    }

    let now = Clock::get()?.unix_timestamp;
    let elapsed = now.saturating_sub(ctx.accounts.config.beginning);

    let split = apply_transfer(
        &mut ctx.accounts.config,
        &mut ctx.accounts.sender_holder,
        &mut ctx.accounts.recipient_holder,
        &mut ctx.accounts.fee_vault,
        elapsed,
        amount,
    )?;

    emit!(TransferExecuted {
        from: ctx.accounts.sender.key(),
        to,
        net: split.net,
        fee: split.fee,
    });

    // Post-commit hook for the external liquidity process; the ledger only
    // signals, it never calls into a venue.
    let config = &ctx.accounts.config;
    let accumulated = ctx.accounts.fee_vault.balance;
    if config.swap_and_liquify_enabled && accumulated >= SWAP_LIQUIFY_THRESHOLD {
        emit!(SwapAndLiquifyReady { accumulated });
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct Transfer<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, LedgerConfig>,

    #[account(mut, seeds = [HOLDER_SEED, sender.key().as_ref()], bump)]
    pub sender_holder: Account<'info, Holder>,

    #[account(
        init_if_needed,
        payer = sender,
        space = 8 + Holder::SIZE,
        seeds = [HOLDER_SEED, to.as_ref()],
        bump
    )]
    pub recipient_holder: Account<'info, Holder>,

    #[account(mut, seeds = [HOLDER_SEED, config.key().as_ref()], bump)]
    pub fee_vault: Account<'info, Holder>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TransferExecuted {
    pub from: Pubkey,
    pub to: Pubkey,
    pub net: u64,
    pub fee: u64,
}

/// Accumulated fee balance crossed the threshold with the feature enabled.
#[event]
pub struct SwapAndLiquifyReady {
    pub accumulated: u64,
}
