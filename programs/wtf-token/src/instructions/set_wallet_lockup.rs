use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, HOLDER_SEED};
use crate::error::LedgerError;
use crate::state::{Holder, LedgerConfig, VestingState};
use crate::utils::vesting::build_schedule;

/// Owner-only. Assign or replace the lockup schedule of a team holder. The
/// holder's current balance becomes the percent denominator and the
/// cumulative-sent counter resets; a rejected tier list leaves any prior
/// schedule untouched.
pub fn set_wallet_lockup(
    ctx: Context<SetWalletLockup>,
    wallet: Pubkey,
    thresholds: Vec<i64>,
    percents: Vec<u8>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.config.owner,
        LedgerError::NotAuthorized
    );

    let holder = &mut ctx.accounts.holder;
    require!(holder.is_team(), LedgerError::NotTeamMember);

    let schedule = build_schedule(holder.balance, &thresholds, &percents)?;
    let tier_count = schedule.tier_count;
    holder.vesting = VestingState::TeamScheduled(schedule);

    emit!(WalletLockupSet {
        wallet,
        tier_count,
        base: holder.balance,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct SetWalletLockup<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, LedgerConfig>,

    #[account(mut, seeds = [HOLDER_SEED, wallet.as_ref()], bump)]
    pub holder: Account<'info, Holder>,

    pub owner: Signer<'info>,
}

#[event]
pub struct WalletLockupSet {
    pub wallet: Pubkey,
    pub tier_count: u8,
    pub base: u64,
}
