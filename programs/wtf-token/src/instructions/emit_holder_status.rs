use anchor_lang::prelude::*;

use crate::constants::HOLDER_SEED;
use crate::state::{Holder, VestingState};

/// Read-only introspection for one holder: balance, team status, exemption,
/// and the assigned lockup tiers as flattened threshold/percent lists.
///
/// `cumulative_sent` is the gross amount sent since the current schedule was
/// assigned; it reads 0 for a team holder before any schedule is set.
///
/// Holder accounts exist only once referenced; for an unknown wallet this
/// fails account resolution and clients fall back to the implicit defaults
/// (zero balance, not team, not exempt, no lockups). A read never creates
/// an account.
pub fn emit_holder_status(ctx: Context<EmitHolderStatus>, wallet: Pubkey) -> Result<()> {
    let holder = &ctx.accounts.holder;

    let (lockup_thresholds, lockup_percents) = match &holder.vesting {
        VestingState::TeamScheduled(schedule) => {
            let tiers = schedule.tiers();
            (
                tiers.iter().map(|t| t.threshold).collect(),
                tiers.iter().map(|t| t.percent).collect(),
            )
        }
        _ => (Vec::new(), Vec::new()),
    };

    emit!(HolderStatus {
        wallet,
        balance: holder.balance,
        is_team: holder.is_team(),
        cumulative_sent: holder.cumulative_sent(),
        fee_exempt: holder.fee_exempt,
        lockup_thresholds,
        lockup_percents,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitHolderStatus<'info> {
    #[account(seeds = [HOLDER_SEED, wallet.as_ref()], bump)]
    pub holder: Account<'info, Holder>,
}

#[event]
pub struct HolderStatus {
    pub wallet: Pubkey,
    pub balance: u64,
    pub is_team: bool,
    pub cumulative_sent: u64,
    pub fee_exempt: bool,
    pub lockup_thresholds: Vec<i64>,
    pub lockup_percents: Vec<u8>,
}
