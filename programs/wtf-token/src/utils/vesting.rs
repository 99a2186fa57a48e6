//! Tiered lockup math for team holders.
//!
//! A schedule is an ordered list of (threshold, percent) tiers measured from
//! the ledger's reference instant. `percent` is a per-tier increment; the
//! increments are strictly increasing and sum to exactly 100, so the
//! cumulative unlock reaches the full base amount at the final tier.

use crate::constants::MAX_LOCKUP_TIERS;
use crate::error::LedgerError;
use crate::state::{LockupSchedule, LockupTier, VestingState};

/// Validate raw tier lists before a schedule replaces the holder's current
/// one. A rejected list leaves the prior schedule untouched.
pub fn validate_tiers(thresholds: &[i64], percents: &[u8]) -> Result<(), LedgerError> {
    if thresholds.is_empty()
        || thresholds.len() != percents.len()
        || thresholds.len() > MAX_LOCKUP_TIERS
    {
        return Err(LedgerError::InvalidSchedule);
    }

    let mut prev_threshold: i64 = 0;
    let mut prev_percent: u8 = 0;
    let mut total: u32 = 0;
    for (&threshold, &percent) in thresholds.iter().zip(percents) {
        if threshold <= prev_threshold {
            return Err(LedgerError::InvalidSchedule);
        }
        if percent <= prev_percent {
            return Err(LedgerError::InvalidSchedule);
        }
        total += percent as u32;
        prev_threshold = threshold;
        prev_percent = percent;
    }
    if total != 100 {
        return Err(LedgerError::InvalidSchedule);
    }
    Ok(())
}

/// Build a schedule from validated tier lists. `base` is the holder balance
/// at assignment time and becomes the denominator for all percent math.
pub fn build_schedule(
    base: u64,
    thresholds: &[i64],
    percents: &[u8],
) -> Result<LockupSchedule, LedgerError> {
    validate_tiers(thresholds, percents)?;
    let mut tiers = [LockupTier::default(); MAX_LOCKUP_TIERS];
    for (i, (&threshold, &percent)) in thresholds.iter().zip(percents).enumerate() {
        tiers[i] = LockupTier { threshold, percent };
    }
    Ok(LockupSchedule {
        base,
        cumulative_sent: 0,
        tier_count: thresholds.len() as u8,
        tiers,
    })
}

/// Cumulative unlocked amount at `elapsed` seconds since the reference
/// instant: `base * (sum of reached tier percents) / 100`, floored.
pub fn unlocked_amount(schedule: &LockupSchedule, elapsed: i64) -> Result<u64, LedgerError> {
    let mut reached: u32 = 0;
    for tier in schedule.tiers() {
        if elapsed >= tier.threshold {
            reached += tier.percent as u32;
        } else {
            break;
        }
    }
    let unlocked = (schedule.base as u128)
        .checked_mul(reached as u128)
        .ok_or(LedgerError::MathOverflow)?
        / 100;
    u64::try_from(unlocked).map_err(|_| LedgerError::MathOverflow)
}

/// Amount the holder may still send at `elapsed`. `None` means unconstrained
/// (non-team holder); a team holder without a schedule may send nothing.
pub fn remaining_unlocked(
    vesting: &VestingState,
    elapsed: i64,
) -> Result<Option<u64>, LedgerError> {
    match vesting {
        VestingState::Unrestricted => Ok(None),
        VestingState::TeamUnscheduled => Ok(Some(0)),
        VestingState::TeamScheduled(schedule) => {
            let unlocked = unlocked_amount(schedule, elapsed)?;
            // Sends are gated, so cumulative_sent never exceeds unlocked.
            let remaining = unlocked
                .checked_sub(schedule.cumulative_sent)
                .ok_or(LedgerError::MathOverflow)?;
            Ok(Some(remaining))
        }
    }
}

/// Record a successful gross send against the holder's schedule.
pub fn record_sent(vesting: &mut VestingState, amount: u64) -> Result<(), LedgerError> {
    if let VestingState::TeamScheduled(schedule) = vesting {
        schedule.cumulative_sent = schedule
            .cumulative_sent
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
    }
    Ok(())
}
