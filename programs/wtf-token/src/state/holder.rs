use anchor_lang::prelude::*;

use crate::constants::MAX_LOCKUP_TIERS;

/// Per-wallet balance PDA, created implicitly on first reference. The
/// fee-collection balance is the Holder whose `wallet` is the config PDA key.
#[account]
pub struct Holder {
    pub wallet: Pubkey,
    pub balance: u64,
    /// Transfers touching this holder carry no fee.
    pub fee_exempt: bool,
    pub vesting: VestingState,
}

impl Holder {
    pub const SIZE: usize =
        32 + // wallet
        8 +  // balance
        1 +  // fee_exempt
        VestingState::SIZE;

    pub fn is_team(&self) -> bool {
        !matches!(self.vesting, VestingState::Unrestricted)
    }

    /// Gross amount sent since the current schedule was assigned; 0 for
    /// unscheduled holders.
    pub fn cumulative_sent(&self) -> u64 {
        match &self.vesting {
            VestingState::TeamScheduled(s) => s.cumulative_sent,
            _ => 0,
        }
    }
}

/// Tagged vesting state. Team membership is fixed at initialization; a team
/// holder without a schedule can transfer nothing.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum VestingState {
    Unrestricted,
    TeamUnscheduled,
    TeamScheduled(LockupSchedule),
}

impl VestingState {
    /// Borsh tag byte plus the largest variant payload.
    pub const SIZE: usize = 1 + LockupSchedule::SIZE;
}

/// Tiered unlock schedule for one team holder.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LockupSchedule {
    /// Holder balance at schedule assignment; denominator for percent math.
    pub base: u64,
    /// Gross amount sent since assignment.
    pub cumulative_sent: u64,
    pub tier_count: u8,
    pub tiers: [LockupTier; MAX_LOCKUP_TIERS],
}

impl LockupSchedule {
    pub const SIZE: usize =
        8 +  // base
        8 +  // cumulative_sent
        1 +  // tier_count
        MAX_LOCKUP_TIERS * LockupTier::SIZE;

    pub fn tiers(&self) -> &[LockupTier] {
        &self.tiers[..self.tier_count as usize]
    }
}

/// One unlock step: once `elapsed >= threshold`, a further `percent` of the
/// base becomes transferable (per-tier increments sum to 100).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockupTier {
    /// Seconds since the ledger's reference instant.
    pub threshold: i64,
    pub percent: u8,
}

impl LockupTier {
    pub const SIZE: usize = 8 + 1;
}
