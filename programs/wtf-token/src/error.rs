use anchor_lang::prelude::*;

/// Error codes for the WTF token ledger. Every failing precondition aborts
/// the whole instruction before any state mutation.
#[error_code]
pub enum LedgerError {
    #[msg("Invalid address: null recipient, spender, or pool target")]
    InvalidAddress,

    #[msg("Requested amount exceeds the sender's balance")]
    InsufficientBalance,

    #[msg("Requested amount exceeds the spender's allowance")]
    ExceedsAllowance,

    #[msg("Requested amount exceeds the currently unlocked, unspent allocation")]
    VestingLocked,

    #[msg("Unauthorized: owner signature required")]
    NotAuthorized,

    #[msg("Account was not registered as a team member at initialization")]
    NotTeamMember,

    #[msg("Lockup tiers violate monotonicity or do not unlock 100%")]
    InvalidSchedule,

    #[msg("Combined fee percent would exceed 100")]
    InvalidRate,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Math overflow")]
    MathOverflow,
}
