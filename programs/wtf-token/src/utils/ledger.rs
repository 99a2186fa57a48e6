//! Pure ledger mutations shared by the transfer, mint, and burn handlers.
//!
//! Every function checks all of its preconditions before touching any state,
//! so a returned error guarantees nothing was mutated. The Solana runtime
//! additionally rolls back account writes on instruction failure; keeping the
//! eager-check discipline here lets the logic be exercised directly in unit
//! tests, without a validator.

use anchor_lang::prelude::Pubkey;

use crate::error::LedgerError;
use crate::state::{Allowance, Holder, LedgerConfig};
use crate::utils::fee::{compute_split, FeeSplit};
use crate::utils::vesting::{record_sent, remaining_unlocked};

/// A transfer must name three distinct parties. The runtime deserializes
/// each account in a context independently, so an aliased recipient would
/// let one copy's serialization overwrite the other's debit at exit and
/// break the supply invariant. Self-transfers and transfers addressed to
/// the fee-collection balance are therefore rejected, as is the null
/// identity.
pub fn check_transfer_parties(
    sender: Pubkey,
    recipient: Pubkey,
    fee_vault: Pubkey,
) -> Result<(), LedgerError> {
    if recipient == Pubkey::default() || recipient == sender || recipient == fee_vault {
        return Err(LedgerError::InvalidAddress);
    }
    Ok(())
}

/// Apply one transfer: vesting gate, sufficiency, fee split, then the
/// balance deltas and fee bookkeeping as one unit.
///
/// `elapsed` is seconds since the ledger's reference instant. The fee is
/// credited in full to `fee_vault` (the ledger's own reserved balance), so
/// the sum of balances is unchanged.
pub fn apply_transfer(
    config: &mut LedgerConfig,
    sender: &mut Holder,
    recipient: &mut Holder,
    fee_vault: &mut Holder,
    elapsed: i64,
    amount: u64,
) -> Result<FeeSplit, LedgerError> {
    if let Some(remaining) = remaining_unlocked(&sender.vesting, elapsed)? {
        if amount > remaining {
            return Err(LedgerError::VestingLocked);
        }
    }
    if sender.balance < amount {
        return Err(LedgerError::InsufficientBalance);
    }

    let exempt = sender.fee_exempt || recipient.fee_exempt;
    let split = compute_split(amount, config.combined_fee_percent(), exempt)?;

    sender.balance = sender
        .balance
        .checked_sub(amount)
        .ok_or(LedgerError::MathOverflow)?;
    recipient.balance = recipient
        .balance
        .checked_add(split.net)
        .ok_or(LedgerError::MathOverflow)?;
    fee_vault.balance = fee_vault
        .balance
        .checked_add(split.fee)
        .ok_or(LedgerError::MathOverflow)?;
    config.total_fees = config
        .total_fees
        .checked_add(split.fee)
        .ok_or(LedgerError::MathOverflow)?;
    record_sent(&mut sender.vesting, amount)?;

    Ok(split)
}

/// Decrement the spender's allowance, rejecting before any mutation.
pub fn consume_allowance(allowance: &mut Allowance, amount: u64) -> Result<(), LedgerError> {
    if allowance.amount < amount {
        return Err(LedgerError::ExceedsAllowance);
    }
    allowance.amount -= amount;
    Ok(())
}

/// Credit newly minted value to a holder.
pub fn apply_mint(
    config: &mut LedgerConfig,
    recipient: &mut Holder,
    amount: u64,
) -> Result<(), LedgerError> {
    if amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }
    recipient.balance = recipient
        .balance
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;
    config.total_supply = config
        .total_supply
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;
    Ok(())
}

/// Burn value from the holder's own balance.
pub fn apply_burn(
    config: &mut LedgerConfig,
    holder: &mut Holder,
    amount: u64,
) -> Result<(), LedgerError> {
    if amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }
    if holder.balance < amount {
        return Err(LedgerError::InsufficientBalance);
    }
    holder.balance -= amount;
    // total_supply is the sum of balances, so it covers any single balance.
    config.total_supply = config
        .total_supply
        .checked_sub(amount)
        .ok_or(LedgerError::MathOverflow)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_LIQUIDITY_FEE_PERCENT, DEFAULT_TAX_FEE_PERCENT};
    use crate::state::VestingState;
    use crate::utils::vesting::build_schedule;
    use anchor_lang::prelude::Pubkey;

    fn config(total_supply: u64) -> LedgerConfig {
        LedgerConfig {
            owner: Pubkey::new_unique(),
            pool: Pubkey::default(),
            total_supply,
            total_fees: 0,
            tax_fee_percent: DEFAULT_TAX_FEE_PERCENT,
            liquidity_fee_percent: DEFAULT_LIQUIDITY_FEE_PERCENT,
            swap_and_liquify_enabled: true,
            beginning: 0,
        }
    }

    fn holder(balance: u64, vesting: VestingState) -> Holder {
        Holder {
            wallet: Pubkey::new_unique(),
            balance,
            fee_exempt: false,
            vesting,
        }
    }

    fn scheduled_founder(balance: u64, thresholds: &[i64], percents: &[u8]) -> Holder {
        let schedule = build_schedule(balance, thresholds, percents).unwrap();
        holder(balance, VestingState::TeamScheduled(schedule))
    }

    fn assert_supply(config: &LedgerConfig, holders: &[&Holder]) {
        let sum: u64 = holders.iter().map(|h| h.balance).sum();
        assert_eq!(sum, config.total_supply);
    }

    #[test]
    fn founders_spend_through_lockup_tiers() {
        // The founding distribution: 10_000 and 30_000, default 5+5 fees.
        let mut config = config(40_000);
        let mut founder = scheduled_founder(10_000, &[3600, 7200, 14400], &[20, 30, 50]);
        let mut other_founder =
            scheduled_founder(30_000, &[1000, 2000, 3000], &[10, 40, 50]);
        let mut user3 = holder(0, VestingState::Unrestricted);
        let mut user4 = holder(0, VestingState::Unrestricted);
        let mut vault = holder(0, VestingState::Unrestricted);
        vault.fee_exempt = true;

        // Tier 1 reached: 20% of 10_000 unlocked.
        let split = apply_transfer(
            &mut config, &mut founder, &mut user4, &mut vault, 3600, 1000,
        )
        .unwrap();
        assert_eq!(split, FeeSplit { net: 900, fee: 100 });
        assert_eq!(founder.balance, 9000);
        assert_eq!(user4.balance, 900);
        assert_eq!(vault.balance, 100);
        assert_eq!(config.total_fees, 100);
        assert_supply(
            &config,
            &[&founder, &other_founder, &user3, &user4, &vault],
        );

        // 1000 of the 2000 tier-1 allowance is spent; 1001 more is locked.
        assert!(matches!(
            apply_transfer(&mut config, &mut founder, &mut user4, &mut vault, 3600, 1001),
            Err(LedgerError::VestingLocked)
        ));
        assert_eq!(founder.balance, 9000);
        assert_eq!(user4.balance, 900);

        // Tier 2: cumulative 50% unlocked, 4000 still spendable.
        apply_transfer(&mut config, &mut founder, &mut user3, &mut vault, 7200, 4000).unwrap();
        assert_eq!(founder.balance, 5000);
        assert_eq!(user3.balance, 3600);
        assert_eq!(vault.balance, 500);
        assert_eq!(config.total_fees, 500);

        // Tier 3: fully unlocked, the remaining 5000 moves.
        apply_transfer(&mut config, &mut founder, &mut user3, &mut vault, 14400, 5000).unwrap();
        assert_eq!(founder.balance, 0);
        assert_eq!(user3.balance, 8100);
        assert_eq!(vault.balance, 1000);
        assert_eq!(config.total_fees, 1000);

        // An unrestricted holder pays fees but is never gated.
        apply_transfer(&mut config, &mut user3, &mut user4, &mut vault, 14400, 500).unwrap();
        assert_eq!(user3.balance, 7600);
        assert_eq!(user4.balance, 1350);
        assert_eq!(vault.balance, 1050);
        assert_supply(
            &config,
            &[&founder, &other_founder, &user3, &user4, &vault],
        );
    }

    #[test]
    fn transfer_parties_must_be_distinct() {
        let sender = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        assert!(check_transfer_parties(sender, recipient, vault).is_ok());
        // Null identity.
        assert!(matches!(
            check_transfer_parties(sender, Pubkey::default(), vault),
            Err(LedgerError::InvalidAddress)
        ));
        // Self-transfer would alias the sender's holder account.
        assert!(matches!(
            check_transfer_parties(sender, sender, vault),
            Err(LedgerError::InvalidAddress)
        ));
        // Transfer addressed to the fee-collection balance would alias it.
        assert!(matches!(
            check_transfer_parties(sender, vault, vault),
            Err(LedgerError::InvalidAddress)
        ));
    }

    #[test]
    fn locked_before_first_tier() {
        let mut config = config(10_000);
        let mut founder = scheduled_founder(10_000, &[3600, 7200, 14400], &[20, 30, 50]);
        let mut user = holder(0, VestingState::Unrestricted);
        let mut vault = holder(0, VestingState::Unrestricted);

        assert!(matches!(
            apply_transfer(&mut config, &mut founder, &mut user, &mut vault, 1000, 1),
            Err(LedgerError::VestingLocked)
        ));
        assert_eq!(founder.balance, 10_000);
        assert_eq!(config.total_fees, 0);
    }

    #[test]
    fn unscheduled_team_holder_sends_nothing() {
        let mut config = config(10_000);
        let mut founder = holder(10_000, VestingState::TeamUnscheduled);
        let mut user = holder(0, VestingState::Unrestricted);
        let mut vault = holder(0, VestingState::Unrestricted);

        assert!(matches!(
            apply_transfer(&mut config, &mut founder, &mut user, &mut vault, i64::MAX, 1),
            Err(LedgerError::VestingLocked)
        ));
    }

    #[test]
    fn insufficient_balance_after_vesting_gate() {
        let mut config = config(100);
        let mut sender = holder(100, VestingState::Unrestricted);
        let mut recipient = holder(0, VestingState::Unrestricted);
        let mut vault = holder(0, VestingState::Unrestricted);

        assert!(matches!(
            apply_transfer(&mut config, &mut sender, &mut recipient, &mut vault, 0, 101),
            Err(LedgerError::InsufficientBalance)
        ));
        assert_eq!(sender.balance, 100);
        assert_eq!(recipient.balance, 0);
    }

    #[test]
    fn either_party_exemption_zeroes_fee() {
        let mut config = config(15_000);
        let mut exempt = holder(5000, VestingState::Unrestricted);
        exempt.fee_exempt = true;
        let mut plain = holder(10_000, VestingState::Unrestricted);
        let mut vault = holder(0, VestingState::Unrestricted);

        // Exempt sender.
        let split =
            apply_transfer(&mut config, &mut exempt, &mut plain, &mut vault, 0, 1000).unwrap();
        assert_eq!(split, FeeSplit { net: 1000, fee: 0 });
        // Exempt recipient.
        let split =
            apply_transfer(&mut config, &mut plain, &mut exempt, &mut vault, 0, 1000).unwrap();
        assert_eq!(split, FeeSplit { net: 1000, fee: 0 });
        assert_eq!(vault.balance, 0);
        assert_eq!(config.total_fees, 0);

        // Toggling exemption off changes only subsequent transfers.
        exempt.fee_exempt = false;
        let split =
            apply_transfer(&mut config, &mut exempt, &mut plain, &mut vault, 0, 1000).unwrap();
        assert_eq!(split, FeeSplit { net: 900, fee: 100 });
        assert_eq!(vault.balance, 100);
        assert_eq!(config.total_fees, 100);
        assert_supply(&config, &[&exempt, &plain, &vault]);
    }

    #[test]
    fn doubled_rates_double_the_fee() {
        let mut config = config(10_000);
        config.tax_fee_percent = 10;
        config.liquidity_fee_percent = 10;
        let mut sender = holder(10_000, VestingState::Unrestricted);
        let mut recipient = holder(0, VestingState::Unrestricted);
        let mut vault = holder(0, VestingState::Unrestricted);

        let split =
            apply_transfer(&mut config, &mut sender, &mut recipient, &mut vault, 0, 1000)
                .unwrap();
        assert_eq!(split, FeeSplit { net: 800, fee: 200 });
        assert_eq!(recipient.balance, 800);
        assert_eq!(vault.balance, 200);
        assert_supply(&config, &[&sender, &recipient, &vault]);
    }

    #[test]
    fn supply_conserved_over_random_sequence() {
        let mut config = config(40_000);
        let mut a = holder(25_000, VestingState::Unrestricted);
        let mut b = holder(15_000, VestingState::Unrestricted);
        let mut c = holder(0, VestingState::Unrestricted);
        let mut vault = holder(0, VestingState::Unrestricted);

        let amounts = [1u64, 7, 99, 1000, 3333, 250, 4001, 13];
        for (i, &amount) in amounts.iter().enumerate() {
            let result = if i % 2 == 0 {
                apply_transfer(&mut config, &mut a, &mut c, &mut vault, 0, amount)
            } else {
                apply_transfer(&mut config, &mut b, &mut c, &mut vault, 0, amount)
            };
            result.unwrap();
            assert_supply(&config, &[&a, &b, &c, &vault]);
        }
        assert_eq!(config.total_supply, 40_000);
    }

    #[test]
    fn allowance_consumption() {
        let mut allowance = Allowance {
            owner: Pubkey::new_unique(),
            spender: Pubkey::new_unique(),
            amount: 1000,
        };
        assert!(matches!(
            consume_allowance(&mut allowance, 1001),
            Err(LedgerError::ExceedsAllowance)
        ));
        assert_eq!(allowance.amount, 1000);

        consume_allowance(&mut allowance, 1000).unwrap();
        assert_eq!(allowance.amount, 0);
        assert!(matches!(
            consume_allowance(&mut allowance, 1),
            Err(LedgerError::ExceedsAllowance)
        ));
    }

    #[test]
    fn mint_burn_round_trip() {
        let mut config = config(40_000);
        let mut user = holder(0, VestingState::Unrestricted);

        apply_mint(&mut config, &mut user, 1000).unwrap();
        assert_eq!(user.balance, 1000);
        assert_eq!(config.total_supply, 41_000);

        apply_burn(&mut config, &mut user, 1000).unwrap();
        assert_eq!(user.balance, 0);
        assert_eq!(config.total_supply, 40_000);
    }

    #[test]
    fn mint_and_burn_reject_zero_amounts() {
        let mut config = config(1000);
        let mut user = holder(1000, VestingState::Unrestricted);

        assert!(matches!(
            apply_mint(&mut config, &mut user, 0),
            Err(LedgerError::InvalidAmount)
        ));
        assert!(matches!(
            apply_burn(&mut config, &mut user, 0),
            Err(LedgerError::InvalidAmount)
        ));
        assert!(matches!(
            apply_burn(&mut config, &mut user, 1001),
            Err(LedgerError::InsufficientBalance)
        ));
        assert_eq!(user.balance, 1000);
        assert_eq!(config.total_supply, 1000);
    }
}
