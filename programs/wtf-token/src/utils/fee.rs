//! Fee split math.

use crate::error::LedgerError;

/// Result of splitting a gross transfer amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    /// Credited to the recipient.
    pub net: u64,
    /// Diverted to the fee-collection holder.
    pub fee: u64,
}

/// Split `amount` at the combined tax + liquidity rate. Exempt transfers
/// carry the full amount to the recipient.
pub fn compute_split(
    amount: u64,
    combined_percent: u8,
    exempt: bool,
) -> Result<FeeSplit, LedgerError> {
    if exempt {
        return Ok(FeeSplit { net: amount, fee: 0 });
    }
    // combined_percent <= 100, so the product fits u128 and fee <= amount.
    let fee = (amount as u128)
        .checked_mul(combined_percent as u128)
        .ok_or(LedgerError::MathOverflow)?
        / 100;
    let fee = u64::try_from(fee).map_err(|_| LedgerError::MathOverflow)?;
    let net = amount.checked_sub(fee).ok_or(LedgerError::MathOverflow)?;
    Ok(FeeSplit { net, fee })
}
