use anchor_lang::prelude::*;

use crate::constants::{
    CONFIG_SEED, DEFAULT_LIQUIDITY_FEE_PERCENT, DEFAULT_TAX_FEE_PERCENT, HOLDER_SEED,
};
use crate::error::LedgerError;
use crate::state::{Holder, LedgerConfig, VestingState};

/// One-time ledger creation. Funds the two founding team accounts, captures
/// the reference instant, and reserves the fee-collection balance (the holder
/// keyed by the config PDA itself). The deployer and the ledger's own balance
/// start fee-exempt; team membership is fixed here and never grantable later.
pub fn initialize(
    ctx: Context<Initialize>,
    founders: [Pubkey; 2],
    amounts: [u64; 2],
) -> Result<()> {
    require!(founders[0] != Pubkey::default(), LedgerError::InvalidAddress);
    require!(founders[1] != Pubkey::default(), LedgerError::InvalidAddress);
    require!(founders[0] != founders[1], LedgerError::InvalidAddress);
    require!(amounts[0] > 0, LedgerError::InvalidAmount);
    require!(amounts[1] > 0, LedgerError::InvalidAmount);

    let total_supply = amounts[0]
        .checked_add(amounts[1])
        .ok_or(LedgerError::MathOverflow)?;
    let beginning = Clock::get()?.unix_timestamp;

    let config = &mut ctx.accounts.config;
    config.owner = ctx.accounts.owner.key();
    config.pool = Pubkey::default();
    config.total_supply = total_supply;
    config.total_fees = 0;
    config.tax_fee_percent = DEFAULT_TAX_FEE_PERCENT;
    config.liquidity_fee_percent = DEFAULT_LIQUIDITY_FEE_PERCENT;
    config.swap_and_liquify_enabled = true;
    config.beginning = beginning;

    let fee_vault = &mut ctx.accounts.fee_vault;
    fee_vault.wallet = config.key();
    fee_vault.balance = 0;
    fee_vault.fee_exempt = true;
    fee_vault.vesting = VestingState::Unrestricted;

    let owner_holder = &mut ctx.accounts.owner_holder;
    owner_holder.wallet = ctx.accounts.owner.key();
    owner_holder.balance = 0;
    owner_holder.fee_exempt = true;
    owner_holder.vesting = VestingState::Unrestricted;

    let founder_one = &mut ctx.accounts.founder_one;
    founder_one.wallet = founders[0];
    founder_one.balance = amounts[0];
    founder_one.fee_exempt = false;
    founder_one.vesting = VestingState::TeamUnscheduled;

    let founder_two = &mut ctx.accounts.founder_two;
    founder_two.wallet = founders[1];
    founder_two.balance = amounts[1];
    founder_two.fee_exempt = false;
    founder_two.vesting = VestingState::TeamUnscheduled;

    emit!(LedgerInitialized {
        owner: config.owner,
        founders,
        amounts,
        total_supply,
        beginning,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(founders: [Pubkey; 2])]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + LedgerConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, LedgerConfig>,

    /// The ledger's own reserved fee-collection balance.
    #[account(
        init,
        payer = owner,
        space = 8 + Holder::SIZE,
        seeds = [HOLDER_SEED, config.key().as_ref()],
        bump
    )]
    pub fee_vault: Account<'info, Holder>,

    #[account(
        init,
        payer = owner,
        space = 8 + Holder::SIZE,
        seeds = [HOLDER_SEED, owner.key().as_ref()],
        bump
    )]
    pub owner_holder: Account<'info, Holder>,

    #[account(
        init,
        payer = owner,
        space = 8 + Holder::SIZE,
        seeds = [HOLDER_SEED, founders[0].as_ref()],
        bump
    )]
    pub founder_one: Account<'info, Holder>,

    #[account(
        init,
        payer = owner,
        space = 8 + Holder::SIZE,
        seeds = [HOLDER_SEED, founders[1].as_ref()],
        bump
    )]
    pub founder_two: Account<'info, Holder>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LedgerInitialized {
    pub owner: Pubkey,
    pub founders: [Pubkey; 2],
    pub amounts: [u64; 2],
    pub total_supply: u64,
    pub beginning: i64,
}
