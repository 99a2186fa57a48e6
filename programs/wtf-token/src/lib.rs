use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("F8ZBJZCfEDxp8J1FMw6qfvoT7kq8yB6iLdPNSKVht2rr");

/// WTF fungible ledger: a single-asset balance table with three policy gates
/// on every transfer (tiered time lockups for the founding team accounts, a
/// tax + liquidity fee split diverted into the ledger's own fee-collection
/// balance, and an owner-gated administrative surface). The runtime serializes
/// instructions and rolls back all account writes on failure, so every
/// operation is atomic-or-rejected.
#[program]
pub mod wtf_token {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        founders: [Pubkey; 2],
        amounts: [u64; 2],
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, founders, amounts)
    }

    pub fn transfer(ctx: Context<Transfer>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::transfer::transfer(ctx, to, amount)
    }

    pub fn transfer_from(
        ctx: Context<TransferFrom>,
        owner: Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::transfer_from::transfer_from(ctx, owner, to, amount)
    }

    pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
        instructions::approve::approve(ctx, spender, amount)
    }

    pub fn mint(ctx: Context<Mint>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::mint::mint(ctx, to, amount)
    }

    pub fn burn(ctx: Context<Burn>, amount: u64) -> Result<()> {
        instructions::burn::burn(ctx, amount)
    }

    pub fn set_wallet_lockup(
        ctx: Context<SetWalletLockup>,
        wallet: Pubkey,
        thresholds: Vec<i64>,
        percents: Vec<u8>,
    ) -> Result<()> {
        instructions::set_wallet_lockup::set_wallet_lockup(ctx, wallet, thresholds, percents)
    }

    pub fn set_tax_fee_percent(ctx: Context<UpdateFees>, percent: u8) -> Result<()> {
        instructions::set_fee_percents::set_tax_fee_percent(ctx, percent)
    }

    pub fn set_liquidity_fee_percent(ctx: Context<UpdateFees>, percent: u8) -> Result<()> {
        instructions::set_fee_percents::set_liquidity_fee_percent(ctx, percent)
    }

    pub fn exclude_from_fee(ctx: Context<SetFeeExemption>, wallet: Pubkey) -> Result<()> {
        instructions::set_fee_exemption::exclude_from_fee(ctx, wallet)
    }

    pub fn include_in_fee(ctx: Context<SetFeeExemption>, wallet: Pubkey) -> Result<()> {
        instructions::set_fee_exemption::include_in_fee(ctx, wallet)
    }

    pub fn set_pool(ctx: Context<SetPool>, pool: Pubkey) -> Result<()> {
        instructions::set_pool::set_pool(ctx, pool)
    }

    pub fn set_swap_and_liquify_enabled(
        ctx: Context<SetSwapAndLiquify>,
        enabled: bool,
    ) -> Result<()> {
        instructions::set_swap_and_liquify::set_swap_and_liquify_enabled(ctx, enabled)
    }

    pub fn emit_ledger_info(ctx: Context<EmitLedgerInfo>) -> Result<()> {
        instructions::emit_ledger_info::emit_ledger_info(ctx)
    }

    pub fn emit_holder_status(ctx: Context<EmitHolderStatus>, wallet: Pubkey) -> Result<()> {
        instructions::emit_holder_status::emit_holder_status(ctx, wallet)
    }
}
