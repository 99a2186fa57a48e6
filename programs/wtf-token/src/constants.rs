//! Program-wide constants.

/// Token metadata exposed through `emit_ledger_info`.
pub const TOKEN_NAME: &str = "WhatToFarm";
pub const TOKEN_SYMBOL: &str = "WTF";
pub const TOKEN_DECIMALS: u8 = 18;

/// Max lockup tiers stored per scheduled holder.
pub const MAX_LOCKUP_TIERS: usize = 10;

/// Combined tax + liquidity fee may never exceed this.
pub const MAX_COMBINED_FEE_PERCENT: u8 = 100;

/// Default fee rates applied at initialization.
pub const DEFAULT_TAX_FEE_PERCENT: u8 = 5;
pub const DEFAULT_LIQUIDITY_FEE_PERCENT: u8 = 5;

/// Fee-collection balance at which the post-commit swap-and-liquify
/// notification fires (consumed by the external liquidity process).
pub const SWAP_LIQUIFY_THRESHOLD: u64 = 500;

/// PDA seeds.
pub const CONFIG_SEED: &[u8] = b"config";
pub const HOLDER_SEED: &[u8] = b"holder";
pub const ALLOWANCE_SEED: &[u8] = b"allowance";
