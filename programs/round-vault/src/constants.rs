/// PDA seeds
pub const VAULT_SEED: &[u8] = b"vault";
/// Custody PDA with seeds [CUSTODY_SEED, vault_state]
pub const CUSTODY_SEED: &[u8] = b"custody";

/// Platform fee is a whole percentage of the pool
pub const FEE_RATE_DENOMINATOR: u64 = 100;
pub const MAX_FEE_RATE: u8 = 100;

/// Distribution limits
pub const MAX_REWARD_RATIOS: usize = 16;
/// Upper bound on recipients so one distribution always fits a single transaction
pub const MAX_RECIPIENTS: usize = 24;
