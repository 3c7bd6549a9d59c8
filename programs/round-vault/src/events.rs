use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault_id: [u8; 32],
    pub admin: Pubkey,
    pub custody: Pubkey,
    pub platform_fee_rate: u8,
    pub reward_ratios: Vec<u64>,
    pub require_active_round: bool,
    pub timestamp: i64,
}

#[event]
pub struct RoundStarted {
    pub vault_id: [u8; 32],
    pub round_id: u64,
    pub timestamp: i64,
}

#[event]
pub struct Deposited {
    pub vault_id: [u8; 32],
    pub round_id: u64,
    pub participant: Pubkey,
    pub amount: u64,
    pub total_pool: u64,
}

#[event]
pub struct PlatformFeeCollected {
    pub vault_id: [u8; 32],
    pub round_id: u64,
    pub admin: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RecipientPaid {
    pub vault_id: [u8; 32],
    pub round_id: u64,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RoundEnded {
    pub vault_id: [u8; 32],
    pub round_id: u64,
    pub pool: u64,
    pub fee: u64,
    pub total_paid: u64,
    pub remainder: u64,
    pub recipient_count: u32,
    pub timestamp: i64,
}
