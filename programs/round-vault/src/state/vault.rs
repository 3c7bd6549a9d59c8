use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_FEE_RATE, MAX_REWARD_RATIOS},
    distribution::DistributionPlan,
    errors::VaultError,
};

#[account]
#[derive(Default)]
pub struct VaultState {
    /// Unique vault identifier
    pub vault_id: [u8; 32],

    /// Signer allowed to start/end rounds and distribute; fixed at initialization
    pub admin: Pubkey,

    /// Custody PDA holding the pooled lamports
    pub custody: Pubkey,

    /// Lamports deposited in the current round and not yet distributed
    pub total_pool: u64,

    /// Is a round currently open
    pub active: bool,

    /// Platform fee as a whole percentage of the pool (0-100)
    pub platform_fee_rate: u8,

    /// Recipient weights for ratio-mode distribution (empty = not configured)
    pub reward_ratios: Vec<u64>,

    /// Reject deposits while no round is active
    pub require_active_round: bool,

    /// Lamports left in custody by closed rounds (truncation and unallocated value)
    pub retained_remainder: u64,

    /// Current (or last closed) round number, starting at 1
    pub round_id: u64,

    /// Lifetime fee + payouts moved out of custody
    pub total_distributed: u64,

    /// Is the vault initialized
    pub is_initialized: bool,

    /// Bump seeds for PDA derivation
    pub bump: u8,
    pub custody_bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl VaultState {
    pub const LEN: usize = 8 + // discriminator
        32 + // vault_id
        32 + // admin
        32 + // custody
        8 + // total_pool
        1 + // active
        1 + // platform_fee_rate
        4 + 8 * MAX_REWARD_RATIOS + // reward_ratios
        1 + // require_active_round
        8 + // retained_remainder
        8 + // round_id
        8 + // total_distributed
        1 + // is_initialized
        1 + // bump
        1 + // custody_bump
        32; // _reserved

    pub fn ensure_uninitialized(&self) -> Result<()> {
        require!(!self.is_initialized, VaultError::AlreadyInitialized);
        Ok(())
    }

    pub fn validate_fee_rate(rate: u8) -> Result<u8> {
        require!(rate <= MAX_FEE_RATE, VaultError::InvalidFeeRate);
        Ok(rate)
    }

    /// An explicitly supplied ratio list must be usable for ratio-mode payouts.
    pub fn validate_reward_ratios(ratios: &[u64]) -> Result<()> {
        require!(
            !ratios.is_empty() && ratios.len() <= MAX_REWARD_RATIOS,
            VaultError::InvalidRewardRatios
        );
        require!(
            ratios.iter().any(|&r| r > 0),
            VaultError::InvalidRewardRatios
        );
        Ok(())
    }

    /// Inactive -> Active. Returns the new round number.
    pub fn begin_round(&mut self) -> Result<u64> {
        require!(!self.active, VaultError::AlreadyActive);

        self.round_id = self
            .round_id
            .checked_add(1)
            .ok_or(VaultError::MathOverflow)?;
        self.active = true;

        Ok(self.round_id)
    }

    pub fn ensure_round_active(&self) -> Result<()> {
        require!(self.active, VaultError::NotActive);
        Ok(())
    }

    pub fn accepts_deposits(&self) -> bool {
        self.active || !self.require_active_round
    }

    /// Adds a deposit to the pool. Returns the new pool total.
    pub fn record_deposit(&mut self, amount: u64) -> Result<u64> {
        require!(self.accepts_deposits(), VaultError::RoundNotActive);
        require!(amount > 0, VaultError::InvalidAmount);

        self.total_pool = self
            .total_pool
            .checked_add(amount)
            .ok_or(VaultError::InvalidAmount)?;

        Ok(self.total_pool)
    }

    /// Active -> Inactive after `plan` has been applied to custody.
    pub fn close_round(&mut self, plan: &DistributionPlan) -> Result<()> {
        self.ensure_round_active()?;
        require!(plan.pool == self.total_pool, VaultError::MathOverflow);

        self.retained_remainder = self
            .retained_remainder
            .checked_add(plan.remainder)
            .ok_or(VaultError::MathOverflow)?;
        self.total_distributed = self
            .total_distributed
            .checked_add(plan.outflow()?)
            .ok_or(VaultError::MathOverflow)?;

        self.total_pool = 0;
        self.active = false;

        Ok(())
    }
}
