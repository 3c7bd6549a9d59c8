use anchor_lang::prelude::*;

pub mod constants;
pub mod distribution;
pub mod errors;
pub mod events;
pub mod guard;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use distribution::DistributionMode;
use instructions::*;

declare_id!("5vhFMApEVBDFWUhnGtQBepGLT1PCp1Bi9rKxiAYhomci");

#[program]
pub mod round_vault {
    use super::*;

    /// Create the vault; the signer becomes its admin
    pub fn initialize_vault(
        ctx: Context<InitializeVault>,
        vault_id: [u8; 32],
        reward_ratios: Option<Vec<u64>>,
        platform_fee_rate: Option<u8>,
        require_active_round: Option<bool>,
    ) -> Result<()> {
        instructions::initialize_vault(
            ctx,
            vault_id,
            reward_ratios,
            platform_fee_rate,
            require_active_round,
        )
    }

    /// Open a round for deposits (admin only)
    pub fn start_round(ctx: Context<StartRound>, vault_id: [u8; 32]) -> Result<()> {
        instructions::start_round(ctx, vault_id)
    }

    /// Deposit lamports into the current round's pool
    pub fn participate(ctx: Context<Participate>, vault_id: [u8; 32], amount: u64) -> Result<()> {
        instructions::participate(ctx, vault_id, amount)
    }

    /// Take the platform fee, pay recipients, and close the round (admin only)
    pub fn end_round<'info>(
        ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
        vault_id: [u8; 32],
        mode: DistributionMode,
    ) -> Result<()> {
        instructions::end_round(ctx, vault_id, mode)
    }

    /// Same as `end_round`; explicit amounts when given, stored ratios otherwise
    pub fn distribute_sol<'info>(
        ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
        vault_id: [u8; 32],
        amounts: Option<Vec<u64>>,
    ) -> Result<()> {
        instructions::distribute_sol(ctx, vault_id, amounts)
    }
}
