use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::VaultInitialized,
    guard::{self, Operation},
    state::{Custody, VaultState},
};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct InitializeVault<'info> {
    // init_if_needed so a second initialization reaches the handler and
    // fails with AlreadyInitialized instead of a system-program error
    #[account(
        init_if_needed,
        payer = authority,
        space = VaultState::LEN,
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Program-owned account that will hold pooled lamports
    #[account(
        init_if_needed,
        payer = authority,
        space = Custody::LEN,
        seeds = [CUSTODY_SEED, vault_state.key().as_ref()],
        bump
    )]
    pub custody: Account<'info, Custody>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_vault(
    ctx: Context<InitializeVault>,
    vault_id: [u8; 32],
    reward_ratios: Option<Vec<u64>>,
    platform_fee_rate: Option<u8>,
    require_active_round: Option<bool>,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    guard::authorize(
        Operation::InitializeVault,
        &ctx.accounts.vault_state,
        &authority,
    )?;

    ctx.accounts.vault_state.ensure_uninitialized()?;

    // Validate parameters
    let platform_fee_rate = VaultState::validate_fee_rate(platform_fee_rate.unwrap_or(0))?;
    let reward_ratios = match reward_ratios {
        Some(ratios) => {
            VaultState::validate_reward_ratios(&ratios)?;
            ratios
        }
        None => Vec::new(),
    };
    let require_active_round = require_active_round.unwrap_or(true);

    let custody_key = ctx.accounts.custody.key();
    let vault_key = ctx.accounts.vault_state.key();

    let custody = &mut ctx.accounts.custody;
    custody.vault_state = vault_key;
    custody.bump = ctx.bumps.custody;

    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.vault_id = vault_id;
    vault_state.admin = authority;
    vault_state.custody = custody_key;
    vault_state.total_pool = 0;
    vault_state.active = false;
    vault_state.platform_fee_rate = platform_fee_rate;
    vault_state.reward_ratios = reward_ratios.clone();
    vault_state.require_active_round = require_active_round;
    vault_state.retained_remainder = 0;
    vault_state.round_id = 0;
    vault_state.total_distributed = 0;
    vault_state.is_initialized = true;
    vault_state.bump = ctx.bumps.vault_state;
    vault_state.custody_bump = ctx.bumps.custody;

    msg!(
        "vault initialized: admin={} fee_rate={} ratios={:?} gating={}",
        authority,
        platform_fee_rate,
        reward_ratios,
        require_active_round
    );

    emit!(VaultInitialized {
        vault_id,
        admin: authority,
        custody: custody_key,
        platform_fee_rate,
        reward_ratios,
        require_active_round,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
