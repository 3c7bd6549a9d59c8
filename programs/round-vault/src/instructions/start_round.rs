use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::RoundStarted,
    guard::{self, Operation},
    state::VaultState,
};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct StartRound<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump = vault_state.bump,
        constraint = vault_state.is_initialized
    )]
    pub vault_state: Account<'info, VaultState>,

    pub admin: Signer<'info>,
}

pub fn start_round(ctx: Context<StartRound>, vault_id: [u8; 32]) -> Result<()> {
    guard::authorize(
        Operation::StartRound,
        &ctx.accounts.vault_state,
        &ctx.accounts.admin.key(),
    )?;

    let round_id = ctx.accounts.vault_state.begin_round()?;

    msg!("round {} started", round_id);

    emit!(RoundStarted {
        vault_id,
        round_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
