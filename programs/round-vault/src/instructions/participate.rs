use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::*,
    events::Deposited,
    guard::{self, Operation},
    state::{Custody, VaultState},
};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct Participate<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump = vault_state.bump,
        constraint = vault_state.is_initialized
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [CUSTODY_SEED, vault_state.key().as_ref()],
        bump = vault_state.custody_bump,
        constraint = custody.key() == vault_state.custody
    )]
    pub custody: Account<'info, Custody>,

    #[account(mut)]
    pub participant: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn participate(ctx: Context<Participate>, vault_id: [u8; 32], amount: u64) -> Result<()> {
    let participant = ctx.accounts.participant.key();
    guard::authorize(
        Operation::Participate,
        &ctx.accounts.vault_state,
        &participant,
    )?;

    // Counter and transfer land in the same instruction; either both commit or neither
    let total_pool = ctx.accounts.vault_state.record_deposit(amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.participant.to_account_info(),
                to: ctx.accounts.custody.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Deposited {
        vault_id,
        round_id: ctx.accounts.vault_state.round_id,
        participant,
        amount,
        total_pool,
    });

    Ok(())
}
