use anchor_lang::prelude::*;

use crate::{
    constants::*,
    distribution::{self, DistributionMode},
    events::{PlatformFeeCollected, RecipientPaid, RoundEnded},
    guard::{self, Operation},
    state::{Custody, VaultState},
};

/// Accounts for closing a round. Shared by `end_round` and `distribute_sol`.
#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct Distribute<'info> {
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

    /// Receives the platform fee
    #[account(mut)]
    pub admin: Signer<'info>,
    // Remaining accounts are recipients, writable, in payout order
}

pub fn end_round<'info>(
    ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
    vault_id: [u8; 32],
    mode: DistributionMode,
) -> Result<()> {
    close_and_distribute(ctx, vault_id, Operation::EndRound, mode)
}

/// Guard, plan, pay out, then reset the round. Any failure aborts the whole
/// instruction, so custody and VaultState are never left half-updated.
pub(crate) fn close_and_distribute<'info>(
    ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
    vault_id: [u8; 32],
    op: Operation,
    mode: DistributionMode,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    guard::authorize(op, &ctx.accounts.vault_state, &admin)?;

    let vault_key = ctx.accounts.vault_state.key();
    let custody_info = ctx.accounts.custody.to_account_info();
    let admin_info = ctx.accounts.admin.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(custody_info.data_len());
    let recipients = ctx.remaining_accounts;

    let vault_state = &mut ctx.accounts.vault_state;
    let round_id = vault_state.round_id;
    let plan = distribution::settle_round(
        vault_state,
        &vault_key,
        &custody_info,
        &admin_info,
        recipients,
        rent_floor,
        &mode,
    )?;

    if plan.fee > 0 {
        emit!(PlatformFeeCollected {
            vault_id,
            round_id,
            admin,
            amount: plan.fee,
        });
    }

    for (recipient, &amount) in recipients.iter().zip(plan.payouts.iter()) {
        emit!(RecipientPaid {
            vault_id,
            round_id,
            recipient: recipient.key(),
            amount,
        });
    }

    let total_paid = plan.total_paid()?;
    msg!(
        "round {} closed: pool={} fee={} paid={} retained={}",
        round_id,
        plan.pool,
        plan.fee,
        total_paid,
        plan.remainder
    );

    emit!(RoundEnded {
        vault_id,
        round_id,
        pool: plan.pool,
        fee: plan.fee,
        total_paid,
        remainder: plan.remainder,
        recipient_count: recipients.len() as u32,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
