use anchor_lang::prelude::*;

use crate::guard::Operation;

use super::end_round::{close_and_distribute, Distribute};

/// `Some(amounts)` pays explicit amounts, `None` pays by the stored ratios.
pub fn distribute_sol<'info>(
    ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
    vault_id: [u8; 32],
    amounts: Option<Vec<u64>>,
) -> Result<()> {
    close_and_distribute(ctx, vault_id, Operation::DistributeSol, amounts.into())
}
