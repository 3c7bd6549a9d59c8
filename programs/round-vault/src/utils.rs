use anchor_lang::prelude::*;

use crate::errors::VaultError;

/// Transfer lamports out of the program-owned custody PDA.
pub fn transfer_from_custody<'info>(
    custody: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let custody_after = custody
        .lamports()
        .checked_sub(amount)
        .ok_or(VaultError::InsufficientPool)?;
    let to_after = to
        .lamports()
        .checked_add(amount)
        .ok_or(VaultError::MathOverflow)?;

    **custody.try_borrow_mut_lamports()? = custody_after;
    **to.try_borrow_mut_lamports()? = to_after;
    Ok(())
}
