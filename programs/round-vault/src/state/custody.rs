use anchor_lang::prelude::*;

/// Program-owned account that holds the pooled lamports.
///
/// Owned by this program so payouts can debit it directly without a CPI.
/// Its rent-exempt minimum is never counted as pool value.
#[account]
#[derive(Default)]
pub struct Custody {
    /// VaultState this custody belongs to
    pub vault_state: Pubkey,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Custody {
    pub const LEN: usize = 8 + // discriminator
        32 + // vault_state
        1; // bump
}
