use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Unauthorized signer for this operation")]
    Unauthorized,

    #[msg("No round is active; deposits are closed")]
    RoundNotActive,

    #[msg("A round is already active")]
    AlreadyActive,

    #[msg("Round is not active")]
    NotActive,

    #[msg("Vault already initialized")]
    AlreadyInitialized,

    #[msg("Recipient count does not match amounts or reward ratios")]
    LengthMismatch,

    #[msg("Payouts exceed the distributable pool")]
    InsufficientPool,

    #[msg("Deposit amount must be non-zero and must not overflow the pool")]
    InvalidAmount,

    #[msg("Platform fee rate must be <= 100")]
    InvalidFeeRate,

    #[msg("Reward ratios must be non-empty, bounded, and sum to more than zero")]
    InvalidRewardRatios,

    #[msg("Ratio distribution requested but no reward ratios are configured")]
    RatiosNotConfigured,

    #[msg("At least one recipient is required")]
    NoRecipients,

    #[msg("Too many recipients for a single distribution")]
    TooManyRecipients,

    #[msg("Recipient account is not a valid payout target")]
    InvalidRecipient,

    #[msg("Math overflow")]
    MathOverflow,
}
