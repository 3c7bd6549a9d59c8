//! Who may sign which operation.
//!
//! Every handler calls [`authorize`] before touching anything else, so a
//! wrong signer always surfaces as `Unauthorized` regardless of what else is
//! wrong with the request.

use anchor_lang::prelude::*;

use crate::{errors::VaultError, state::VaultState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    InitializeVault,
    StartRound,
    Participate,
    EndRound,
    DistributeSol,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignerRequirement {
    /// Any signer
    Anyone,
    /// Any signer on a fresh vault (and it becomes admin); the admin afterwards
    Initializer,
    /// The vault's recorded admin
    Admin,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::InitializeVault,
        Operation::StartRound,
        Operation::Participate,
        Operation::EndRound,
        Operation::DistributeSol,
    ];

    pub const fn required_signer(self) -> SignerRequirement {
        match self {
            Operation::InitializeVault => SignerRequirement::Initializer,
            Operation::StartRound => SignerRequirement::Admin,
            Operation::Participate => SignerRequirement::Anyone,
            Operation::EndRound => SignerRequirement::Admin,
            Operation::DistributeSol => SignerRequirement::Admin,
        }
    }

    pub const fn is_privileged(self) -> bool {
        !matches!(self.required_signer(), SignerRequirement::Anyone)
    }
}

pub fn authorize(op: Operation, vault: &VaultState, signer: &Pubkey) -> Result<()> {
    match op.required_signer() {
        SignerRequirement::Anyone => Ok(()),
        SignerRequirement::Initializer if !vault.is_initialized => Ok(()),
        SignerRequirement::Initializer | SignerRequirement::Admin => {
            require!(vault.is_initialized, VaultError::Unauthorized);
            require_keys_eq!(vault.admin, *signer, VaultError::Unauthorized);
            Ok(())
        }
    }
}
