//! Round-close accounting: platform fee, recipient payouts, retained remainder.
//!
//! Planning is pure integer math over the pool. Applying a plan moves lamports
//! out of custody; the runtime commits or discards every move of the
//! instruction together.

use anchor_lang::prelude::*;

use crate::{
    constants::{FEE_RATE_DENOMINATOR, MAX_RECIPIENTS},
    errors::VaultError,
    state::VaultState,
    utils::transfer_from_custody,
};

/// How recipient amounts are determined at round close.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum DistributionMode {
    /// Caller-supplied amount per recipient, index-paired
    Explicit { amounts: Vec<u64> },
    /// Amounts derived from the vault's stored reward ratios, index-paired
    Ratio,
}

impl From<Option<Vec<u64>>> for DistributionMode {
    fn from(amounts: Option<Vec<u64>>) -> Self {
        match amounts {
            Some(amounts) => DistributionMode::Explicit { amounts },
            None => DistributionMode::Ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionPlan {
    /// Pool the plan was computed from
    pub pool: u64,
    /// Platform fee paid to the admin
    pub fee: u64,
    /// Payout per recipient, same order as the recipient accounts
    pub payouts: Vec<u64>,
    /// Lamports left in custody
    pub remainder: u64,
}

impl DistributionPlan {
    pub fn total_paid(&self) -> Result<u64> {
        checked_sum(&self.payouts)
    }

    /// Fee plus payouts.
    pub fn outflow(&self) -> Result<u64> {
        self.fee
            .checked_add(self.total_paid()?)
            .ok_or_else(|| VaultError::MathOverflow.into())
    }
}

fn checked_sum(values: &[u64]) -> Result<u64> {
    values
        .iter()
        .try_fold(0u64, |acc, &x| acc.checked_add(x))
        .ok_or_else(|| VaultError::MathOverflow.into())
}

/// floor(value * numerator / denominator) without intermediate overflow.
fn mul_div_floor(value: u64, numerator: u64, denominator: u128) -> Result<u64> {
    require!(denominator > 0, VaultError::MathOverflow);
    let scaled = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(VaultError::MathOverflow)?
        / denominator;
    u64::try_from(scaled).map_err(|_| VaultError::MathOverflow.into())
}

pub fn platform_fee(pool: u64, fee_rate: u8) -> Result<u64> {
    mul_div_floor(pool, fee_rate as u64, FEE_RATE_DENOMINATOR as u128)
}

/// floor(base * ratio_i / sum(ratios)) for each ratio. Truncation is not
/// redistributed.
pub fn ratio_shares(base: u64, ratios: &[u64]) -> Result<Vec<u64>> {
    let ratio_sum: u128 = ratios.iter().map(|&r| r as u128).sum();
    require!(ratio_sum > 0, VaultError::RatiosNotConfigured);

    ratios
        .iter()
        .map(|&ratio| mul_div_floor(base, ratio, ratio_sum))
        .collect()
}

/// Computes fee and payouts for closing a round over `pool`.
///
/// The fee comes off the top; explicit amounts and ratio shares are both
/// bounded by what is left after the fee.
pub fn plan_distribution(
    pool: u64,
    fee_rate: u8,
    reward_ratios: &[u64],
    recipient_count: usize,
    mode: &DistributionMode,
) -> Result<DistributionPlan> {
    let fee = platform_fee(pool, fee_rate)?;
    let distributable = pool.checked_sub(fee).ok_or(VaultError::MathOverflow)?;

    let payouts = match mode {
        DistributionMode::Explicit { amounts } => {
            require!(
                amounts.len() == recipient_count,
                VaultError::LengthMismatch
            );
            require!(recipient_count > 0, VaultError::NoRecipients);
            require!(
                recipient_count <= MAX_RECIPIENTS,
                VaultError::TooManyRecipients
            );
            let requested = checked_sum(amounts).map_err(|_| VaultError::InsufficientPool)?;
            require!(requested <= distributable, VaultError::InsufficientPool);
            amounts.clone()
        }
        DistributionMode::Ratio => {
            require!(
                !reward_ratios.is_empty(),
                VaultError::RatiosNotConfigured
            );
            require!(
                reward_ratios.len() == recipient_count,
                VaultError::LengthMismatch
            );
            require!(
                recipient_count <= MAX_RECIPIENTS,
                VaultError::TooManyRecipients
            );
            ratio_shares(distributable, reward_ratios)?
        }
    };

    let remainder = distributable
        .checked_sub(checked_sum(&payouts)?)
        .ok_or(VaultError::InsufficientPool)?;

    Ok(DistributionPlan {
        pool,
        fee,
        payouts,
        remainder,
    })
}

/// Recipients must be writable and must not alias the vault's own accounts.
pub fn validate_recipients(
    recipients: &[AccountInfo],
    custody: &Pubkey,
    vault_state: &Pubkey,
) -> Result<()> {
    for recipient in recipients {
        require!(recipient.is_writable, VaultError::InvalidRecipient);
        require!(
            recipient.key != custody && recipient.key != vault_state,
            VaultError::InvalidRecipient
        );
    }
    Ok(())
}

/// Moves the fee to `admin` and each payout to its recipient.
///
/// `rent_floor` is the custody's rent-exempt minimum; the plan is refused if
/// it would dip below it.
pub fn apply_plan<'info>(
    plan: &DistributionPlan,
    custody: &AccountInfo<'info>,
    admin: &AccountInfo<'info>,
    recipients: &[AccountInfo<'info>],
    rent_floor: u64,
) -> Result<()> {
    require!(
        plan.payouts.len() == recipients.len(),
        VaultError::LengthMismatch
    );

    let spendable = custody.lamports().saturating_sub(rent_floor);
    require!(plan.outflow()? <= spendable, VaultError::InsufficientPool);

    transfer_from_custody(custody, admin, plan.fee)?;
    for (recipient, &amount) in recipients.iter().zip(plan.payouts.iter()) {
        transfer_from_custody(custody, recipient, amount)?;
    }

    Ok(())
}

/// Closes the active round on `vault`: plans over the current pool, pays out of
/// `custody`, and resets the round. Returns the applied plan.
pub fn settle_round<'info>(
    vault: &mut VaultState,
    vault_key: &Pubkey,
    custody: &AccountInfo<'info>,
    admin: &AccountInfo<'info>,
    recipients: &[AccountInfo<'info>],
    rent_floor: u64,
    mode: &DistributionMode,
) -> Result<DistributionPlan> {
    vault.ensure_round_active()?;

    let plan = plan_distribution(
        vault.total_pool,
        vault.platform_fee_rate,
        &vault.reward_ratios,
        recipients.len(),
        mode,
    )?;
    validate_recipients(recipients, custody.key, vault_key)?;
    apply_plan(&plan, custody, admin, recipients, rent_floor)?;
    vault.close_round(&plan)?;

    Ok(plan)
}
