//! Manual bank-transfer deposit wizard: Amount → Payment → Submitted.

use api::ShopApi;
use store::DepositConfig;

use crate::format::format_vnd;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DepositStep {
    /// Choosing how much to top up.
    #[default]
    Amount,
    /// Showing the QR code and transfer reference for `amount`.
    Payment { amount: i64 },
    /// The transfer was reported; an admin approves it later.
    Submitted { amount: i64 },
}

impl DepositStep {
    /// 1-based position, for the step indicator.
    pub fn index(&self) -> usize {
        match self {
            DepositStep::Amount => 1,
            DepositStep::Payment { .. } => 2,
            DepositStep::Submitted { .. } => 3,
        }
    }

    pub fn amount(&self) -> Option<i64> {
        match self {
            DepositStep::Amount => None,
            DepositStep::Payment { amount } | DepositStep::Submitted { amount } => Some(*amount),
        }
    }
}

/// Parse the free-entry amount field. Separators (`.`, `,`, spaces) are ignored.
pub fn parse_amount(input: &str) -> Option<i64> {
    let digits: String = input
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ' ' | '_'))
        .collect();
    digits.parse().ok()
}

/// Reject amounts below the configured minimum.
pub fn validate_amount(amount: i64, config: &DepositConfig) -> Result<i64, String> {
    if amount < config.min_amount {
        return Err(format!(
            "The minimum deposit is {}.",
            format_vnd(config.min_amount)
        ));
    }
    Ok(amount)
}

/// Validate, then register the deposit intent. Returns the next step.
///
/// Invalid amounts never reach the network.
pub async fn start_deposit(
    api: &ShopApi,
    config: &DepositConfig,
    amount: i64,
) -> Result<DepositStep, String> {
    let amount = validate_amount(amount, config)?;
    match api.request_deposit(amount).await {
        Ok(()) => {
            tracing::info!("Deposit of {} started", amount);
            Ok(DepositStep::Payment { amount })
        }
        Err(e) => {
            tracing::warn!("Deposit request failed: {}", e);
            Err(e.user_message("Could not create the deposit request."))
        }
    }
}

/// Report the transfer as done so an admin can approve it.
pub async fn confirm_transfer(api: &ShopApi, amount: i64) -> Result<DepositStep, String> {
    match api.notify_deposit(amount).await {
        Ok(()) => {
            tracing::info!("Deposit of {} reported as transferred", amount);
            Ok(DepositStep::Submitted { amount })
        }
        Err(e) => {
            tracing::warn!("Deposit notification failed: {}", e);
            Err(e.user_message("Could not send the transfer confirmation."))
        }
    }
}
