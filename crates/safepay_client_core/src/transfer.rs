//! Send-money flow: amount checks against the last fetched balance, the transfer call,
//! and mapping of failures to what the SendMoney screen shows.

use std::time::Duration;

use crate::api::ApiClient;
use crate::client_log;
use crate::error::{ApiError, SubmitError};
use crate::ids::UserId;
use crate::models::{TransferRequest, TransferResponse};
use crate::validation::ValidationError;

pub const MIN_TRANSFER_AMOUNT: f64 = 0.01;
/// Success summary stays up this long before returning to the dashboard.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_secs(3);
/// Delay before sending the user to sign-in after a 401.
pub const AUTH_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Parse and range-check the amount input.
pub fn validate_transfer_amount(input: &str, balance: Option<f64>) -> Result<f64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::new("amount", "Please enter an amount"));
    }
    let amount: f64 = input
        .parse()
        .ok()
        .filter(|a: &f64| a.is_finite())
        .ok_or_else(|| ValidationError::new("amount", "Please enter a valid amount"))?;
    if amount <= 0.0 {
        return Err(ValidationError::new("amount", "Amount must be greater than zero"));
    }
    if amount < MIN_TRANSFER_AMOUNT {
        return Err(ValidationError::new("amount", "Minimum transfer amount is ₹0.01"));
    }
    let balance = balance
        .ok_or_else(|| ValidationError::new("amount", "Balance not loaded yet. Please wait."))?;
    if amount > balance {
        return Err(ValidationError::new("amount", "Insufficient balance"));
    }
    Ok(amount)
}

/// Build the request body; an empty description is left out.
pub fn build_transfer_request(
    recipient_id: &str,
    amount_input: &str,
    description: &str,
    balance: Option<f64>,
) -> Result<TransferRequest, ValidationError> {
    let to = UserId::parse(recipient_id)
        .map_err(|_| ValidationError::new("to", "No recipient selected"))?;
    let amount = validate_transfer_amount(amount_input, balance)?;
    let description = description.trim();
    Ok(TransferRequest {
        to,
        amount,
        description: (!description.is_empty()).then(|| description.to_string()),
    })
}

/// What the screen shows after a successful transfer.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferSummary {
    pub message: String,
    pub amount: f64,
    pub receiver_name: String,
    pub receiver_username: Option<String>,
    /// Sender's balance as reported by the server (`fromBalance`).
    pub new_balance: Option<f64>,
}

impl TransferSummary {
    pub fn from_response(resp: &TransferResponse, requested: &TransferRequest, fallback_name: &str) -> Self {
        match &resp.data {
            Some(data) => Self {
                message: resp.message.clone(),
                amount: data.amount,
                receiver_name: data.receiver.name.clone(),
                receiver_username: Some(data.receiver.username.clone()),
                new_balance: Some(data.from_balance),
            },
            None => Self {
                message: resp.message.clone(),
                amount: requested.amount,
                receiver_name: fallback_name.to_string(),
                receiver_username: None,
                new_balance: None,
            },
        }
    }
}

/// Validate, send, summarize. Nothing is sent when validation fails.
pub async fn submit_transfer(
    client: &ApiClient,
    recipient_id: &str,
    recipient_name: &str,
    amount_input: &str,
    description: &str,
    balance: Option<f64>,
) -> Result<TransferSummary, SubmitError> {
    let request = build_transfer_request(recipient_id, amount_input, description, balance)?;
    let resp = client.transfer(&request).await?;
    let summary = TransferSummary::from_response(&resp, &request, recipient_name);
    client_log!(
        "[safepay] transfer ok amount={} new_balance={:?}",
        summary.amount,
        summary.new_balance
    );
    Ok(summary)
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransferFailure {
    pub message: String,
    pub redirect_to_signin: bool,
}

impl TransferFailure {
    fn inline(message: impl Into<String>) -> Self {
        Self { message: message.into(), redirect_to_signin: false }
    }
}

/// Map a failed transfer to screen text. `None` for 403, which the client interceptor
/// has already turned into a forced logout.
pub fn transfer_failure(err: &SubmitError) -> Option<TransferFailure> {
    let api = match err {
        SubmitError::Invalid(e) => return Some(TransferFailure::inline(e.message.clone())),
        SubmitError::Api(api) => api,
    };
    let failure = match api {
        ApiError::SessionExpired => return None,
        ApiError::Http { status: 400, message } => TransferFailure::inline(
            message.clone().unwrap_or_else(|| "Invalid transfer request".to_string()),
        ),
        ApiError::Http { status: 401, .. } => TransferFailure {
            message: "Your session has expired. Please sign in again.".to_string(),
            redirect_to_signin: true,
        },
        ApiError::Http { status: 404, .. } => TransferFailure::inline("Recipient not found"),
        ApiError::Http { status: 407, .. } => TransferFailure::inline("Insufficient balance for this transfer"),
        _ => TransferFailure::inline("Transfer failed. Please try again."),
    };
    Some(failure)
}
