use thiserror::Error;

use crate::model::PaymentStatus;

/// Failures talking to the payment store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("store responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected payment shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Local preconditions that keep a submission away from the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("amount is required")]
    MissingAmount,

    #[error("amount {0:?} is not a number")]
    InvalidAmount(String),

    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    #[error("no payment selected")]
    NoPaymentSelected,

    #[error("payment is {0}, only pending payments can be completed")]
    NotPending(PaymentStatus),

    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingAmount
            | ValidationError::InvalidAmount(_)
            | ValidationError::NonPositiveAmount => "Jumlah pembayaran harus lebih dari Rp 0",
            ValidationError::NoPaymentSelected => "Pilih pembayaran yang akan diproses",
            ValidationError::NotPending(_) => "Pembayaran ini tidak lagi menunggu proses",
            ValidationError::SubmissionInFlight => "Pembayaran sedang diproses",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("backend url is empty")]
    MissingUrl,

    #[error("backend url {0:?} must start with http:// or https://")]
    InvalidUrl(String),

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}
