use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::StoreError;
use crate::model::{Payment, PaymentId, PaymentMethod, PaymentStatus};

/// Fields written when a pending payment is collected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentUpdate {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
}

impl PaymentUpdate {
    pub fn complete(amount: Decimal, payment_method: PaymentMethod, paid_at: DateTime<Utc>) -> Self {
        PaymentUpdate {
            amount,
            payment_method,
            status: PaymentStatus::Completed,
            paid_at,
        }
    }
}

/// Remote owner of payment records.
///
/// Futures are not `Send`: the browser runtime is single threaded.
#[async_trait(?Send)]
pub trait PaymentStore {
    /// All payments joined with patient and profile, newest first.
    async fn list_payments(&self) -> Result<Vec<Payment>, StoreError>;

    async fn update_payment(&self, id: &PaymentId, update: &PaymentUpdate) -> Result<(), StoreError>;
}
