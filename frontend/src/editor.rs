use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::model::{Payment, PaymentId, PaymentMethod};
use crate::store::PaymentUpdate;

/// Values bound to the payment dialog inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentForm {
    pub amount: String,
    pub method: PaymentMethod,
}

impl PaymentForm {
    pub fn prefill(payment: &Payment) -> Self {
        let amount = match payment.amount {
            Some(amount) if amount > Decimal::ZERO => amount.normalize().to_string(),
            _ => String::new(),
        };
        PaymentForm {
            amount,
            method: payment.payment_method.unwrap_or_default(),
        }
    }

    pub fn parse_amount(&self) -> Result<Decimal, ValidationError> {
        let raw = self.amount.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let amount = Decimal::from_str(raw)
            .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(amount)
    }
}

/// A validated completion ready to send to the store.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub id: PaymentId,
    pub update: PaymentUpdate,
}

/// Modal editor that completes exactly one pending payment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentEditor {
    selected: Option<Payment>,
    form: PaymentForm,
    submitting: bool,
}

impl PaymentEditor {
    /// Stages `payment` in the form. Refused while a submission is in flight.
    pub fn open(&mut self, payment: Payment) -> bool {
        if self.submitting {
            return false;
        }
        self.form = PaymentForm::prefill(&payment);
        self.selected = Some(payment);
        true
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&Payment> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> &PaymentForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Inputs are locked while a submission is in flight.
    pub fn set_amount(&mut self, amount: String) {
        if !self.submitting {
            self.form.amount = amount;
        }
    }

    pub fn set_method(&mut self, method: PaymentMethod) {
        if !self.submitting {
            self.form.method = method;
        }
    }

    /// Closes without touching any payment. Ignored while submitting.
    pub fn cancel(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        *self = PaymentEditor::default();
        true
    }

    /// Validates the form and marks the editor as submitting.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<Submission, ValidationError> {
        if self.submitting {
            return Err(ValidationError::SubmissionInFlight);
        }
        let payment = self
            .selected
            .as_ref()
            .ok_or(ValidationError::NoPaymentSelected)?;
        if !payment.is_pending() {
            return Err(ValidationError::NotPending(payment.status));
        }
        let amount = self.form.parse_amount()?;

        let submission = Submission {
            id: payment.id.clone(),
            update: PaymentUpdate::complete(amount, self.form.method, now),
        };
        self.submitting = true;
        Ok(submission)
    }

    /// On success the editor closes and resets; on failure it stays open with the entered values.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            *self = PaymentEditor::default();
        } else {
            self.submitting = false;
        }
    }
}
