use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StoreError;

/// Row identifier as handed out by the store. Accepts text (uuid) or integer keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    pub fn new(id: impl Into<String>) -> Self {
        PaymentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PaymentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => PaymentId(text),
            RawId::Number(number) => PaymentId(number.to_string()),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Cancelled,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Pending,
        PaymentStatus::Completed,
        PaymentStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "cancelled" => Ok(PaymentStatus::Cancelled),
            other => Err(format!("unknown payment status {other:?}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Debit,
    Credit,
    Transfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Debit,
        PaymentMethod::Credit,
        PaymentMethod::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Debit => "debit",
            PaymentMethod::Credit => "credit",
            PaymentMethod::Transfer => "transfer",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "debit" => Ok(PaymentMethod::Debit),
            "credit" => Ok(PaymentMethod::Credit),
            "transfer" => Ok(PaymentMethod::Transfer),
            other => Err(format!("unknown payment method {other:?}")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default, rename = "profiles")]
    pub profile: Option<Profile>,
}

/// A payment row joined with its patient and the patient's profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "patients")]
    pub patient: Option<Patient>,
}

impl Payment {
    /// Decodes the joined list returned by the store, failing on the first malformed row.
    pub fn decode_list(body: &str) -> Result<Vec<Payment>, StoreError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Display name of the related patient, if one resolves to a non-blank string.
    pub fn patient_name(&self) -> Option<&str> {
        self.patient
            .as_ref()
            .and_then(|patient| patient.profile.as_ref())
            .and_then(|profile| profile.full_name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    /// Amount with an unset value counted as zero.
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }

    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::TimeZone;

    use super::*;

    pub fn payment(id: i64, status: PaymentStatus, amount: i64, name: Option<&str>) -> Payment {
        Payment {
            id: PaymentId::new(id.to_string()),
            amount: Some(Decimal::from(amount)),
            payment_method: None,
            status,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            paid_at: None,
            patient: name.map(|name| Patient {
                profile: Some(Profile {
                    full_name: Some(name.to_string()),
                }),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_joined_rows() {
        let body = r#"[
            {
                "id": "8f1d7f4e-0c52-4c0b-9a57-1b2d0e3c4a5b",
                "amount": 150000,
                "payment_method": "cash",
                "status": "completed",
                "created_at": "2024-05-01T08:30:00.123456+00:00",
                "paid_at": "2024-05-01T09:00:00+00:00",
                "patient_id": "p-1",
                "patients": { "id": "p-1", "profiles": { "full_name": "Budi" } }
            },
            {
                "id": 7,
                "amount": null,
                "payment_method": null,
                "status": "pending",
                "created_at": "2024-05-02T01:00:00+07:00",
                "patients": null
            }
        ]"#;

        let payments = Payment::decode_list(body).unwrap();
        assert_eq!(payments.len(), 2);

        let completed = &payments[0];
        assert_eq!(completed.amount, Some(Decimal::from(150000)));
        assert_eq!(completed.payment_method, Some(PaymentMethod::Cash));
        assert_eq!(completed.patient_name(), Some("Budi"));
        assert!(completed.paid_at.is_some());

        let pending = &payments[1];
        assert_eq!(pending.id, PaymentId::new("7"));
        assert_eq!(pending.amount_or_zero(), Decimal::ZERO);
        assert_eq!(pending.patient_name(), None);
        assert!(pending.is_pending());
    }

    #[test]
    fn accepts_numeric_strings_for_amount() {
        let body = r#"[{"id":1,"amount":"2500.50","status":"pending","created_at":"2024-05-01T00:00:00Z"}]"#;
        let payments = Payment::decode_list(body).unwrap();
        assert_eq!(payments[0].amount, Some(Decimal::new(250050, 2)));
    }

    #[test]
    fn rejects_unknown_status() {
        let body = r#"[{"id":1,"status":"refunded","created_at":"2024-05-01T00:00:00Z"}]"#;
        assert!(matches!(
            Payment::decode_list(body),
            Err(StoreError::Decode(_))
        ));
    }

    #[test]
    fn rejects_non_list_body() {
        assert!(Payment::decode_list(r#"{"message":"oops"}"#).is_err());
    }

    #[test]
    fn blank_patient_name_counts_as_missing() {
        let mut payment = fixtures::payment(1, PaymentStatus::Pending, 0, Some("   "));
        assert_eq!(payment.patient_name(), None);
        payment.patient = Some(Patient { profile: None });
        assert_eq!(payment.patient_name(), None);
    }

    #[test]
    fn status_and_method_round_trip_their_wire_names() {
        for status in PaymentStatus::ALL {
            assert_eq!(status.as_str().parse::<PaymentStatus>(), Ok(status));
        }
        for method in PaymentMethod::ALL {
            assert_eq!(method.as_str().parse::<PaymentMethod>(), Ok(method));
        }
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }
}
