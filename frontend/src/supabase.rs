use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};

use crate::config::{load_access_token, BackendConfig};
use crate::error::StoreError;
use crate::model::{Payment, PaymentId};
use crate::store::{PaymentStore, PaymentUpdate};

const PAYMENTS_TABLE: &str = "payments";
const PAYMENTS_SELECT: &str = "*,patients(*,profiles(full_name))";

/// Payment store backed by the managed backend's REST interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupabaseStore {
    config: BackendConfig,
}

impl SupabaseStore {
    pub fn new(config: BackendConfig) -> Self {
        SupabaseStore { config }
    }

    pub fn list_url(&self) -> String {
        format!(
            "{}/{}?select={}&order=created_at.desc",
            self.config.rest_base(),
            PAYMENTS_TABLE,
            PAYMENTS_SELECT
        )
    }

    pub fn update_url(&self, id: &PaymentId) -> String {
        format!(
            "{}/{}?id=eq.{}",
            self.config.rest_base(),
            PAYMENTS_TABLE,
            id
        )
    }

    // the signed-in user's token wins over the anonymous key
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let bearer = load_access_token().unwrap_or_else(|| self.config.anon_key.clone());
        builder
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", bearer))
    }
}

async fn read_body(resp: Response) -> Result<String, StoreError> {
    let status = resp.status();
    let ok = resp.ok();
    let body = resp
        .text()
        .await
        .map_err(|e| StoreError::Network(e.to_string()))?;
    if !ok {
        return Err(StoreError::Status { status, body });
    }
    Ok(body)
}

#[async_trait(?Send)]
impl PaymentStore for SupabaseStore {
    async fn list_payments(&self) -> Result<Vec<Payment>, StoreError> {
        let url = self.list_url();
        tracing::debug!(%url, "requesting payments");

        let resp = self
            .authorize(Request::get(&url))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let body = read_body(resp).await?;
        Payment::decode_list(&body)
    }

    async fn update_payment(&self, id: &PaymentId, update: &PaymentUpdate) -> Result<(), StoreError> {
        let url = self.update_url(id);
        tracing::debug!(%url, status = %update.status, "updating payment");

        let request = self
            .authorize(Request::patch(&url))
            .header("Prefer", "return=minimal")
            .json(update)
            .map_err(|e| StoreError::Encode(e.to_string()))?;

        let resp = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        read_body(resp).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SupabaseStore {
        SupabaseStore::new(BackendConfig {
            url: "https://clinic.supabase.co/".to_string(),
            anon_key: "anon".to_string(),
            log_level: "info".to_string(),
        })
    }

    #[test]
    fn list_url_joins_patient_profile_newest_first() {
        assert_eq!(
            store().list_url(),
            "https://clinic.supabase.co/rest/v1/payments?select=*,patients(*,profiles(full_name))&order=created_at.desc"
        );
    }

    #[test]
    fn update_url_targets_one_row() {
        assert_eq!(
            store().update_url(&PaymentId::new("8f1d")),
            "https://clinic.supabase.co/rest/v1/payments?id=eq.8f1d"
        );
    }
}
