use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use reqwest::ClientBuilder;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::models::Registration;
use crate::services::store::RegistrationStore;
use crate::services::store::StoreResult;

/// Client for the Apps Script collection endpoint: a single URL taking
/// `POST {action: create|delete|clear, ...}` writes and a `GET` returning the
/// whole collection.
///
/// The backend does not return a usable body for writes, so the only
/// acknowledgment a mutating call can give is "the transport did not fail".
/// Callers re-fetch with `list` to observe the effect of a mutation.
pub struct AppsScript {
    config: AppsScriptConfig,
    client: Client,
}

pub struct AppsScriptConfig {
    pub endpoint: String,
}

impl AppsScript {
    pub fn new(config: AppsScriptConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .user_agent("regdesk registration desk")
            .build()?;

        Ok(Self { config, client })
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Registration>> {
        // The t parameter busts the script host's response cache.
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("t", Utc::now().timestamp_millis().to_string())])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<ListResponse>().await?.into_records())
    }
}

#[async_trait]
impl RegistrationStore for AppsScript {
    #[tracing::instrument(skip_all, fields(id = %record.id, team = %record.team_name))]
    async fn create(&self, record: &Registration) -> StoreResult<()> {
        tracing::info!("create registration");

        self.client
            .post(&self.config.endpoint)
            .json(&CreateRequest {
                action: "create",
                record,
            })
            .send()
            .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all)]
    async fn list(&self) -> Vec<Registration> {
        match self.fetch_all().await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(?err, "could not fetch registrations, proceeding with none");
                Vec::new()
            }
        }
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    async fn delete(&self, id: &str) -> StoreResult<()> {
        tracing::info!("delete registration");

        self.client
            .post(&self.config.endpoint)
            .json(&DeleteRequest {
                action: "delete",
                id,
            })
            .send()
            .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all)]
    async fn clear(&self) -> StoreResult<()> {
        tracing::info!("clear all registrations");

        self.client
            .post(&self.config.endpoint)
            .json(&ClearRequest { action: "clear" })
            .send()
            .await?;

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    action: &'static str,
    #[serde(flatten)]
    record: &'a Registration,
}

#[derive(Debug, Serialize)]
struct DeleteRequest<'a> {
    action: &'static str,
    id: &'a str,
}

#[derive(Debug, Serialize)]
struct ClearRequest {
    action: &'static str,
}

// The endpoint answers either with a bare array or with the array wrapped
// under "data".
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListResponse {
    Bare(Vec<Registration>),
    Wrapped { data: Vec<Registration> },
}

impl ListResponse {
    fn into_records(self) -> Vec<Registration> {
        match self {
            ListResponse::Bare(records) => records,
            ListResponse::Wrapped { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_response_shapes_normalize_to_the_same_records() {
        let bare = r#"[{"id":"a","teamName":"Phantom"}]"#;
        let wrapped = r#"{"data":[{"id":"a","teamName":"Phantom"}]}"#;

        let from_bare = serde_json::from_str::<ListResponse>(bare)
            .unwrap()
            .into_records();
        let from_wrapped = serde_json::from_str::<ListResponse>(wrapped)
            .unwrap()
            .into_records();

        assert_eq!(from_bare, from_wrapped);
        assert_eq!(from_bare[0].team_name, "Phantom");
    }

    #[test]
    fn unrelated_shapes_are_rejected() {
        assert!(serde_json::from_str::<ListResponse>(r#"{"rows": []}"#).is_err());
        assert!(serde_json::from_str::<ListResponse>("42").is_err());
    }

    #[test]
    fn create_request_flattens_the_record_next_to_the_action() {
        let record = Registration {
            id: "a".to_string(),
            team_name: "Phantom".to_string(),
            ..Registration::default()
        };
        let value = serde_json::to_value(CreateRequest {
            action: "create",
            record: &record,
        })
        .unwrap();

        assert_eq!(value["action"], "create");
        assert_eq!(value["id"], "a");
        assert_eq!(value["teamName"], "Phantom");
    }
}
