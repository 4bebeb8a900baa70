use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::Registration;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The remote registration collection.
///
/// Mutating calls return an explicit acknowledgment; how much that
/// acknowledgment actually covers is up to the implementation (the Apps
/// Script backend can only ack at the transport level). Callers observe the
/// effect of any mutation by re-fetching with `list`.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn create(&self, record: &Registration) -> StoreResult<()>;

    /// Best effort: transport or shape failures degrade to an empty
    /// collection so a dead store never blocks the submission flow.
    async fn list(&self) -> Vec<Registration>;

    async fn delete(&self, id: &str) -> StoreResult<()>;

    async fn clear(&self) -> StoreResult<()>;
}

/// In-memory store for tests and offline runs.
#[derive(Debug, Default)]
pub struct FakeRegistrationStore {
    records: Mutex<Vec<Registration>>,
}

impl FakeRegistrationStore {
    pub fn with_records(records: Vec<Registration>) -> Self {
        FakeRegistrationStore {
            records: Mutex::new(records),
        }
    }
}

#[async_trait]
impl RegistrationStore for FakeRegistrationStore {
    async fn create(&self, record: &Registration) -> StoreResult<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn list(&self) -> Vec<Registration> {
        self.records.lock().unwrap().clone()
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.records.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }

    async fn clear(&self) -> StoreResult<()> {
        self.records.lock().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubmissionBuilder;

    fn record(team: &str) -> Registration {
        Registration::from_submission(
            SubmissionBuilder::default().team_name(team).build().unwrap(),
        )
    }

    #[tokio::test]
    async fn fake_store_supports_the_full_lifecycle() {
        let store = FakeRegistrationStore::default();
        assert!(store.list().await.is_empty());

        let first = record("Phantom");
        let second = record("Night Owls");
        store.create(&first).await.unwrap();
        store.create(&second).await.unwrap();
        assert_eq!(store.list().await.len(), 2);

        store.delete(&first.id).await.unwrap();
        let remaining = store.list().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].team_name, "Night Owls");

        store.clear().await.unwrap();
        assert!(store.list().await.is_empty());
    }
}
