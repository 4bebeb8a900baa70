use crate::app::App;
use crate::errors::Result;
use crate::errors::UserError;

impl App {
    /// Deletes one registration, then re-fetches: the fire-and-forget write
    /// gives no acknowledgment beyond the transport, so the reload is the
    /// only way to observe the store's state.
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn delete(&self, passphrase: &str, id: &str) -> Result<()> {
        self.authorize(passphrase)?;

        self.store.delete(id).await.map_err(|err| {
            tracing::error!(?err, "delete request failed");
            UserError::DeleteFailed
        })?;

        let remaining = self.store.list().await;
        println!("Deleted {}. {} registrations remain.", id, remaining.len());
        Ok(())
    }
}
