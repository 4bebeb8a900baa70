use crate::app::App;
use crate::errors::Result;
use crate::errors::UserError;

impl App {
    /// Purges every registration. `confirmed` stands in for the confirmation
    /// dialog the web admin had; without it nothing is sent.
    #[tracing::instrument(skip_all)]
    pub async fn clear(&self, passphrase: &str, confirmed: bool) -> Result<()> {
        self.authorize(passphrase)?;

        if !confirmed {
            return Err(UserError::ClearNotConfirmed.into());
        }

        self.store.clear().await.map_err(|err| {
            tracing::error!(?err, "clear request failed");
            UserError::PurgeFailed
        })?;

        let remaining = self.store.list().await;
        println!("Database purged. {} registrations remain.", remaining.len());
        Ok(())
    }
}
