use crate::app::App;
use crate::errors::Result;
use crate::errors::UserError;
use crate::export;

impl App {
    /// Puts the tab-delimited form of the whole collection on the clipboard
    /// for pasting into spreadsheet software.
    #[tracing::instrument(skip_all)]
    pub async fn copy(&self, passphrase: &str) -> Result<()> {
        self.authorize(passphrase)?;

        let records = self.store.list().await;
        let tsv = export::to_tsv(&records).ok_or(UserError::NothingToCopy)?;

        if !self.clipboard.write_text(&tsv) {
            return Err(UserError::ClipboardError.into());
        }

        println!("Copied {} registrations to the clipboard.", records.len());
        Ok(())
    }
}
