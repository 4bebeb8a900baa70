use std::path::Path;

use crate::app::App;
use crate::errors::Result;
use crate::export;
use crate::models;
use crate::models::Registration;

impl App {
    /// Writes the CSV export into `out_dir` (falling back to the configured
    /// directory). An empty collection writes nothing and is not an error.
    #[tracing::instrument(skip_all)]
    pub async fn export(
        &self,
        passphrase: &str,
        search: Option<&str>,
        out_dir: Option<&Path>,
    ) -> Result<()> {
        self.authorize(passphrase)?;

        let records = self.store.list().await;
        let selected: Vec<Registration> = models::filter_by_term(&records, search.unwrap_or(""))
            .into_iter()
            .cloned()
            .collect();

        let dir = out_dir.unwrap_or(&self.export_dir);
        match export::write_csv_file(&selected, dir)? {
            Some(path) => println!("Exported {} registrations to {}", selected.len(), path.display()),
            None => println!("No registrations to export."),
        }

        Ok(())
    }
}
