use crate::app::App;
use crate::errors::Result;
use crate::models;

impl App {
    #[tracing::instrument(skip_all)]
    pub async fn list(&self, passphrase: &str, search: Option<&str>) -> Result<()> {
        self.authorize(passphrase)?;

        let records = self.store.list().await;
        if records.is_empty() {
            println!("Database empty.");
            return Ok(());
        }

        let filtered = models::filter_by_term(&records, search.unwrap_or(""));

        println!(
            "{:<24} {:<18} {:<20} {:<14} {:<10} {:<14} {}",
            "TEAM", "GAME", "LEADER", "PHONE", "PAYMENT", "TRX ID", "TIMESTAMP"
        );
        for r in &filtered {
            println!(
                "{:<24} {:<18} {:<20} {:<14} {:<10} {:<14} {}",
                r.team_name,
                r.game_name,
                r.leader_name,
                r.leader_phone,
                r.payment_method,
                r.transaction_id,
                r.timestamp
            );
        }
        println!();
        println!("{} of {} entries", filtered.len(), records.len());

        Ok(())
    }
}
