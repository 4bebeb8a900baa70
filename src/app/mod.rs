mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::errors;
use crate::errors::UserError;
use crate::services::apps_script::AppsScript;
use crate::services::apps_script::AppsScriptConfig;
use crate::services::auth::AdminGate;
use crate::services::auth::StaticPassphrase;
use crate::services::clipboard::Clipboard;
use crate::services::clipboard::SystemClipboard;
use crate::services::namegen::LocalNameSuggester;
use crate::services::namegen::NameSuggester;
use crate::services::store::RegistrationStore;

pub struct Configuration {
    pub endpoint: String,
    pub admin_passphrase: String,
    pub export_dir: PathBuf,
}

pub struct App {
    export_dir: PathBuf,
    store: Arc<dyn RegistrationStore>,
    clipboard: Arc<dyn Clipboard>,
    gate: Arc<dyn AdminGate>,
    suggester: Arc<dyn NameSuggester>,
}

impl App {
    pub fn new(config: Configuration) -> Result<Self> {
        let store = AppsScript::new(AppsScriptConfig {
            endpoint: config.endpoint,
        })?;

        Ok(App {
            export_dir: config.export_dir,
            store: Arc::new(store),
            clipboard: Arc::new(SystemClipboard),
            gate: Arc::new(StaticPassphrase::new(config.admin_passphrase)),
            suggester: Arc::new(LocalNameSuggester),
        })
    }

    /// Wires the app onto arbitrary service implementations; the tests run
    /// the command flows against fakes through this.
    pub fn with_services(
        export_dir: PathBuf,
        store: Arc<dyn RegistrationStore>,
        clipboard: Arc<dyn Clipboard>,
        gate: Arc<dyn AdminGate>,
        suggester: Arc<dyn NameSuggester>,
    ) -> Self {
        App {
            export_dir,
            store,
            clipboard,
            gate,
            suggester,
        }
    }

    fn authorize(&self, passphrase: &str) -> errors::Result<()> {
        if self.gate.verify(passphrase) {
            Ok(())
        } else {
            Err(UserError::AccessDenied.into())
        }
    }
}
