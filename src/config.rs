use std::fs::File;
use std::path::Path;

use anyhow::Result;
use serde_derive::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Configuration {
    pub store: StoreConfiguration,
    pub admin: AdminConfiguration,

    #[serde(default)]
    pub export: ExportConfiguration,
}

impl Configuration {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Configuration> {
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }
}

impl From<Configuration> for regdesk::Configuration {
    fn from(config: Configuration) -> Self {
        Self {
            endpoint: config.store.endpoint,
            admin_passphrase: config.admin.passphrase,
            export_dir: config.export.out_dir.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StoreConfiguration {
    pub endpoint: String,
}

#[derive(Debug, Deserialize)]
pub struct AdminConfiguration {
    pub passphrase: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportConfiguration {
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

impl Default for ExportConfiguration {
    fn default() -> Self {
        ExportConfiguration {
            out_dir: default_out_dir(),
        }
    }
}

fn default_out_dir() -> String {
    ".".to_string()
}
