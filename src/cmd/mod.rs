pub mod config;
pub mod links;
pub mod open;
pub mod services;

use crate::config::{normalize_setting, Config, ConfigManager};
use crate::error::Result;
use crate::links::{Catalog, Domains};
use clap::Args;

/// Per-invocation overrides for the institution settings in config.toml
#[derive(Args, Debug, Default, Clone)]
pub struct DomainArgs {
    /// Email domain for Microsoft services (e.g. live.yuntech.edu.tw)
    #[arg(long, global = true)]
    pub ms_domain: Option<String>,

    /// Email domain for Google services (e.g. gemail.yuntech.edu.tw)
    #[arg(long, global = true)]
    pub google_domain: Option<String>,

    /// SharePoint tenant prefix used for OneDrive links
    #[arg(long, global = true)]
    pub sharepoint_prefix: Option<String>,
}

impl DomainArgs {
    pub fn apply(&self, config: &Config) -> Result<Domains> {
        let mut domains = config.domains();

        if let Some(domain) = &self.ms_domain {
            domains.microsoft = normalize_setting("--ms-domain", domain)?;
        }
        if let Some(domain) = &self.google_domain {
            domains.google = normalize_setting("--google-domain", domain)?;
        }
        if let Some(prefix) = &self.sharepoint_prefix {
            domains.sharepoint_prefix = normalize_setting("--sharepoint-prefix", prefix)?;
        }

        Ok(domains)
    }
}

/// Everything a command needs to resolve links
pub struct Session {
    pub config: Config,
    pub catalog: Catalog,
    pub domains: Domains,
}

impl Session {
    pub fn load(overrides: &DomainArgs) -> Result<Self> {
        let config = ConfigManager::new()?.load_config()?;
        Self::from_config(config, overrides)
    }

    pub fn from_config(config: Config, overrides: &DomainArgs) -> Result<Self> {
        let catalog = config.catalog()?;
        let domains = overrides.apply(&config)?;
        Ok(Self {
            config,
            catalog,
            domains,
        })
    }
}
