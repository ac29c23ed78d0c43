use crate::error::{CampuslinkError, Result};
use crate::links::{
    Catalog, DEFAULT_GOOGLE_DOMAIN, DEFAULT_MICROSOFT_DOMAIN, DEFAULT_SHAREPOINT_PREFIX, Domains,
    Provider, Service, Target,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_microsoft_domain")]
    pub microsoft_domain: String,

    #[serde(default = "default_google_domain")]
    pub google_domain: String,

    #[serde(default = "default_sharepoint_prefix")]
    pub sharepoint_prefix: String,

    #[serde(default = "default_service")]
    pub default_service: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceConfig>,
}

fn default_microsoft_domain() -> String {
    DEFAULT_MICROSOFT_DOMAIN.to_string()
}

fn default_google_domain() -> String {
    DEFAULT_GOOGLE_DOMAIN.to_string()
}

fn default_sharepoint_prefix() -> String {
    DEFAULT_SHAREPOINT_PREFIX.to_string()
}

fn default_service() -> String {
    "outlook".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            microsoft_domain: default_microsoft_domain(),
            google_domain: default_google_domain(),
            sharepoint_prefix: default_sharepoint_prefix(),
            default_service: default_service(),
            services: Vec::new(),
        }
    }
}

/// Extra service declared in config.toml
///
/// ```toml
/// [[services]]
/// key = "forms"
/// name = "Forms"
/// provider = "microsoft"
/// url = "https://forms.office.com/"
/// ```
///
/// `url = "onedrive"` points a Microsoft service at the personal OneDrive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub key: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub provider: Provider,
    pub url: String,
}

impl ServiceConfig {
    pub fn to_service(&self) -> Result<Service> {
        let key = self.key.trim();
        if key.is_empty() {
            return Err(CampuslinkError::InvalidService(
                "service key must not be empty".into(),
            ));
        }

        let url = self.url.trim();
        let target = if url.eq_ignore_ascii_case("onedrive") {
            if self.provider != Provider::Microsoft {
                return Err(CampuslinkError::InvalidService(format!(
                    "'{}': only Microsoft services can target OneDrive",
                    key
                )));
            }
            Target::OneDrive
        } else if url.starts_with("https://") || url.starts_with("http://") {
            Target::Url(url.to_string())
        } else {
            return Err(CampuslinkError::InvalidService(format!(
                "'{}': url must start with http:// or https:// (got '{}')",
                key, url
            )));
        };

        Ok(Service {
            key: key.to_lowercase(),
            name: if self.name.trim().is_empty() {
                key.to_string()
            } else {
                self.name.clone()
            },
            description: self.description.clone(),
            provider: self.provider,
            target,
        })
    }
}

/// Trim a domain or prefix setting and drop a leading '@' (domains are often
/// pasted as "@live.yuntech.edu.tw"). Empty values are rejected.
pub fn normalize_setting(label: &str, value: &str) -> Result<String> {
    let value = value.trim().trim_start_matches('@').trim();
    if value.is_empty() {
        return Err(CampuslinkError::ConfigError(format!(
            "{} must not be empty",
            label
        )));
    }
    Ok(value.to_string())
}

impl Config {
    /// Normalize the domain settings in place
    pub fn normalize(&mut self) -> Result<()> {
        self.microsoft_domain = normalize_setting("Microsoft domain", &self.microsoft_domain)?;
        self.google_domain = normalize_setting("Google domain", &self.google_domain)?;
        self.sharepoint_prefix = normalize_setting("SharePoint prefix", &self.sharepoint_prefix)?;
        Ok(())
    }

    pub fn domains(&self) -> Domains {
        Domains {
            microsoft: self.microsoft_domain.clone(),
            google: self.google_domain.clone(),
            sharepoint_prefix: self.sharepoint_prefix.clone(),
        }
    }

    /// Built-in services merged with the ones declared in the file
    pub fn catalog(&self) -> Result<Catalog> {
        let custom = self
            .services
            .iter()
            .map(ServiceConfig::to_service)
            .collect::<Result<Vec<_>>>()?;
        Ok(Catalog::with_custom(custom))
    }

    /// The configured default service, falling back to Outlook
    pub fn default_service<'a>(&self, catalog: &'a Catalog) -> &'a Service {
        match catalog.find(&self.default_service) {
            Some(service) => service,
            None => {
                tracing::debug!(
                    "Default service '{}' not in catalog, using built-in default",
                    self.default_service
                );
                catalog.default_service()
            }
        }
    }
}

/// Configuration manager
#[derive(Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("edu", "campuslink", "campuslink").ok_or_else(|| {
            CampuslinkError::ConfigError("Failed to determine config directory".into())
        })?;

        Ok(Self::with_dir(project_dirs.config_dir().to_path_buf()))
    }

    /// Use an explicit directory instead of the platform default
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    #[cfg(test)]
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Load main config, defaults when the file does not exist yet
    pub fn load_config(&self) -> Result<Config> {
        let config_path = self.config_file();

        if !config_path.exists() {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        tracing::debug!("Loading config from {:?}", config_path);
        let contents = fs::read_to_string(config_path)?;
        let mut config: Config = toml::from_str(&contents)?;
        config.normalize()?;
        Ok(config)
    }

    /// Save main config
    pub fn save_config(&self, config: &Config) -> Result<()> {
        // Catch bad services before they reach disk
        config.catalog()?;

        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)?;
        }

        let contents = toml::to_string_pretty(config).map_err(|e| {
            CampuslinkError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;
        fs::write(self.config_file(), contents)?;
        Ok(())
    }

    /// Delete the config file so defaults apply again
    pub fn reset_config(&self) -> Result<bool> {
        let config_path = self.config_file();

        if config_path.exists() {
            fs::remove_file(config_path)?;
            return Ok(true);
        }

        Ok(false)
    }
}
