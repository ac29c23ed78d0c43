use crate::cmd::{DomainArgs, Session};
use crate::config::{normalize_setting, Config, ConfigManager};
use crate::error::{CampuslinkError, Result};
use clap::Args;
use colored::Colorize;

#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Setting to change: microsoft_domain, google_domain, sharepoint_prefix, default_service
    pub key: String,

    /// New value
    pub value: String,
}

/// Apply one `key = value` change, returning a description of it
pub fn apply_change(config: &mut Config, key: &str, value: &str) -> Result<String> {
    let (label, field) = match key.replace('-', "_").to_lowercase().as_str() {
        "microsoft_domain" | "ms_domain" => ("Microsoft domain", &mut config.microsoft_domain),
        "google_domain" => ("Google domain", &mut config.google_domain),
        "sharepoint_prefix" => ("SharePoint prefix", &mut config.sharepoint_prefix),
        "default_service" => {
            let value = value.trim();
            let catalog = config.catalog()?;
            let found = catalog
                .find(value)
                .ok_or_else(|| CampuslinkError::ServiceNotFound(value.to_string()))?;
            let change = format!(
                "Default service: {} → {}",
                config.default_service, found.key
            );
            config.default_service = found.key.clone();
            return Ok(change);
        }
        other => {
            return Err(CampuslinkError::ConfigError(format!(
                "Unknown setting '{}'. Valid settings: microsoft_domain, google_domain, sharepoint_prefix, default_service",
                other
            )));
        }
    };

    let value = normalize_setting(label, value)?;
    let change = format!("{}: {} → {}", label, field, value);
    *field = value;
    Ok(change)
}

pub fn show(domains: &DomainArgs) -> Result<()> {
    let manager = ConfigManager::new()?;
    let session = Session::from_config(manager.load_config()?, domains)?;

    println!("\n{}", "campuslink Configuration:".bold());
    println!("{}", "─".repeat(60));
    println!("  Config file:        {}", manager.config_file().display());
    println!("  Microsoft domain:   {}", session.domains.microsoft);
    println!("  Google domain:      {}", session.domains.google);
    println!("  SharePoint prefix:  {}", session.domains.sharepoint_prefix);
    println!(
        "  Default service:    {}",
        session.config.default_service(&session.catalog).key
    );

    if !session.config.services.is_empty() {
        println!("\n{}", "Custom Services:".bold());
        for service in &session.config.services {
            println!(
                "  {} {} ({}) {}",
                "•".cyan(),
                service.key.bold(),
                service.provider.badge(),
                service.url.dimmed()
            );
        }
    }

    Ok(())
}

pub fn path() -> Result<()> {
    let manager = ConfigManager::new()?;
    println!("{}", manager.config_file().display());
    Ok(())
}

pub fn set(args: ConfigSetArgs) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_config()?;

    let change = apply_change(&mut config, &args.key, &args.value)?;
    manager.save_config(&config)?;

    println!("{} {}", "✓".green(), change);
    println!(
        "\n{} Saved to {}",
        "→".cyan(),
        manager.config_file().display()
    );

    Ok(())
}

pub fn reset() -> Result<()> {
    let manager = ConfigManager::new()?;

    if manager.reset_config()? {
        println!("{} Configuration reset to defaults", "✓".green());
    } else {
        println!("{} Already using defaults", "!".yellow());
    }

    Ok(())
}
