use crate::cmd::{DomainArgs, Session};
use crate::error::Result;
use crate::links::{Catalog, Provider};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ServicesArgs {
    /// Output format: table, json
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct ServiceRow<'a> {
    key: &'a str,
    name: &'a str,
    description: &'a str,
    provider: Provider,
    target: &'a str,
}

fn rows(catalog: &Catalog) -> Vec<ServiceRow<'_>> {
    catalog
        .iter()
        .map(|s| ServiceRow {
            key: &s.key,
            name: &s.name,
            description: &s.description,
            provider: s.provider,
            target: s.target_label(),
        })
        .collect()
}

pub fn list(args: ServicesArgs, domains: &DomainArgs) -> Result<()> {
    let session = Session::load(domains)?;
    let default_key = session.config.default_service(&session.catalog).key.clone();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&rows(&session.catalog))?);
        return Ok(());
    }

    println!("\n{}", "Available Services:".bold());
    println!("{}", "─".repeat(60));

    for service in session.catalog.iter() {
        let marker = if service.key == default_key {
            "●".green()
        } else {
            "○".dimmed()
        };
        let badge = match service.provider {
            Provider::Microsoft => format!("[{}]", service.provider.badge()).blue(),
            Provider::Google => format!("[{}]", service.provider.badge()).red(),
        };

        println!(
            "{} {} {:<16} {} {}",
            marker,
            format!("{:<12}", service.key).bold(),
            service.name,
            badge,
            service.description.dimmed()
        );
    }

    println!("\n{}", "─".repeat(60));
    println!("{} {} service(s) total", "→".cyan(), session.catalog.len());
    println!("{} Default: {}", "→".cyan(), default_key.bold());
    println!(
        "  Microsoft accounts use @{}, Google accounts use @{}",
        session.domains.microsoft, session.domains.google
    );

    Ok(())
}
