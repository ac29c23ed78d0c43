use crate::cmd::{DomainArgs, Session};
use crate::error::Result;
use crate::links::{self, Provider, Redirect, Service};
use clap::Args;
use colored::Colorize;

#[derive(Args, Debug)]
pub struct LinksArgs {
    /// Student or staff ID (e.g. B11123021)
    #[arg(short, long)]
    pub id: String,

    /// Only show services from one provider: microsoft, google
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Output format: table, json
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Resolve every catalog entry (optionally filtered by provider)
pub fn collect(id: &str, provider: Option<Provider>, session: &Session) -> Result<Vec<Redirect>> {
    let services: Vec<&Service> = match provider {
        Some(provider) => session.catalog.by_provider(provider).collect(),
        None => session.catalog.iter().collect(),
    };

    services
        .into_iter()
        .map(|s| links::resolve(s, id, &session.domains))
        .collect()
}

pub fn links(args: LinksArgs, domains: &DomainArgs) -> Result<()> {
    let session = Session::load(domains)?;
    let redirects = collect(&args.id, args.provider, &session)?;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&redirects)?);
        return Ok(());
    }

    println!("\n{}", "Sign-in Links:".bold());
    println!("{}", "─".repeat(60));

    for redirect in &redirects {
        let badge = match redirect.provider {
            Provider::Microsoft => redirect.provider.badge().blue(),
            Provider::Google => redirect.provider.badge().red(),
        };
        println!("\n{} {}", badge, redirect.service.bold());
        println!("  Account:  {}", redirect.email);
        println!("  Link:     {}", redirect.url.dimmed());
    }

    println!("\n{}", "─".repeat(60));
    println!("{} {} link(s)", "→".cyan(), redirects.len());

    Ok(())
}
