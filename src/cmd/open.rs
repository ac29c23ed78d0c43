use crate::browser;
use crate::cmd::{DomainArgs, Session};
use crate::error::{CampuslinkError, Result};
use crate::links::{self, Redirect};
use clap::Args;
use colored::Colorize;

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Service key or name (e.g. outlook, onedrive, gmail). Defaults to the configured default
    #[arg(index = 1)]
    pub service: Option<String>,

    /// Student or staff ID (e.g. B11123021)
    #[arg(short, long)]
    pub id: String,

    /// Print the link instead of opening a browser
    #[arg(short, long)]
    pub print: bool,
}

/// Resolve the requested service against the session
pub fn resolve_args(args: &OpenArgs, session: &Session) -> Result<Redirect> {
    let service = match &args.service {
        Some(query) => session
            .catalog
            .find(query)
            .ok_or_else(|| CampuslinkError::ServiceNotFound(query.clone()))?,
        None => session.config.default_service(&session.catalog),
    };

    links::resolve(service, &args.id, &session.domains)
}

pub fn open(args: OpenArgs, domains: &DomainArgs) -> Result<()> {
    let session = Session::load(domains)?;
    let redirect = resolve_args(&args, &session)?;

    if args.print {
        println!("{}", redirect.url);
        return Ok(());
    }

    println!("{} Signing in as {}", "→".cyan(), redirect.email.bold());
    browser::open_in_new_tab(&redirect.url)?;
    println!("{} Opened {} in your browser", "✓".green(), redirect.service);

    Ok(())
}
