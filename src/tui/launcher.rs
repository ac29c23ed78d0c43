use crate::browser;
use crate::cmd::{DomainArgs, Session};
use crate::error::{CampuslinkError, Result};
use crate::links::{self, Catalog, Provider};
use crate::tui::prompts;
use clap::Args;

#[derive(Args, Debug)]
pub struct LauncherArgs {
    /// Pre-fill the ID prompt
    #[arg(short, long)]
    pub id: Option<String>,

    /// Print links instead of opening a browser
    #[arg(short, long)]
    pub print: bool,
}

/// One menu line per service: "Outlook [MS] - Microsoft mail (Live)"
pub fn menu_items(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .map(|s| {
            if s.description.is_empty() {
                format!("{} [{}]", s.name, s.provider.badge())
            } else {
                format!("{} [{}] - {}", s.name, s.provider.badge(), s.description)
            }
        })
        .collect()
}

pub fn run_launcher(args: LauncherArgs, domains: &DomainArgs) -> Result<()> {
    let session = Session::load(domains)?;
    let services: Vec<_> = session.catalog.iter().collect();
    let items = menu_items(&session.catalog);

    prompts::section_header("Campus Sign-in Launcher");
    prompts::info(&format!(
        "{} services use @{}",
        Provider::Microsoft.badge(),
        session.domains.microsoft
    ));
    prompts::info(&format!(
        "{} services use @{}",
        Provider::Google.badge(),
        session.domains.google
    ));
    println!();

    let id = prompts::input_id("Student ID", args.id.as_deref())?;

    let default_key = &session.config.default_service(&session.catalog).key;
    let mut selected = session.catalog.position(default_key).unwrap_or(0);

    loop {
        selected = prompts::select("Open which service?", &items, selected)?;
        let service = services[selected];

        match links::resolve(service, &id, &session.domains) {
            Ok(redirect) if args.print => println!("{}", redirect.url),
            Ok(redirect) => {
                browser::open_in_new_tab(&redirect.url)?;
                prompts::success(&format!("Opened {} as {}", service.name, redirect.email));
            }
            Err(CampuslinkError::InvalidService(msg)) => prompts::warning(&msg),
            Err(e) => return Err(e),
        }

        if !prompts::confirm("Open another service?", false)? {
            break;
        }
    }

    Ok(())
}
