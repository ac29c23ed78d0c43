mod browser;
mod cmd;
mod config;
mod error;
mod links;
mod tui;

use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser, Debug)]
#[command(
    name = "campuslink",
    about = "Open Microsoft 365 and Google Workspace signed in with your campus ID",
    version,
    long_about = "Campus sign-in launcher\n\n\
                  Builds your institutional email from a student/staff ID and opens\n\
                  Outlook, OneDrive, Teams, GMail, Drive and more with the account pre-filled."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    domains: cmd::DomainArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open a service signed in with your ID
    Open(cmd::open::OpenArgs),

    /// Print the sign-in link for every service
    Links(cmd::links::LinksArgs),

    /// List available services
    Services(cmd::services::ServicesArgs),

    /// Pick services from a menu and open them
    #[command(alias = "i")]
    Interactive(tui::launcher::LauncherArgs),

    /// Manage institution settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Change a setting
    Set(cmd::config::ConfigSetArgs),

    /// Delete the config file and go back to defaults
    Reset,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> error::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("campuslink=debug")
            .init();
    }

    match cli.command {
        Commands::Open(args) => cmd::open::open(args, &cli.domains)?,
        Commands::Links(args) => cmd::links::links(args, &cli.domains)?,
        Commands::Services(args) => cmd::services::list(args, &cli.domains)?,
        Commands::Interactive(args) => tui::run_launcher(args, &cli.domains)?,
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => cmd::config::show(&cli.domains)?,
            ConfigCommands::Path => cmd::config::path()?,
            ConfigCommands::Set(args) => cmd::config::set(args)?,
            ConfigCommands::Reset => cmd::config::reset()?,
        },
    }

    Ok(())
}
