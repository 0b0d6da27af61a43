//! Quoin CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "quoin")]
#[command(version)]
#[command(about = "Quoin static website builder", long_about = None)]
struct Cli {
    /// Change working directory before running the command
    #[arg(short = 'C', long, global = true)]
    change_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new website project
    New {
        /// Site directory to create
        #[arg(short, long)]
        name: String,
    },

    /// Initialize a website project in the current directory
    Init,

    /// Build the website
    Build,

    /// Remove build outputs
    Clean,

    /// Clobber the build, removing everything
    Clobber,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Some(dir) = &cli.change_dir {
        std::env::set_current_dir(dir)
            .map_err(|e| anyhow::anyhow!("{}: {}", dir, e))?;
        tracing::debug!(dir = %dir, "changed working directory");
    }

    match cli.command {
        Commands::New { name } => commands::new::execute(&name),
        Commands::Init => commands::init::execute(),
        Commands::Build => commands::build::execute(),
        Commands::Clean => commands::clean::execute(),
        Commands::Clobber => commands::clobber::execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
