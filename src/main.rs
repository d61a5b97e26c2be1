use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "disasterscout", author, version = env!("CARGO_PKG_VERSION"), about = "Launcher for the DisasterScout agent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstrap the Node.js environment and run the agent (default)
    Run,

    /// Prepare the Node.js environment without starting the agent
    Setup,

    /// Check the runtime environment the agent needs
    Doctor {
        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            commands::run::execute()?;
        }
        Commands::Setup => {
            commands::setup::execute()?;
        }
        Commands::Doctor { json } => {
            let exit_code = commands::doctor::execute(json)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
