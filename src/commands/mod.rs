pub mod init;
pub mod pause;
pub mod report;
pub mod resume;
pub mod status;
pub mod watch;
pub mod week;

use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Prepare a report of active time per day")]
    Report(report::ReportArgs),
    #[command(about = "Show active and pause totals for the last 7 days")]
    Week,
    #[command(about = "Show current mode and today's active time")]
    Status,
    #[command(about = "Switch tracking to pause mode")]
    Pause,
    #[command(about = "Switch tracking back to active mode")]
    Resume,
    #[command(about = "Track session time until interrupted")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<(), Box<dyn Error>> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args)?,
            Commands::Report(args) => report::cmd(args)?,
            Commands::Week => week::cmd()?,
            Commands::Status => status::cmd()?,
            Commands::Pause => pause::cmd()?,
            Commands::Resume => resume::cmd()?,
            Commands::Watch => watch::cmd().await?,
        }
        Ok(())
    }
}
