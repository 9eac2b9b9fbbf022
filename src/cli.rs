use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{
    CompletionsCommand, ConfigureCommand, MakeArnCommand, ParseArnCommand, PathCommand,
    RemainCommand, UrlCommand,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "rolekit", version, about = "AWS role ARN, account id, path and URL helpers", long_about = None)]
pub struct Cli {
    #[arg(
        short = 'p',
        long,
        global = true,
        default_value = "default",
        help = "Profile whose config supplies url defaults"
    )]
    pub profile: String,

    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Build an IAM role ARN from an account id and role name")]
    MakeArn(MakeArnCommand),
    #[command(about = "Split an IAM role ARN into account id and role name")]
    ParseArn(ParseArnCommand),
    #[command(about = "Show the time remaining until an expiry")]
    Remain(RemainCommand),
    #[command(about = "Print, copy or open a URL")]
    Url(UrlCommand),
    #[command(about = "Resolve a path, expanding '~'")]
    Path(PathCommand),
    #[command(about = "Set url defaults for a profile")]
    Configure(ConfigureCommand),
    #[command(about = "Generate shell completion scripts for rolekit")]
    Completions(CompletionsCommand),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let profile = self.profile;

        match self.command {
            Commands::MakeArn(cmd) => cmd.execute(),
            Commands::ParseArn(cmd) => cmd.execute(),
            Commands::Remain(cmd) => cmd.execute(),
            Commands::Url(cmd) => cmd.execute(&profile),
            Commands::Path(cmd) => cmd.execute(),
            Commands::Configure(cmd) => cmd.execute(&profile),
            Commands::Completions(cmd) => {
                cmd.execute();
                Ok(())
            }
        }
    }
}
