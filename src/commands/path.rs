use anyhow::{Context, Result};
use clap::Args;

use crate::paths;

#[derive(Debug, Clone, Args)]
pub struct PathCommand {
    #[arg(help = "Path to resolve; a leading '~' expands to the home directory")]
    pub path: String,

    #[arg(short = 'c', long, help = "Create the parent directory of the resolved path")]
    pub create: bool,
}

impl PathCommand {
    pub fn execute(self) -> Result<()> {
        let resolved = paths::home_path(&self.path);

        if self.create {
            paths::ensure_dir_exists(&resolved)
                .with_context(|| format!("Failed to create parent directory of {resolved}"))?;
        }

        println!("{resolved}");
        Ok(())
    }
}
