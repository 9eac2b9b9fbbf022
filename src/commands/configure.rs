use anyhow::Result;
use clap::Args;

use crate::{config, url::UrlAction};

#[derive(Debug, Clone, Args)]
pub struct ConfigureCommand {
    #[arg(short = 'a', long, value_parser = ["print", "clip", "open"], help = "Default url action")]
    pub url_action: Option<String>,

    #[arg(short = 'b', long, help = "Default browser (empty for the system default)")]
    pub browser: Option<String>,
}

impl ConfigureCommand {
    pub fn execute(self, profile: &str) -> Result<()> {
        let mut config = config::load_or_default(profile)?;

        if let Some(action) = self.url_action.as_deref() {
            config.url_action = action.parse::<UrlAction>()?;
        }
        if let Some(browser) = self.browser {
            config.browser = Some(browser).filter(|b| !b.is_empty());
        }

        config::save(profile, &config)?;

        println!(
            "Saved profile '{profile}': url_action = {}, browser = {}",
            config.url_action,
            config.browser.as_deref().unwrap_or("(system default)")
        );
        Ok(())
    }
}
