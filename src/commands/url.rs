use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::{
    config,
    constants::PRINT_URL_PREFIX,
    url::{UrlAction, UrlHandler},
};

#[derive(Debug, Clone, Args)]
pub struct UrlCommand {
    #[arg(help = "URL to hand off")]
    pub url: String,

    #[arg(short = 'a', long, value_parser = ["print", "clip", "open"], help = "What to do with the URL [default: from config, else open]")]
    pub action: Option<String>,

    #[arg(short = 'b', long, help = "Browser executable for the open action")]
    pub browser: Option<String>,
}

impl UrlCommand {
    pub fn execute(self, profile: &str) -> Result<()> {
        let (action, browser) = self.resolve(profile)?;
        info!("Dispatching URL with action '{}'", action);

        UrlHandler::system()
            .dispatch(action, &browser, &self.url, PRINT_URL_PREFIX, "\n")
            .with_context(|| format!("Failed to {action} URL"))
    }

    /// Command line flags win over the profile's config
    fn resolve(&self, profile: &str) -> Result<(UrlAction, String)> {
        let config = config::load_or_default(profile)?;

        let action = match self.action.as_deref() {
            Some(action) => action.parse::<UrlAction>()?,
            None => config.url_action,
        };

        let browser = self
            .browser
            .clone()
            .unwrap_or_else(|| config.browser_name().to_string());

        Ok((action, browser))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONFIG_FILE_ENV;
    use serial_test::serial;
    use std::env;
    use tempfile::TempDir;

    fn with_config<F: FnOnce()>(contents: Option<&str>, f: F) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config");
        if let Some(contents) = contents {
            std::fs::write(&path, contents).unwrap();
        }
        let original = env::var(CONFIG_FILE_ENV).ok();

        unsafe {
            env::set_var(CONFIG_FILE_ENV, &path);
        }

        f();

        unsafe {
            match original {
                Some(val) => env::set_var(CONFIG_FILE_ENV, val),
                None => env::remove_var(CONFIG_FILE_ENV),
            }
        }
    }

    #[test]
    #[serial]
    fn test_resolve_defaults_without_config() {
        with_config(None, || {
            let cmd = UrlCommand {
                url: "https://example.com".to_string(),
                action: None,
                browser: None,
            };
            let (action, browser) = cmd.resolve("default").unwrap();
            assert_eq!(action, UrlAction::Open);
            assert_eq!(browser, "");
        });
    }

    #[test]
    #[serial]
    fn test_resolve_from_config() {
        with_config(Some("[profile work]\nurl_action=clip\nbrowser=firefox\n"), || {
            let cmd = UrlCommand {
                url: "https://example.com".to_string(),
                action: None,
                browser: None,
            };
            let (action, browser) = cmd.resolve("work").unwrap();
            assert_eq!(action, UrlAction::Clip);
            assert_eq!(browser, "firefox");
        });
    }

    #[test]
    #[serial]
    fn test_resolve_flags_override_config() {
        with_config(Some("[default]\nurl_action=clip\nbrowser=firefox\n"), || {
            let cmd = UrlCommand {
                url: "https://example.com".to_string(),
                action: Some("print".to_string()),
                browser: Some("chromium".to_string()),
            };
            let (action, browser) = cmd.resolve("default").unwrap();
            assert_eq!(action, UrlAction::Print);
            assert_eq!(browser, "chromium");
        });
    }
}
