use anyhow::{Context, Result};
use ini::{Ini, Properties};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{constants, paths, url::UrlAction};

const URL_ACTION_KEY: &str = "url_action";
const BROWSER_KEY: &str = "browser";

/// Per-profile defaults for the `url` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub url_action: UrlAction,
    pub browser: Option<String>,
}

impl Config {
    fn from_ini_section(section: &Properties) -> Result<Self> {
        let url_action = section
            .get(URL_ACTION_KEY)
            .map(str::parse::<UrlAction>)
            .transpose()
            .context("Invalid url_action in config")?
            .unwrap_or_default();

        let browser = section
            .get(BROWSER_KEY)
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(String::from);

        Ok(Self {
            url_action,
            browser,
        })
    }

    fn save_to_ini(&self, ini: &mut Ini, profile: &str) {
        ini.with_section(Some(section_name(profile)))
            .set(URL_ACTION_KEY, self.url_action.as_str())
            .set(BROWSER_KEY, self.browser.as_deref().unwrap_or(""));
    }

    /// Browser name for `UrlHandler`, empty meaning the system default
    pub fn browser_name(&self) -> &str {
        self.browser.as_deref().unwrap_or("")
    }
}

fn section_name(profile: &str) -> String {
    if profile == "default" {
        profile.to_string()
    } else {
        format!("profile {profile}")
    }
}

pub fn load(profile: &str) -> Result<Config> {
    load_from(&get_config_path()?, profile)
}

/// Like [`load`] but falls back to defaults when the file or profile is absent
pub fn load_or_default(profile: &str) -> Result<Config> {
    let path = get_config_path()?;
    if !path.exists() {
        debug!("No config file at {}; using defaults", path.display());
        return Ok(Config::default());
    }

    let ini = Ini::load_from_file(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    match ini.section(Some(section_name(profile))) {
        Some(section) => Config::from_ini_section(section),
        None => {
            debug!("Profile '{}' not in config; using defaults", profile);
            Ok(Config::default())
        }
    }
}

pub fn save(profile: &str, config: &Config) -> Result<()> {
    save_to(&get_config_path()?, profile, config)
}

fn load_from(path: &Path, profile: &str) -> Result<Config> {
    let ini = Ini::load_from_file(path)
        .context("Failed to load config file. Please run `rolekit configure` first")?;

    let section = ini
        .section(Some(section_name(profile)))
        .with_context(|| format!("Profile '{profile}' not found in config"))?;

    Config::from_ini_section(section)
}

fn save_to(path: &Path, profile: &str, config: &Config) -> Result<()> {
    paths::ensure_dir_exists(path)
        .with_context(|| format!("Failed to prepare config directory for {}", path.display()))?;

    // A file that fails to parse is left untouched rather than overwritten
    let mut ini = if path.exists() {
        Ini::load_from_file(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?
    } else {
        Ini::new()
    };

    config.save_to_ini(&mut ini, profile);

    ini.write_to_file(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    debug!("Saved profile '{}' to {}", profile, path.display());
    Ok(())
}

fn get_config_path() -> Result<PathBuf> {
    constants::get_config_path().context("Failed to determine config path")
}
