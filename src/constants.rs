use std::{env, path::PathBuf};

/// Default configuration directory name under `~/.config`
pub const CONFIG_DIR_NAME: &str = "rolekit";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config";

/// Environment variable overriding the configuration file location
pub const CONFIG_FILE_ENV: &str = "ROLEKIT_CONFIG_FILE";

/// Number of decimal digits in an AWS account id
pub const ACCOUNT_ID_WIDTH: usize = 12;

/// Largest valid AWS account id (twelve nines)
pub const MAX_ACCOUNT_ID: i64 = 999_999_999_999;

/// Prefix of every IAM role ARN up to the account segment
pub const IAM_ARN_PREFIX: &str = "arn:aws:iam::";

/// Resource prefix of the last ARN segment for roles
pub const ROLE_RESOURCE_PREFIX: &str = "role/";

/// Layout accepted by `expiry::parse_time_string`, written in Go reference form
pub const TIME_LAYOUT: &str = "2006-01-02 15:04:05 -0700 MST";

/// Rendered remaining time once a session has run out
pub const EXPIRED: &str = "Expired";

/// Text written before the URL by the `url` command's print action
pub const PRINT_URL_PREFIX: &str = "Please visit: ";

/// Get the configuration file path
/// Respects ROLEKIT_CONFIG_FILE environment variable if set
pub fn get_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_FILE_ENV) {
        return Some(PathBuf::from(crate::paths::home_path(&path)));
    }

    dirs::home_dir().map(|home| {
        home.join(".config")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    })
}
