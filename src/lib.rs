//! Helpers shared by AWS identity CLIs: IAM role ARN and account id codecs,
//! home-relative path resolution, session time-remaining display and URL
//! hand-off to stdout, the clipboard or a browser.

pub mod aws;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod expiry;
pub mod paths;
pub mod url;

pub use error::{Error, Result};
