pub mod arn;
pub mod completions;
pub mod configure;
pub mod path;
pub mod remain;
pub mod url;

pub use arn::{MakeArnCommand, ParseArnCommand};
pub use completions::CompletionsCommand;
pub use configure::ConfigureCommand;
pub use path::PathCommand;
pub use remain::RemainCommand;
pub use url::UrlCommand;
