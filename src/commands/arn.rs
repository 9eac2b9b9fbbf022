use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::aws::{account, arn};

#[derive(Debug, Clone, Args)]
pub struct MakeArnCommand {
    #[arg(short = 'a', long, help = "AWS account id (leading zeros optional)")]
    pub account: String,

    #[arg(short = 'r', long, help = "IAM role name")]
    pub role: String,
}

impl MakeArnCommand {
    pub fn execute(self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn render(&self) -> Result<String> {
        arn::make_role_arn_from_str(&self.account, &self.role)
            .with_context(|| format!("Failed to build role ARN for account '{}'", self.account))
    }
}

#[derive(Debug, Clone, Args)]
pub struct ParseArnCommand {
    #[arg(help = "Role ARN, e.g. arn:aws:iam::123456789012:role/Admin")]
    pub arn: String,
}

impl ParseArnCommand {
    pub fn execute(self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn render(&self) -> Result<String> {
        let (account_id, role) = arn::parse_role_arn(&self.arn).context("Failed to parse role ARN")?;
        debug!("Parsed account {} role {}", account_id, role);

        let account_id = account::account_id_to_string(account_id)?;
        Ok(format!("account_id = {account_id}\nrole = {role}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_arn_render() {
        let cmd = MakeArnCommand {
            account: "000711111".to_string(),
            role: "Foo".to_string(),
        };
        assert_eq!(cmd.render().unwrap(), "arn:aws:iam::000000711111:role/Foo");
    }

    #[test]
    fn test_make_arn_render_invalid_account() {
        let cmd = MakeArnCommand {
            account: "asdfasfdo".to_string(),
            role: "foo".to_string(),
        };
        let err = cmd.render().unwrap_err();
        assert!(err.to_string().contains("asdfasfdo"));
    }

    #[test]
    fn test_parse_arn_render() {
        let cmd = ParseArnCommand {
            arn: "arn:aws:iam::11111:role/Foo".to_string(),
        };
        assert_eq!(
            cmd.render().unwrap(),
            "account_id = 000000011111\nrole = Foo"
        );
    }

    #[test]
    fn test_parse_arn_render_invalid() {
        let cmd = ParseArnCommand {
            arn: "arn:aws:iam::000000011111:role/Foo/Bar".to_string(),
        };
        assert!(cmd.render().is_err());
    }
}
