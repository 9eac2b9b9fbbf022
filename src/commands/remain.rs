use anyhow::{Context, Result};
use clap::Args;

use crate::{constants::TIME_LAYOUT, expiry};

#[derive(Debug, Clone, Args)]
pub struct RemainCommand {
    #[arg(help = "Expiry as Unix epoch seconds or '2006-01-02 15:04:05 -0700 MST'")]
    pub expiry: String,

    #[arg(short = 'l', long, help = "Fixed width output (e.g. '5h 5m')")]
    pub long: bool,
}

impl RemainCommand {
    pub fn execute(self) -> Result<()> {
        let expiry = parse_expiry(&self.expiry)?;
        println!("{}", expiry::time_remain(expiry, self.long)?);
        Ok(())
    }
}

fn parse_expiry(value: &str) -> Result<i64> {
    if let Ok(epoch) = value.trim().parse::<i64>() {
        return Ok(epoch);
    }

    expiry::parse_time_string(value)
        .with_context(|| format!("Expiry must be epoch seconds or match '{TIME_LAYOUT}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expiry_epoch() {
        assert_eq!(parse_expiry("0").unwrap(), 0);
        assert_eq!(parse_expiry("1700000000").unwrap(), 1700000000);
    }

    #[test]
    fn test_parse_expiry_layout() {
        assert_eq!(parse_expiry("1970-01-01 00:00:10 +0000 UTC").unwrap(), 10);
    }

    #[test]
    fn test_parse_expiry_invalid() {
        let err = parse_expiry("tomorrow").unwrap_err();
        assert!(err.to_string().contains(TIME_LAYOUT));
    }
}
