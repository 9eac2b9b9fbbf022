use std::{fmt, str::FromStr};

use super::account::{account_id_to_i64, account_id_to_string};
use crate::{
    constants::{IAM_ARN_PREFIX, ROLE_RESOURCE_PREFIX},
    error::{Error, Result},
};

/// IAM role identified by account and role name
/// (`arn:aws:iam::123456789012:role/RoleName`).
///
/// Only built through [`RoleArn::new`] or `parse`, so the account id is always
/// within the twelve digit range:
///
/// ```compile_fail
/// let arn = rolekit::aws::RoleArn { account_id: -1, role_name: "Foo".into() };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleArn {
    account_id: i64,
    role_name: String,
}

impl RoleArn {
    /// Build a role ARN, rejecting account ids outside the twelve digit range
    pub fn new(account_id: i64, role_name: impl Into<String>) -> Result<Self> {
        // Validates the range up front so Display never sees a bad id
        account_id_to_string(account_id)?;
        Ok(Self {
            account_id,
            role_name: role_name.into(),
        })
    }

    pub fn account_id(&self) -> i64 {
        self.account_id
    }

    pub fn role_name(&self) -> &str {
        &self.role_name
    }
}

impl fmt::Display for RoleArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{IAM_ARN_PREFIX}{:012}:{ROLE_RESOURCE_PREFIX}{}",
            self.account_id, self.role_name
        )
    }
}

impl FromStr for RoleArn {
    type Err = Error;

    fn from_str(arn: &str) -> Result<Self> {
        let fields: Vec<&str> = arn.split(':').collect();
        if fields.len() != 6 {
            return Err(Error::invalid_arn(arn, "expected six ':' separated fields"));
        }

        if fields[0] != "arn" || fields[1] != "aws" || fields[2] != "iam" {
            return Err(Error::invalid_arn(arn, "not an arn:aws:iam ARN"));
        }

        let account_id = account_id_to_i64(fields[4])
            .map_err(|_| Error::invalid_arn(arn, "account segment is not a valid account id"))?;

        let role_name = fields[5]
            .strip_prefix(ROLE_RESOURCE_PREFIX)
            .ok_or_else(|| Error::invalid_arn(arn, "resource is not a role"))?;

        // Role paths (role/path/Name) are not accepted
        if role_name.contains('/') {
            return Err(Error::invalid_arn(arn, "role name must not contain '/'"));
        }

        Ok(Self {
            account_id,
            role_name: role_name.to_string(),
        })
    }
}

/// Build `arn:aws:iam::<account>:role/<role>`; the role name is not validated
pub fn make_role_arn(account_id: i64, role: &str) -> Result<String> {
    RoleArn::new(account_id, role).map(|arn| arn.to_string())
}

/// Same as [`make_role_arn`] with the account id given as a string
pub fn make_role_arn_from_str(account_id: &str, role: &str) -> Result<String> {
    make_role_arn(account_id_to_i64(account_id)?, role)
}

/// Split a role ARN into its account id and role name
pub fn parse_role_arn(arn: &str) -> Result<(i64, String)> {
    let RoleArn {
        account_id,
        role_name,
    } = arn.parse()?;
    Ok((account_id, role_name))
}
