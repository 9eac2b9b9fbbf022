use crate::{
    constants::{ACCOUNT_ID_WIDTH, MAX_ACCOUNT_ID},
    error::{Error, Result},
};

/// Render an account id in its canonical twelve digit, zero padded form
pub fn account_id_to_string(id: i64) -> Result<String> {
    if !(0..=MAX_ACCOUNT_ID).contains(&id) {
        return Err(Error::InvalidAccountId(id.to_string()));
    }

    Ok(format!("{id:0width$}", width = ACCOUNT_ID_WIDTH))
}

/// Parse an account id string (leading zeros allowed, at most twelve digits)
pub fn account_id_to_i64(s: &str) -> Result<i64> {
    // Sign characters are rejected here so "-1" and "+1" never reach `parse`
    if s.is_empty() || s.len() > ACCOUNT_ID_WIDTH || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidAccountId(s.to_string()));
    }

    s.parse::<i64>()
        .map_err(|_| Error::InvalidAccountId(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_to_string() {
        assert_eq!(account_id_to_string(0).unwrap(), "000000000000");
        assert_eq!(account_id_to_string(11111).unwrap(), "000000011111");
        assert_eq!(account_id_to_string(999999999999).unwrap(), "999999999999");
    }

    #[test]
    fn test_account_id_to_string_out_of_range() {
        assert!(account_id_to_string(-1).is_err());
        assert!(account_id_to_string(-19999).is_err());
        assert!(account_id_to_string(1_000_000_000_000).is_err());
        assert!(account_id_to_string(i64::MAX).is_err());

        let err = account_id_to_string(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidAccountId(ref v) if v == "-1"));
    }

    #[test]
    fn test_account_id_to_i64() {
        assert_eq!(account_id_to_i64("12345").unwrap(), 12345);
        assert_eq!(account_id_to_i64("0012345").unwrap(), 12345);
        assert_eq!(account_id_to_i64("000000000000").unwrap(), 0);
        assert_eq!(account_id_to_i64("999999999999").unwrap(), MAX_ACCOUNT_ID);
    }

    #[test]
    fn test_account_id_to_i64_invalid() {
        assert!(account_id_to_i64("").is_err());
        assert!(account_id_to_i64("0012345678912123344455323423423423424").is_err());
        assert!(account_id_to_i64("1234567890123").is_err());
        assert!(account_id_to_i64("abdcefgi").is_err());
        assert!(account_id_to_i64("-1").is_err());
        assert!(account_id_to_i64("+1").is_err());
        assert!(account_id_to_i64(" 1").is_err());
    }

    #[test]
    fn test_account_id_round_trip() {
        for id in [0, 1, 42, 123_456_789_012, 700_000_000_001, MAX_ACCOUNT_ID] {
            let s = account_id_to_string(id).unwrap();
            assert_eq!(s.len(), ACCOUNT_ID_WIDTH);
            assert_eq!(account_id_to_i64(&s).unwrap(), id);
        }
    }
}
