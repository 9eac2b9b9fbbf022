use std::time::{SystemTime, UNIX_EPOCH};

use chrono::DateTime;

use crate::{
    constants::{EXPIRED, TIME_LAYOUT},
    error::{Error, Result},
};

/// chrono equivalent of the numeric part of `TIME_LAYOUT`
const CHRONO_LAYOUT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Byte template of the numeric part: `0` is any digit, `+` is a sign
const LAYOUT_TEMPLATE: &[u8] = b"0000-00-00 00:00:00 +0000";

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Parse `2006-01-02 15:04:05 -0700 MST` style timestamps into Unix epoch seconds.
///
/// The zone abbreviation must be present but only the numeric offset decides
/// the instant.
pub fn parse_time_string(s: &str) -> Result<i64> {
    let invalid = |reason: &str| Error::InvalidTimeFormat {
        input: s.to_string(),
        reason: format!("{reason} (expected layout '{TIME_LAYOUT}')"),
    };

    let (stamp, zone) = s
        .rsplit_once(' ')
        .ok_or_else(|| invalid("missing zone name"))?;

    if !is_zone_name(zone) {
        return Err(invalid("unrecognized zone name"));
    }

    if !matches_template(stamp) {
        return Err(invalid("malformed date, time or offset"));
    }

    // chrono accepts :60 as a leap second; the layout only allows 00-59
    if &stamp[17..19] >= "60" {
        return Err(invalid("second out of range"));
    }

    DateTime::parse_from_str(stamp, CHRONO_LAYOUT)
        .map(|dt| dt.timestamp())
        .map_err(|e| invalid(&e.to_string()))
}

fn matches_template(stamp: &str) -> bool {
    stamp.len() == LAYOUT_TEMPLATE.len()
        && stamp
            .bytes()
            .zip(LAYOUT_TEMPLATE)
            .all(|(b, &t)| match t {
                b'0' => b.is_ascii_digit(),
                b'+' => b == b'+' || b == b'-',
                _ => b == t,
            })
}

/// Zone abbreviations such as `UTC`, `PDT`, `AEST`, `GMT+9` or `+07`
fn is_zone_name(zone: &str) -> bool {
    let signed_digits = |s: &str| {
        s.strip_prefix(['+', '-'])
            .is_some_and(|d| (1..=4).contains(&d.len()) && d.bytes().all(|b| b.is_ascii_digit()))
    };

    if let Some(rest) = zone.strip_prefix("GMT") {
        return rest.is_empty() || signed_digits(rest);
    }

    if zone.starts_with(['+', '-']) {
        return signed_digits(zone);
    }

    if matches!(zone, "ChST" | "MeST" | "WITA") {
        return true;
    }

    if !zone.bytes().all(|b| b.is_ascii_uppercase()) {
        return false;
    }

    match zone.len() {
        3 => true,
        4 | 5 => zone.ends_with('T'),
        _ => false,
    }
}

/// Render the time left until `expiry` (Unix epoch seconds).
///
/// Returns `Expired` once the expiry has passed. See [`format_remaining`] for
/// the output format.
pub fn time_remain(expiry: i64, long: bool) -> Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?;
    let now_ms = i64::try_from(now.as_millis()).unwrap_or(i64::MAX);
    let remaining_ms = expiry.saturating_mul(1000).saturating_sub(now_ms);

    Ok(format_remaining(remaining_ms, long))
}

/// Format a remaining duration given in milliseconds.
///
/// The value is rounded to the nearest minute, half a minute rounding up.
/// Short form is `5h5m` or `5m`; long form inserts a space after the hours and
/// right-aligns to five columns (`5h 5m`, `   5m`). Anything that rounds to zero
/// minutes is `Expired`.
pub fn format_remaining(remaining_ms: i64, long: bool) -> String {
    if remaining_ms <= 0 {
        return EXPIRED.to_string();
    }

    let minutes = remaining_ms.saturating_add(MILLIS_PER_MINUTE / 2) / MILLIS_PER_MINUTE;
    if minutes == 0 {
        return EXPIRED.to_string();
    }

    let (hours, minutes) = (minutes / 60, minutes % 60);
    let short = if hours > 0 {
        format!("{hours}h{minutes}m")
    } else {
        format!("{minutes}m")
    };

    if long {
        format!("{:>5}", short.replacen('h', "h ", 1))
    } else {
        short
    }
}
