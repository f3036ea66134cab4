//! Typed views over the token signing settings.

use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;

use super::JwtSettings;
use crate::shared::SettingsError;

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
const MS_PER_WEEK: f64 = 7.0 * MS_PER_DAY;
const MS_PER_YEAR: f64 = 365.25 * MS_PER_DAY;

impl JwtSettings {
    /// Signing algorithm, e.g. `HS256`.
    pub fn algorithm(&self) -> Result<Algorithm, SettingsError> {
        Algorithm::from_str(self.algorithm.trim())
            .map_err(|_| SettingsError::InvalidAlgorithm(self.algorithm.clone()))
    }

    /// Token lifetime.
    ///
    /// Accepts a number followed by an optional unit (`"90"`, `"15m"`,
    /// `"24h"`, `"7 days"`, `"1.5h"`). A bare number counts seconds.
    pub fn expires_in(&self) -> Result<Duration, SettingsError> {
        parse_lifetime(&self.expires_in)
    }

    /// Lifetime in whole seconds, as used for the `exp` claim.
    pub fn expires_in_secs(&self) -> Result<i64, SettingsError> {
        self.expires_in().map(|d| d.num_seconds())
    }
}

fn parse_lifetime(raw: &str) -> Result<Duration, SettingsError> {
    let invalid = || SettingsError::InvalidDuration(raw.to_string());

    let s = raw.trim();
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (amount, unit) = s.split_at(split);
    let amount: f64 = amount.parse().map_err(|_| invalid())?;

    let scale = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "s" | "sec" | "secs" | "second" | "seconds" => MS_PER_SECOND,
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "m" | "min" | "mins" | "minute" | "minutes" => MS_PER_MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => MS_PER_HOUR,
        "d" | "day" | "days" => MS_PER_DAY,
        "w" | "week" | "weeks" => MS_PER_WEEK,
        "y" | "yr" | "yrs" | "year" | "years" => MS_PER_YEAR,
        _ => return Err(invalid()),
    };

    let millis = (amount * scale).round();
    if !millis.is_finite() || millis > i64::MAX as f64 {
        return Err(invalid());
    }
    Duration::try_milliseconds(millis as i64).ok_or_else(invalid)
}
