//! Severity levels for log records.

use std::{fmt, str::FromStr};

/// Severity of a log record, following the eight syslog levels of RFC 5424.
///
/// Ordering follows the syslog numerical codes: `Emergency` is the most
/// severe and compares lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// System is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Runtime errors that do not require immediate action.
    Error = 3,
    /// Exceptional occurrences that are not errors.
    Warning = 4,
    /// Normal but significant events.
    Notice = 5,
    /// Interesting events.
    Info = 6,
    /// Detailed debugging information.
    Debug = 7,
}

impl Severity {
    /// Every severity, most severe first.
    pub const ALL: [Self; 8] = [
        Self::Emergency,
        Self::Alert,
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    /// The lowercase canonical name of this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// The syslog numerical code of this severity.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Debug, thiserror::Error)]
#[error("unknown severity: {0:?}")]
pub struct SeverityParseError(String);

impl FromStr for Severity {
    type Err = SeverityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emergency" => Ok(Self::Emergency),
            "alert" => Ok(Self::Alert),
            "critical" => Ok(Self::Critical),
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(SeverityParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("EMERGENCY".parse::<Severity>().unwrap(), Severity::Emergency);
        assert_eq!("Warn".parse::<Severity>().unwrap(), Severity::Warning);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn ordering_follows_syslog_codes() {
        assert!(Severity::Emergency < Severity::Error);
        assert!(Severity::Error < Severity::Debug);

        let codes: Vec<u8> = Severity::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, (0..8).collect::<Vec<u8>>());
    }
}
