use log::LevelFilter;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log record, most severe first.
///
/// A threshold of `Warn` lets `Fatal`, `Error` and `Warn` records through
/// and drops everything below, see [`Severity::allows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Numeric priority; a lower value is more severe.
    pub fn priority(self) -> u16 {
        match self {
            Severity::Fatal => 100,
            Severity::Error => 200,
            Severity::Warn => 300,
            Severity::Info => 400,
            Severity::Debug => 500,
            Severity::Trace => 600,
        }
    }

    /// Whether a record at `record` severity passes a threshold of `self`.
    pub fn allows(self, record: Severity) -> bool {
        record.priority() <= self.priority()
    }

    /// Projection onto the `log` facade filter. The facade has no level
    /// above `error`, so `Fatal` maps to [`LevelFilter::Error`].
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Severity::Fatal | Severity::Error => LevelFilter::Error,
            Severity::Warn => LevelFilter::Warn,
            Severity::Info => LevelFilter::Info,
            Severity::Debug => LevelFilter::Debug,
            Severity::Trace => LevelFilter::Trace,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown severity level: {0}")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(level.as_str()))
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities_strictly_increase_from_fatal_to_trace() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0].priority() < pair[1].priority());
        }
    }

    #[test]
    fn threshold_allows_itself_and_everything_more_severe() {
        for threshold in Severity::ALL {
            for record in Severity::ALL {
                let expected = record.priority() <= threshold.priority();
                assert_eq!(
                    threshold.allows(record),
                    expected,
                    "threshold {threshold} vs record {record}"
                );
            }
        }
    }

    #[test]
    fn info_threshold_matrix() {
        let threshold = Severity::Info;
        assert!(threshold.allows(Severity::Fatal));
        assert!(threshold.allows(Severity::Error));
        assert!(threshold.allows(Severity::Warn));
        assert!(threshold.allows(Severity::Info));
        assert!(!threshold.allows(Severity::Debug));
        assert!(!threshold.allows(Severity::Trace));
    }

    #[test]
    fn fatal_collapses_to_error_on_the_facade() {
        assert_eq!(Severity::Fatal.to_level_filter(), LevelFilter::Error);
        assert_eq!(Severity::Error.to_level_filter(), LevelFilter::Error);
        assert_eq!(Severity::Trace.to_level_filter(), LevelFilter::Trace);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("FATAL".parse::<Severity>().unwrap(), Severity::Fatal);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("Debug".parse::<Severity>().unwrap(), Severity::Debug);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for level in Severity::ALL {
            assert_eq!(level.to_string().parse::<Severity>().unwrap(), level);
        }
    }

    #[test]
    fn deserializes_from_upper_case_names() {
        #[derive(Deserialize)]
        struct Wrap {
            level: Severity,
        }

        let wrap: Wrap = toml::from_str(r#"level = "ERROR""#).unwrap();
        assert_eq!(wrap.level, Severity::Error);
        assert!(toml::from_str::<Wrap>(r#"level = "LOUD""#).is_err());
    }
}
