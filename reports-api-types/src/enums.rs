use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ReportStatus {
    Open,
    Closed,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 2] = [ReportStatus::Open, ReportStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Open => "open",
            ReportStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown report status: {}", self.0)
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for ReportStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(ReportStatus::Open),
            "closed" => Ok(ReportStatus::Closed),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl TryFrom<String> for ReportStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("OPEN".parse::<ReportStatus>(), Ok(ReportStatus::Open));
        assert_eq!(" closed ".parse::<ReportStatus>(), Ok(ReportStatus::Closed));
        assert!("all".parse::<ReportStatus>().is_err());
    }
}
