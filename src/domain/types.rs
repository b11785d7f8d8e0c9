//! Strongly-typed value objects shared by queries and results.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a report type string does not match one of the supported kinds.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid report type: {0}")]
pub struct InvalidReportType(pub String);

/// Report flavours understood by the backend.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Summary,
    Detailed,
}

impl ReportType {
    /// Wire representation expected by the report endpoint.
    pub const fn as_str(self) -> &'static str {
        match self {
            ReportType::Summary => "summary",
            ReportType::Detailed => "detailed",
        }
    }
}

impl Display for ReportType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = InvalidReportType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "summary" => Ok(ReportType::Summary),
            "detailed" => Ok(ReportType::Detailed),
            other => Err(InvalidReportType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_type_round_trip() {
        assert_eq!("summary".parse::<ReportType>().unwrap(), ReportType::Summary);
        assert_eq!(
            "detailed".parse::<ReportType>().unwrap(),
            ReportType::Detailed
        );
        assert_eq!(ReportType::Detailed.to_string(), "detailed");
    }

    #[test]
    fn test_report_type_rejects_unknown_values() {
        let err = "weekly".parse::<ReportType>().unwrap_err();
        assert_eq!(err, InvalidReportType("weekly".to_string()));
    }
}
