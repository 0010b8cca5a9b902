use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One bar of the chart: a positional label and the hours recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub hours: u32,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, hours: u32) -> Self {
        Self {
            label: label.into(),
            hours,
        }
    }
}

/// Time window selected by the user. It is the only input that shapes the dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Range {
    #[default]
    #[serde(rename = "15days")]
    FifteenDays,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
}

impl Range {
    pub const ALL: [Range; 4] = [
        Range::FifteenDays,
        Range::OneMonth,
        Range::SixMonths,
        Range::OneYear,
    ];

    /// Stable identifier, also used as the `<select>` option value.
    pub fn id(self) -> &'static str {
        match self {
            Range::FifteenDays => "15days",
            Range::OneMonth => "1month",
            Range::SixMonths => "6months",
            Range::OneYear => "1year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Range::FifteenDays => "Last 15 Days",
            Range::OneMonth => "Last 1 Month",
            Range::SixMonths => "Last 6 Months",
            Range::OneYear => "Last 1 Year",
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown range '{0}' (expected one of 15days, 1month, 6months, 1year)")]
pub struct UnknownRange(pub String);

impl FromStr for Range {
    type Err = UnknownRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::ALL
            .into_iter()
            .find(|range| range.id() == s.trim())
            .ok_or_else(|| UnknownRange(s.to_string()))
    }
}

/// Navigation metadata consumed by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub name: &'static str,
    pub navigation_id: &'static str,
}
