//! Update path contract.
//!
//! A metric update travels entirely in the request path:
//! `/update/<kind>/<name>/<value>`. Splitting on `/` must yield exactly five
//! segments. The second segment is the route prefix and is not checked here;
//! routing has already matched it.

use std::fmt;
use std::str::FromStr;

use crate::error::{MemstatError, Result};
use crate::value::{parse_counter_value, parse_gauge_value};

/// Metric kinds accepted on the update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Accumulates by summation.
    Counter,
    /// Replaced by the latest value.
    Gauge,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = MemstatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "counter" => Ok(MetricKind::Counter),
            "gauge" => Ok(MetricKind::Gauge),
            other => Err(MemstatError::UnknownMetricKind(other.to_string())),
        }
    }
}

/// A validated, typed update ready to be applied to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricUpdate {
    Counter { name: String, delta: i64 },
    Gauge { name: String, value: f64 },
}

impl MetricUpdate {
    /// Parse a raw request path (still percent-encoded, as received).
    ///
    /// The path is decoded before it is split, so an encoded `/` counts as a
    /// separator.
    pub fn from_path(raw_path: &str) -> Result<Self> {
        check_escapes(raw_path)?;
        let path = urlencoding::decode(raw_path).map_err(|_| MemstatError::MalformedPath)?;
        let segments: Vec<&str> = path.split('/').collect();
        let [_, _prefix, kind, name, value] = segments.as_slice() else {
            return Err(MemstatError::MalformedPath);
        };
        Self::from_parts(kind, name, value)
    }

    /// Build an update from already separated path segments.
    pub fn from_parts(kind: &str, name: &str, value: &str) -> Result<Self> {
        match kind.parse::<MetricKind>()? {
            MetricKind::Counter => Ok(MetricUpdate::Counter {
                name: name.to_string(),
                delta: parse_counter_value(value)?,
            }),
            MetricKind::Gauge => Ok(MetricUpdate::Gauge {
                name: name.to_string(),
                value: parse_gauge_value(value)?,
            }),
        }
    }

    pub fn kind(&self) -> MetricKind {
        match self {
            MetricUpdate::Counter { .. } => MetricKind::Counter,
            MetricUpdate::Gauge { .. } => MetricKind::Gauge,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MetricUpdate::Counter { name, .. } | MetricUpdate::Gauge { name, .. } => name,
        }
    }
}

/// Every `%` must start a two-digit hex escape.
pub fn check_escapes(raw_path: &str) -> Result<()> {
    let mut rest = raw_path;
    while let Some(idx) = rest.find('%') {
        let valid = rest
            .get(idx + 1..idx + 3)
            .is_some_and(|h| h.bytes().all(|b| b.is_ascii_hexdigit()));
        if !valid {
            return Err(MemstatError::InvalidPathEscape(raw_path.to_string()));
        }
        rest = &rest[idx + 3..];
    }
    Ok(())
}
