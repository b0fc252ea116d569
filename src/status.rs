//! Three-level feed health classification.

use std::fmt;

/// Feed health verdict, in the Nagios plugin convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
}

impl Status {
    /// Classifies an entity count against the two thresholds.
    ///
    /// The comparisons run in order: at or below `critical` is CRITICAL,
    /// at or below `warning` is WARNING, anything above both is OK. An
    /// inverted configuration (`critical >= warning`) keeps this order,
    /// so CRITICAL wins for any count below both thresholds.
    pub fn from_count(count: i64, critical: i64, warning: i64) -> Self {
        if count <= critical {
            Status::Critical
        } else if count <= warning {
            Status::Warning
        } else {
            Status::Ok
        }
    }

    /// Process exit code understood by the monitoring supervisor.
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
        };
        f.write_str(token)
    }
}
