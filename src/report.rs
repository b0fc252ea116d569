//! Report line formatting for the monitoring supervisor.

use chrono::{DateTime, Local, Utc};

use crate::status::Status;

/// Renders the single report line written to standard output.
///
/// Shape: `GTFS-REALTIME <STATUS> - count=<N>[ time=<date/time>]`. The
/// time segment appears only when the decoded feed header carried a
/// timestamp (milliseconds since the epoch), rendered in the local
/// timezone with the short date/time representation.
pub fn render_report(status: Status, count: usize, timestamp_millis: Option<u64>) -> String {
    let mut line = format!("GTFS-REALTIME {status} - count={count}");
    if let Some(time) = timestamp_millis.and_then(local_time) {
        line.push_str(" time=");
        line.push_str(&time.format("%x %X").to_string());
    }
    line
}

fn local_time(millis: u64) -> Option<DateTime<Local>> {
    let millis = i64::try_from(millis).ok()?;
    let utc = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some(utc.with_timezone(&Local))
}
