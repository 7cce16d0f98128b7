//! Lambda entry point.

use crate::{
    clock::{Clock, SystemClock},
    report::report_current_time_digits,
};
use lamedh_runtime::{Context, Error};
use serde_json::Value;
use std::io::{self, Write};
use tracing::{debug, info};

/// Handler registered with the Lambda runtime.
///
/// The event payload is ignored and the context only tags the log line. The
/// report goes to stdout and the function always returns `null`.
pub async fn handler(event: Value, context: Context) -> Result<Value, Error> {
    info!(request_id = %context.request_id, "reporting current time digits");
    let stdout = io::stdout();
    let out = stdout.lock();
    handle(event, &SystemClock, out)
}

/// The body of [`handler`] with the clock and output sink supplied by the caller.
pub fn handle<C: Clock, W: Write>(_event: Value, clock: &C, out: W) -> Result<Value, Error> {
    let report = report_current_time_digits(clock, out)?;
    debug!(
        timestamp = %report.timestamp(),
        digits = report.tally().total(),
        "report written"
    );
    Ok(Value::Null)
}
