use lamedh_runtime::{handler_fn, run, Error};
use time_digits::handler;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // stdout carries the report, so logs go to stderr. CloudWatch stamps
    // ingestion time on every line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()?;

    run(handler_fn(handler)).await?;
    Ok(())
}
