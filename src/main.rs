use sitemap_clean::cli;
use sitemap_clean::error::CleanError;
use sitemap_clean::logging;

/// Exit status for a failed run: the pipeline's own code, otherwise 1.
fn exit_status(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CleanError>()
        .map(CleanError::exit_code)
        .unwrap_or(1)
}

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the log file is unavailable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = cli::run_from_args() {
        eprintln!("sitemap-clean error: {:#}", err);
        std::process::exit(exit_status(&err));
    }
}
