use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "bmi_cli=debug,bmi_core=debug"
    } else {
        "bmi_cli=info,bmi_core=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// Logs go to `log_file` when given. Otherwise the one-shot report logs to
/// stderr, and the interactive session (which owns the terminal) does not log.
pub fn init_logger(verbose: bool, log_file: Option<&Path>, interactive: bool) -> io::Result<()> {
    if let Some(path) = log_file {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .compact(),
            )
            .init();
        return Ok(());
    }

    if interactive {
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
    Ok(())
}
