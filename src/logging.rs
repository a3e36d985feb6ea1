//! Log output setup
//!
//! Library code only emits `tracing` events. The binary installs one
//! subscriber that writes them to stderr, or appends them to a log file
//! when one is given. `RUST_LOG` overrides the default `info` level.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{Result, fs};

/// Install the global subscriber
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };
    let stderr_layer = file_layer.is_none().then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    // Already set when called twice in one process
    let _ = tracing_subscriber::registry()
        .with(filter(verbose))
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}

fn filter(verbose: bool) -> EnvFilter {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        crate::writer::ensure_dir(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| fs::write_failed(path.display().to_string(), e.to_string()))
}

/// Run `f` with a subscriber that records every event, returning the
/// formatted log output alongside the result
#[cfg(test)]
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            if let Ok(mut buf) = self.0.lock() {
                buf.extend_from_slice(data);
            }
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(move || writer.clone()),
    );

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = buffer
        .0
        .lock()
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default();
    (result, logs)
}
