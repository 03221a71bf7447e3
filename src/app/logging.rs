//! Usage: Process-wide tracing setup (stdout + daily rolling file under the app data dir).

use crate::app_paths;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_PREFIX: &str = "trayboard.log";

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub(crate) fn init(app: &tauri::AppHandle) {
    if LOGGING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = match app_paths::logs_dir(app) {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().with_writer(writer).with_ansi(false))
        }
        Err(err) => {
            eprintln!("file logging disabled: {err}");
            None
        }
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer);

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {err}");
        return;
    }

    // Route `log` records from plugins into tracing.
    if let Err(err) = tracing_log::LogTracer::init() {
        tracing::debug!("log bridge not installed: {}", err);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
}
