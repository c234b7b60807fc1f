//! Pre-generates translation artifacts for every catalog below a directory.
//!
//! ```text
//! l10n-json-cache [ROOT]
//! ```
//!
//! `RUST_LOG` controls verbosity (default `info`). When `L10N_CACHE_LOG_DIR` is set,
//! logs are also written to a daily rolling file in that directory.

use std::path::PathBuf;
use std::process::ExitCode;

use l10n_json_cache::TranslationCache;
use l10n_json_cache::catalog::MoCatalogReader;
use l10n_json_cache::config::{
    CacheSettings,
    ConfigError,
};
use l10n_json_cache::fs::StdFileSystem;
use l10n_json_cache::scanner::{
    CatalogScanner,
    ScanError,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Directory for the optional log file
const LOG_DIR_ENV: &str = "L10N_CACHE_LOG_DIR";

/// Errors that abort the warm-up before any catalog is processed.
#[derive(Debug, thiserror::Error)]
enum WarmUpError {
    /// Invalid or unreadable settings file
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid scan patterns
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Result of one warm-up run.
#[derive(Debug, Default, Clone, Copy)]
struct Summary {
    /// Catalogs whose artifact is usable afterwards
    resolved: usize,
    /// Catalogs that could not be resolved
    failed: usize,
}

fn main() -> ExitCode {
    let _guard = setup_tracing();

    let root = std::env::args_os().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);

    match warm_up(root) {
        Ok(summary) => {
            tracing::info!(
                resolved = summary.resolved,
                failed = summary.failed,
                "Warm-up finished"
            );
            if summary.failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Resolves every catalog below `root`, regenerating missing and stale artifacts.
fn warm_up(root: PathBuf) -> Result<Summary, WarmUpError> {
    let settings = CacheSettings::load(&root)?;

    let scanner = CatalogScanner::new(root, &settings)?;
    let catalogs = scanner.find_catalogs();
    tracing::info!(root = %scanner.root().display(), catalogs = catalogs.len(), "Found catalogs");

    let cache = TranslationCache::with_settings(StdFileSystem, MoCatalogReader, &settings);
    let mut summary = Summary::default();

    for location in &catalogs {
        match cache.resolve(&location.domain, &location.path, &location.locale) {
            Ok(table) => {
                tracing::debug!(
                    path = %location.path.display(),
                    entries = table.len(),
                    "Resolved catalog"
                );
                summary.resolved += 1;
            }
            Err(e) => {
                tracing::warn!(path = %location.path.display(), "{e}");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Logs to stderr, and to a daily rolling file when `L10N_CACHE_LOG_DIR` is set.
///
/// The returned guard flushes the file writer on drop.
fn setup_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match std::env::var_os(LOG_DIR_ENV) {
        Some(log_dir) => {
            let appender = tracing_appender::rolling::daily(log_dir, "l10n-json-cache.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(filter).with(stderr_layer).with(file_layer).init();
    guard
}
