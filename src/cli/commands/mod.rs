//! CLI command implementations.

mod check;
mod combine;
mod config;
mod extract;
mod list;
mod route;
mod scan;

pub use check::run_check;
pub use combine::run_combine;
pub use config::run_config;
pub use extract::run_extract;
pub use list::run_list;
pub use route::run_route;
pub use scan::run_scan;

use crate::directory::DirectorySequencer;
use crate::input::InputKind;
use anyhow::{anyhow, Result};
use std::future::Future;
use std::time::Duration;

/// Drive `fut` to completion on a fresh multi-threaded runtime.
///
/// The runtime is shut down in the background afterwards, so blocking tasks
/// abandoned by a timeout do not keep the process alive.
pub fn block_on<F: Future>(fut: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let output = runtime.block_on(fut);
    runtime.shutdown_background();
    Ok(output)
}

/// Run a blocking filesystem operation on the blocking pool.
///
/// The library is synchronous; the CLI is the caller that supplies the
/// optional timeout. A timed-out task is abandoned, not interrupted.
pub(crate) async fn run_blocking<T, F>(timeout: Option<u64>, op: F) -> Result<T>
where
    F: FnOnce() -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let task = tokio::task::spawn_blocking(op);

    let joined = match timeout {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), task)
            .await
            .map_err(|_| anyhow!("Operation timed out after {}s", secs))?,
        None => task.await,
    };

    let result = joined.map_err(|e| anyhow!("Filesystem task failed: {}", e))?;
    Ok(result?)
}

/// Classify user input, expanding `~` for the path checks only.
pub(crate) fn classify_input(input: &str, sequencer: &DirectorySequencer) -> InputKind {
    let expanded = crate::config::Settings::expand_path(input);
    match InputKind::classify(&expanded.to_string_lossy(), sequencer) {
        InputKind::Text(_) => InputKind::Text(input.to_string()),
        kind => kind,
    }
}

/// Write `text` to `output`, or to stdout when no file is given.
pub(crate) fn write_text(text: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            let path = crate::config::Settings::expand_path(path);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, text)?;
            tracing::info!("Wrote {} bytes to {:?}", text.len(), path);
        }
        None => println!("{}", text),
    }
    Ok(())
}
