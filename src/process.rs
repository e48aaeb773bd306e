//! Queries against the running process.

use crate::error::{PathResolutionError, Result};
use std::time::Duration;

/// Source of the running executable's absolute path.
///
/// Injected into [`crate::PluginLocator`] so the bundle search can run
/// against a fixed path in tests.
pub trait ExecutablePathProvider {
    fn executable_path(&self) -> Result<String>;
}

/// Asks the operating system via [`std::env::current_exe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentExecutable;

impl ExecutablePathProvider for CurrentExecutable {
    fn executable_path(&self) -> Result<String> {
        let path = std::env::current_exe().map_err(PathResolutionError::ExecutableUnavailable)?;
        path.into_os_string()
            .into_string()
            .map_err(|os| PathResolutionError::NonUtf8Path(os.into()))
    }
}

impl<F> ExecutablePathProvider for F
where
    F: Fn() -> Result<String>,
{
    fn executable_path(&self) -> Result<String> {
        self()
    }
}

/// Absolute path of the plugin executable currently running.
pub fn plugin_executable_path() -> Result<String> {
    CurrentExecutable.executable_path()
}

/// Blocks the calling thread for `milliseconds`.
pub fn do_sleep(milliseconds: u64) {
    std::thread::sleep(Duration::from_millis(milliseconds));
}
