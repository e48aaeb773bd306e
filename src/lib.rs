//! sdplugin-paths
//!
//! Filesystem path parsing for plugins hosted by the Stream Deck application.
//!
//! # Architecture
//!
//! The crate can be used directly from a Rust plugin, or linked into a C/C++
//! plugin through the C ABI in [`ffi`] (`cdylib` and `staticlib` builds).
//!
//! ## Path Parsing (`path` module)
//! - `file_name()` - Last path component, ignoring trailing delimiters
//! - `extension()` - Extension of the file name (`.sdPlugin`, `.png`, ...)
//! - `add_path_component()` - Join with exactly one delimiter, normalized
//! - `parent_directory_path()` - Parent that respects drive and UNC roots
//! - `is_network_drive_root()` - Detect `\\server` roots
//!
//! ## Grammars (`grammar` module)
//! - `WindowsGrammar` - `\` delimiter, `/` fallback, drive letters
//! - `PosixGrammar` - `/` delimiter
//! - `Grammar` - Run-time selection between the two
//!
//! ## Bundle Discovery (`locator` module)
//! - `PluginLocator` - Walks up from the executable to the `.sdPlugin`
//!   directory and memoizes the result
//! - `plugin_directory_path()` - Process-wide locator
//!
//! ## Process Queries (`process` module)
//! - `ExecutablePathProvider` - Injectable executable-path source
//! - `plugin_executable_path()`, `do_sleep()`

pub mod error;
pub mod ffi;
pub mod grammar;
pub mod locator;
pub mod logger;
pub mod path;
pub mod process;

pub use error::{PathResolutionError, Result};
pub use grammar::{Grammar, NativeGrammar, PathGrammar, PosixGrammar, WindowsGrammar};
pub use locator::{plugin_directory_path, PluginLocator, PLUGIN_BUNDLE_EXTENSION};
pub use path::PathUtility;
pub use process::{do_sleep, plugin_executable_path, CurrentExecutable, ExecutablePathProvider};
