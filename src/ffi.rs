//! FFI (Foreign Function Interface) bindings for native plugins.
//!
//! Exposes the path helpers through C-compatible functions so a C or C++
//! plugin can link the `cdylib`/`staticlib` build instead of carrying its own
//! path parsing. All functions use the native grammar.
//!
//! # Memory Management
//!
//! - Returned strings are allocated by Rust
//! - The caller MUST release them with `sdpaths_free_string`
//! - Strings are null-terminated UTF-8
//! - Null or non-UTF-8 arguments yield a null result (or 0 for booleans)
//!
//! # Usage from C++
//!
//! ```cpp
//! char* name = sdpaths_get_file_name("C:\\Plugins\\icon.png");
//! std::string fileName(name ? name : "");
//! sdpaths_free_string(name);
//! ```

use crate::error::{PathResolutionError, Result};
use crate::path as paths;
use crate::{locator, logger, process};
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr;

// ============================================================================
// Path Parsing
// ============================================================================

/// Last component of a path.
/// Caller MUST call sdpaths_free_string() when done.
#[no_mangle]
pub extern "C" fn sdpaths_get_file_name(path: *const c_char) -> *mut c_char {
    match c_char_to_str(path) {
        Ok(p) => string_to_c_char(&paths::file_name(p)),
        Err(_) => ptr::null_mut(),
    }
}

/// Extension of a path's file name, including the dot, or "".
/// Caller MUST call sdpaths_free_string() when done.
#[no_mangle]
pub extern "C" fn sdpaths_get_extension(path: *const c_char) -> *mut c_char {
    match c_char_to_str(path) {
        Ok(p) => string_to_c_char(&paths::extension(p)),
        Err(_) => ptr::null_mut(),
    }
}

/// Joins a component onto a path with the platform delimiter.
/// Caller MUST call sdpaths_free_string() when done.
#[no_mangle]
pub extern "C" fn sdpaths_add_path_component(
    path: *const c_char,
    component: *const c_char,
) -> *mut c_char {
    match (c_char_to_str(path), c_char_to_str(component)) {
        (Ok(p), Ok(c)) => string_to_c_char(&paths::add_path_component(p, c)),
        _ => ptr::null_mut(),
    }
}

/// Parent directory of a path, or "" if it has none.
/// Caller MUST call sdpaths_free_string() when done.
#[no_mangle]
pub extern "C" fn sdpaths_get_parent_directory_path(path: *const c_char) -> *mut c_char {
    match c_char_to_str(path) {
        Ok(p) => string_to_c_char(&paths::parent_directory_path(p)),
        Err(_) => ptr::null_mut(),
    }
}

/// Returns 1 for a network server root (`\\server`), 0 otherwise.
#[no_mangle]
pub extern "C" fn sdpaths_is_network_drive_root(path: *const c_char) -> c_int {
    match c_char_to_str(path) {
        Ok(p) => paths::is_network_drive_root(p) as c_int,
        Err(_) => 0,
    }
}

// ============================================================================
// Process Paths
// ============================================================================

/// Bundle root of the running plugin, or "" if none was found.
/// Returns null if the executable path could not be queried.
/// Caller MUST call sdpaths_free_string() when done.
#[no_mangle]
pub extern "C" fn sdpaths_get_plugin_directory_path() -> *mut c_char {
    match locator::plugin_directory_path() {
        Ok(found) => string_to_c_char(found.as_deref().unwrap_or("")),
        Err(e) => {
            log::error!("Error resolving plugin directory: {e}");
            ptr::null_mut()
        }
    }
}

/// Absolute path of the running executable, or null on failure.
/// Caller MUST call sdpaths_free_string() when done.
#[no_mangle]
pub extern "C" fn sdpaths_get_plugin_executable_path() -> *mut c_char {
    match process::plugin_executable_path() {
        Ok(exe) => string_to_c_char(&exe),
        Err(e) => {
            log::error!("Error querying executable path: {e}");
            ptr::null_mut()
        }
    }
}

/// Blocks the calling thread. Negative durations are treated as zero.
#[no_mangle]
pub extern "C" fn sdpaths_sleep(milliseconds: c_int) {
    process::do_sleep(u64::try_from(milliseconds).unwrap_or(0));
}

/// Installs the stderr logger. Returns 1 if installed, 0 if a logger
/// already existed.
#[no_mangle]
pub extern "C" fn sdpaths_init_logging(verbose: c_int) -> c_int {
    logger::init(verbose != 0) as c_int
}

// ============================================================================
// String Management
// ============================================================================

/// Free a string returned by FFI functions.
#[no_mangle]
pub extern "C" fn sdpaths_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn c_char_to_str<'a>(s: *const c_char) -> Result<&'a str> {
    if s.is_null() {
        return Err(PathResolutionError::InvalidArgument("null string"));
    }
    unsafe { CStr::from_ptr(s) }
        .to_str()
        .map_err(|_| PathResolutionError::InvalidArgument("string is not valid UTF-8"))
}

fn string_to_c_char(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(s: *mut c_char) -> Option<String> {
        if s.is_null() {
            return None;
        }
        let owned = unsafe { CStr::from_ptr(s) }.to_string_lossy().into_owned();
        sdpaths_free_string(s);
        Some(owned)
    }

    #[test]
    fn test_file_name_round_trip() {
        let input = CString::new("plugins/icon.png").unwrap();
        assert_eq!(take(sdpaths_get_file_name(input.as_ptr())).as_deref(), Some("icon.png"));
    }

    #[test]
    fn test_extension() {
        let input = CString::new("archive.tar.gz").unwrap();
        assert_eq!(take(sdpaths_get_extension(input.as_ptr())).as_deref(), Some(".gz"));
    }

    #[test]
    fn test_add_component_uses_native_delimiter() {
        let base = CString::new("base").unwrap();
        let comp = CString::new("icon.png").unwrap();
        let joined = take(sdpaths_add_path_component(base.as_ptr(), comp.as_ptr())).unwrap();
        assert_eq!(joined, format!("base{}icon.png", paths::delimiter_char()));
    }

    #[test]
    fn test_null_arguments() {
        assert!(sdpaths_get_file_name(ptr::null()).is_null());
        assert!(sdpaths_get_parent_directory_path(ptr::null()).is_null());
        let comp = CString::new("x").unwrap();
        assert!(sdpaths_add_path_component(ptr::null(), comp.as_ptr()).is_null());
        assert_eq!(sdpaths_is_network_drive_root(ptr::null()), 0);
        sdpaths_free_string(ptr::null_mut());
    }

    #[test]
    fn test_network_root_flag() {
        let root = CString::new("//server").unwrap();
        assert_eq!(sdpaths_is_network_drive_root(root.as_ptr()), 1);
    }

    #[test]
    fn test_non_utf8_argument_yields_null() {
        let invalid = CStr::from_bytes_with_nul(b"\xff\0").unwrap();
        assert!(sdpaths_get_file_name(invalid.as_ptr()).is_null());
        assert!(sdpaths_get_extension(invalid.as_ptr()).is_null());
        assert_eq!(sdpaths_is_network_drive_root(invalid.as_ptr()), 0);
    }

    #[test]
    fn test_plugin_directory_outside_bundle_is_empty() {
        // The test binary does not live inside a .sdPlugin directory
        assert_eq!(take(sdpaths_get_plugin_directory_path()), Some(String::new()));
    }

    #[test]
    fn test_executable_path_is_returned() {
        assert!(take(sdpaths_get_plugin_executable_path()).is_some());
    }
}
