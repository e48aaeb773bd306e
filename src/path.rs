//! String-level path parsing.
//!
//! Everything here works on `&str` and never touches the filesystem. Inputs
//! are treated as opaque byte strings; the only characters inspected are the
//! grammar's delimiters, `:` and `.`, all of them ASCII, so slicing at their
//! positions is always on a char boundary.
//!
//! Malformed input never fails: each operation resolves to a defined string,
//! often the input itself or an empty string.
//!
//! # Example
//!
//! ```
//! use sdplugin_paths::{PathUtility, WindowsGrammar};
//!
//! let paths = PathUtility::new(WindowsGrammar);
//! assert_eq!(paths.file_name(r"C:\Users\me\"), "me");
//! assert_eq!(paths.parent_directory_path(r"C:\Users\me"), r"C:\Users");
//! assert_eq!(paths.add_path_component(r"C:\Plugins", "icon.png"), r"C:\Plugins\icon.png");
//! ```

use crate::grammar::{NativeGrammar, PathGrammar};

/// True if `prefix` is non-empty and `s` starts with it (byte-wise).
///
/// An empty prefix never matches.
pub fn has_prefix(s: &str, prefix: &str) -> bool {
    !prefix.is_empty() && s.as_bytes().starts_with(prefix.as_bytes())
}

/// True if `suffix` is non-empty and `s` ends with it (byte-wise).
pub fn has_suffix(s: &str, suffix: &str) -> bool {
    !suffix.is_empty() && s.as_bytes().ends_with(suffix.as_bytes())
}

/// Path operations bound to one [`PathGrammar`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PathUtility<G = NativeGrammar> {
    grammar: G,
}

impl<G: PathGrammar> PathUtility<G> {
    pub fn new(grammar: G) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    pub fn delimiter_char(&self) -> char {
        self.grammar.delimiter()
    }

    fn is_drive_root(&self, path: &str) -> bool {
        self.grammar
            .drive_root_suffix()
            .is_some_and(|suffix| has_suffix(path, &suffix))
    }

    fn is_bare_drive(&self, path: &str) -> bool {
        self.grammar.has_drive_letters() && has_suffix(path, ":")
    }

    /// True for `\\server` and `\\server\`, false for `\\server\share`.
    ///
    /// Falls back to `//` when the path contains no platform delimiter.
    pub fn is_network_drive_root(&self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }

        let delimiter = self.grammar.scan_delimiter(path);
        let network_prefix: String = [delimiter, delimiter].iter().collect();
        if !has_prefix(path, &network_prefix) {
            return false;
        }

        let server = &path[network_prefix.len()..];
        match server.find(delimiter) {
            None => true,
            // Only a single trailing delimiter is allowed after the server name
            Some(pos) => pos + delimiter.len_utf8() == server.len(),
        }
    }

    /// Returns the last component of `path`.
    ///
    /// Trailing delimiters are ignored, a drive root (`C:\`) is returned as
    /// is, and a path made only of delimiters yields the delimiter itself.
    pub fn file_name(&self, path: &str) -> String {
        if self.is_drive_root(path) {
            return path.to_string();
        }

        let delimiter = self.grammar.scan_delimiter(path);
        if !path.contains(delimiter) {
            return path.to_string();
        }

        let delimiter_len = delimiter.len_utf8();
        let mut trimmed = path;
        while trimmed.len() > delimiter_len && trimmed.ends_with(delimiter) {
            trimmed = &trimmed[..trimmed.len() - delimiter_len];
        }

        if trimmed.is_empty() || trimmed.chars().eq(std::iter::once(delimiter)) {
            return delimiter.to_string();
        }

        match trimmed.rfind(delimiter) {
            Some(pos) => trimmed[pos + delimiter_len..].to_string(),
            None => trimmed.to_string(),
        }
    }

    /// Extension of the file name including the dot (`".gz"`), or an empty
    /// string. A trailing dot is not an extension.
    pub fn extension(&self, path: &str) -> String {
        let file_name = self.file_name(path);
        match file_name.rfind('.') {
            Some(pos) if pos + 1 != file_name.len() => file_name[pos..].to_string(),
            _ => String::new(),
        }
    }

    /// Joins `component` onto `path` with exactly one delimiter between them.
    ///
    /// The result always uses the platform delimiter. An empty `component`
    /// adds nothing.
    pub fn add_path_component(&self, path: &str, component: &str) -> String {
        if path.is_empty() {
            return component.to_string();
        }

        let delimiter = self.grammar.delimiter();
        let path_ends_with_delimiter = path
            .chars()
            .next_back()
            .is_some_and(|c| self.grammar.is_delimiter(c));
        let leading = component
            .chars()
            .next()
            .filter(|&c| self.grammar.is_delimiter(c));

        let mut result = String::with_capacity(path.len() + component.len() + 1);
        result.push_str(path);
        match (path_ends_with_delimiter, leading) {
            _ if component.is_empty() => {}
            (true, Some(c)) => result.push_str(&component[c.len_utf8()..]),
            (true, None) | (false, Some(_)) => result.push_str(component),
            (false, None) => {
                result.push(delimiter);
                result.push_str(component);
            }
        }

        let fallback = self.grammar.fallback_delimiter();
        if fallback == delimiter {
            result
        } else {
            result.replace(fallback, delimiter.encode_utf8(&mut [0; 4]))
        }
    }

    /// Returns the directory containing `path`.
    ///
    /// Drive roots and network server roots are their own parent. A single
    /// top-level component has no parent and yields an empty string, except
    /// a bare drive (`C:`) which yields its root (`C:\`).
    pub fn parent_directory_path(&self, path: &str) -> String {
        if self.is_drive_root(path) || self.is_network_drive_root(path) {
            return path.to_string();
        }

        let delimiter = self.grammar.scan_delimiter(path);
        let trimmed = path.trim_end_matches(delimiter);
        if trimmed.is_empty() {
            return String::new();
        }

        let Some(pos) = trimmed.rfind(delimiter) else {
            if self.is_bare_drive(trimmed) {
                return format!("{trimmed}{}", self.grammar.delimiter());
            }
            return String::new();
        };

        let parent = &trimmed[..pos];
        if self.is_drive_root(parent) {
            return parent.to_string();
        }
        if self.is_bare_drive(parent) {
            return format!("{parent}{}", self.grammar.delimiter());
        }

        parent.trim_end_matches(delimiter).to_string()
    }
}

/// The platform delimiter of the native grammar.
pub fn delimiter_char() -> char {
    PathUtility::<NativeGrammar>::default().delimiter_char()
}

/// True if `path` is a network server root such as `\\server`.
pub fn is_network_drive_root(path: &str) -> bool {
    PathUtility::<NativeGrammar>::default().is_network_drive_root(path)
}

/// Last component of `path`, using the native grammar.
pub fn file_name(path: &str) -> String {
    PathUtility::<NativeGrammar>::default().file_name(path)
}

/// Extension of the file name in `path`, including the dot, or `""`.
pub fn extension(path: &str) -> String {
    PathUtility::<NativeGrammar>::default().extension(path)
}

/// Joins `component` onto `path` with the native delimiter.
pub fn add_path_component(path: &str, component: &str) -> String {
    PathUtility::<NativeGrammar>::default().add_path_component(path, component)
}

/// Parent directory of `path`, or `""` if it has none.
pub fn parent_directory_path(path: &str) -> String {
    PathUtility::<NativeGrammar>::default().parent_directory_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{PosixGrammar, WindowsGrammar};

    fn win() -> PathUtility<WindowsGrammar> {
        PathUtility::new(WindowsGrammar)
    }

    fn posix() -> PathUtility<PosixGrammar> {
        PathUtility::new(PosixGrammar)
    }

    #[test]
    fn test_prefix_and_suffix() {
        assert!(has_prefix("abc", "ab"));
        assert!(!has_prefix("abc", ""));
        assert!(!has_prefix("a", "ab"));
        assert!(has_suffix("abc", "bc"));
        assert!(!has_suffix("abc", ""));
        assert!(!has_suffix("", ""));
    }

    #[test]
    fn test_network_drive_root() {
        let paths = win();
        assert!(paths.is_network_drive_root(r"\\server"));
        assert!(paths.is_network_drive_root(r"\\server\"));
        assert!(!paths.is_network_drive_root(r"\\server\share"));
        assert!(!paths.is_network_drive_root(r"\\server\share\"));
        assert!(paths.is_network_drive_root("//server"));
        assert!(!paths.is_network_drive_root("//server/share"));
        assert!(!paths.is_network_drive_root(r"C:\server"));
        assert!(!paths.is_network_drive_root(""));
    }

    #[test]
    fn test_file_name() {
        let paths = win();
        assert_eq!(paths.file_name(r"C:\Users\me\"), "me");
        assert_eq!(paths.file_name(r"C:\Users\me"), "me");
        assert_eq!(paths.file_name(r"C:\"), r"C:\");
        assert_eq!(paths.file_name("C:/Users/me//"), "me");
        assert_eq!(paths.file_name("plain.txt"), "plain.txt");
        assert_eq!(paths.file_name(r"\\\"), r"\");
        assert_eq!(paths.file_name("/"), "/");
        assert_eq!(paths.file_name(r"\\server\"), "server");
        assert_eq!(paths.file_name(""), "");
    }

    #[test]
    fn test_file_name_idempotent_on_bare_names() {
        let paths = win();
        for p in [r"C:\a\b.txt", "x/y/z", "solo", r"dir\"] {
            let once = paths.file_name(p);
            assert_eq!(paths.file_name(&once), once, "path {p}");
        }
    }

    #[test]
    fn test_extension() {
        let paths = win();
        assert_eq!(paths.extension("archive.tar.gz"), ".gz");
        assert_eq!(paths.extension("noext"), "");
        assert_eq!(paths.extension("trailing."), "");
        assert_eq!(paths.extension(r"C:\Plugins\com.example.sdPlugin\"), ".sdPlugin");
        assert_eq!(paths.extension(r"C:\dir.d\file"), "");
        assert_eq!(paths.extension(".hidden"), ".hidden");
    }

    #[test]
    fn test_add_path_component() {
        let paths = win();
        assert_eq!(paths.add_path_component(r"C:\Plugins", "icon.png"), r"C:\Plugins\icon.png");
        assert_eq!(paths.add_path_component(r"C:\Plugins\", "icon.png"), r"C:\Plugins\icon.png");
        assert_eq!(paths.add_path_component(r"C:\Plugins\", r"\icon.png"), r"C:\Plugins\icon.png");
        assert_eq!(paths.add_path_component(r"C:\Plugins", "/icon.png"), r"C:\Plugins\icon.png");
        assert_eq!(paths.add_path_component("C:/Plugins/", "/img/icon.png"), r"C:\Plugins\img\icon.png");
        assert_eq!(paths.add_path_component("", "icon.png"), "icon.png");
    }

    #[test]
    fn test_add_empty_component_adds_nothing() {
        let paths = win();
        assert_eq!(paths.add_path_component(r"C:\Plugins", ""), r"C:\Plugins");
        assert_eq!(paths.add_path_component("C:/Plugins", ""), r"C:\Plugins");
    }

    #[test]
    fn test_add_then_file_name() {
        let paths = win();
        for (p, c) in [(r"C:\Plugins", "icon.png"), ("rel", "x"), ("C:/a/b", "c.json")] {
            let joined = paths.add_path_component(p, c);
            assert!(!joined.contains('/'));
            assert_eq!(paths.file_name(&joined), c);
        }
    }

    #[test]
    fn test_parent_directory_path() {
        let paths = win();
        assert_eq!(paths.parent_directory_path(r"C:\"), r"C:\");
        assert_eq!(paths.parent_directory_path(r"C:\Users\me"), r"C:\Users");
        assert_eq!(paths.parent_directory_path(r"C:\Users\me\\"), r"C:\Users");
        assert_eq!(paths.parent_directory_path(r"C:\Users"), r"C:\");
        assert_eq!(paths.parent_directory_path("C:"), r"C:\");
        assert_eq!(paths.parent_directory_path("Users"), "");
        assert_eq!(paths.parent_directory_path(r"\"), "");
        assert_eq!(paths.parent_directory_path(r"\\server"), r"\\server");
        assert_eq!(paths.parent_directory_path(r"\\server\share"), r"\\server");
        assert_eq!(paths.parent_directory_path(r"a\\b"), "a");
        assert_eq!(paths.parent_directory_path("C:/Users/me"), "C:/Users");
        assert_eq!(paths.parent_directory_path("C:/Users"), r"C:\");
    }

    #[test]
    fn test_posix_grammar() {
        let paths = posix();
        assert_eq!(paths.delimiter_char(), '/');
        assert_eq!(paths.file_name("/usr/lib/"), "lib");
        assert_eq!(paths.file_name("/"), "/");
        assert_eq!(paths.parent_directory_path("/usr/lib"), "/usr");
        assert_eq!(paths.parent_directory_path("/usr"), "");
        assert_eq!(paths.parent_directory_path("C:"), "");
        assert_eq!(paths.add_path_component("/opt", "plugin"), "/opt/plugin");
        assert_eq!(paths.add_path_component("/opt/", "/plugin"), "/opt/plugin");
        assert_eq!(paths.file_name(r"C:\"), r"C:\");
    }
}
