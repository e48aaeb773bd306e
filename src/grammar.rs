//! Path grammars: which characters separate components and which roots exist.
//!
//! The path algorithms in [`crate::path`] are written once against
//! [`PathGrammar`]. Windows paths use `\` and know about drive letters
//! (`C:\`); POSIX paths use `/` and have no drive letters. Both accept `/`
//! as a fallback separator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub trait PathGrammar {
    /// The canonical separator written by this grammar.
    fn delimiter(&self) -> char;

    /// Separator accepted when the canonical one does not occur in a path.
    fn fallback_delimiter(&self) -> char {
        '/'
    }

    /// Whether `X:` / `X:\` drive roots are meaningful.
    fn has_drive_letters(&self) -> bool;

    fn is_delimiter(&self, c: char) -> bool {
        c == self.delimiter() || c == self.fallback_delimiter()
    }

    /// The separator to scan `path` with: the canonical one if the path uses
    /// it anywhere, the fallback otherwise.
    fn scan_delimiter(&self, path: &str) -> char {
        if path.contains(self.delimiter()) {
            self.delimiter()
        } else {
            self.fallback_delimiter()
        }
    }

    /// `X:\` style drive root suffix, if this grammar has drives.
    fn drive_root_suffix(&self) -> Option<String> {
        self.has_drive_letters()
            .then(|| format!(":{}", self.delimiter()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowsGrammar;

impl PathGrammar for WindowsGrammar {
    fn delimiter(&self) -> char {
        // Windows accepts both slash and backslash
        '\\'
    }

    fn has_drive_letters(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PosixGrammar;

impl PathGrammar for PosixGrammar {
    fn delimiter(&self) -> char {
        '/'
    }

    fn has_drive_letters(&self) -> bool {
        false
    }
}

/// The grammar of the platform this crate was built for.
#[cfg(windows)]
pub type NativeGrammar = WindowsGrammar;

#[cfg(not(windows))]
pub type NativeGrammar = PosixGrammar;

/// Grammar chosen at run time (CLI flag, config value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    Windows,
    Posix,
}

impl Default for Grammar {
    fn default() -> Self {
        if cfg!(windows) {
            Grammar::Windows
        } else {
            Grammar::Posix
        }
    }
}

impl PathGrammar for Grammar {
    fn delimiter(&self) -> char {
        match self {
            Grammar::Windows => WindowsGrammar.delimiter(),
            Grammar::Posix => PosixGrammar.delimiter(),
        }
    }

    fn has_drive_letters(&self) -> bool {
        match self {
            Grammar::Windows => WindowsGrammar.has_drive_letters(),
            Grammar::Posix => PosixGrammar.has_drive_letters(),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grammar::Windows => f.write_str("windows"),
            Grammar::Posix => f.write_str("posix"),
        }
    }
}

impl FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Grammar::Windows),
            "posix" | "unix" => Ok(Grammar::Posix),
            other => Err(format!("unknown path grammar: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_delimiter_falls_back_to_slash() {
        assert_eq!(WindowsGrammar.scan_delimiter(r"C:\Users"), '\\');
        assert_eq!(WindowsGrammar.scan_delimiter("C:/Users"), '/');
        assert_eq!(WindowsGrammar.scan_delimiter("plain"), '/');
        assert_eq!(PosixGrammar.scan_delimiter(r"a\b"), '/');
    }

    #[test]
    fn test_drive_root_suffix() {
        assert_eq!(WindowsGrammar.drive_root_suffix().as_deref(), Some(r":\"));
        assert_eq!(PosixGrammar.drive_root_suffix(), None);
    }

    #[test]
    fn test_grammar_parse_and_display() {
        assert_eq!("Windows".parse::<Grammar>(), Ok(Grammar::Windows));
        assert_eq!("unix".parse::<Grammar>(), Ok(Grammar::Posix));
        assert!("vms".parse::<Grammar>().is_err());
        assert_eq!(Grammar::Posix.to_string(), "posix");
    }

    #[test]
    fn test_grammar_serde_names() {
        let json = serde_json::to_string(&Grammar::Windows).unwrap();
        assert_eq!(json, "\"windows\"");
        let back: Grammar = serde_json::from_str("\"posix\"").unwrap();
        assert_eq!(back, Grammar::Posix);
    }

    #[test]
    fn test_enum_dispatch_matches_structs() {
        assert_eq!(Grammar::Windows.delimiter(), '\\');
        assert!(Grammar::Windows.has_drive_letters());
        assert_eq!(Grammar::Posix.delimiter(), '/');
        assert!(!Grammar::Posix.has_drive_letters());
    }
}
