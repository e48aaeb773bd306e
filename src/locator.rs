//! Discovery of the `.sdPlugin` bundle the running executable lives in.
//!
//! The host application installs every plugin as a directory named
//! `<id>.sdPlugin`; the plugin binary sits somewhere below it. Walking up
//! from the executable path until a component with that extension shows up
//! gives the bundle root, where manifests, icons and property inspectors
//! live.

use crate::error::Result;
use crate::grammar::{NativeGrammar, PathGrammar};
use crate::path::{has_suffix, PathUtility};
use crate::process::{CurrentExecutable, ExecutablePathProvider};
use parking_lot::Mutex;
use std::sync::OnceLock;

/// Extension of a plugin bundle directory.
pub const PLUGIN_BUNDLE_EXTENSION: &str = ".sdPlugin";

/// Finds and memoizes the plugin bundle root.
///
/// Only a successful match is cached. A failed search is repeated on the
/// next call, since nothing was stored.
pub struct PluginLocator<P, G = NativeGrammar> {
    provider: P,
    paths: PathUtility<G>,
    cache: Mutex<Option<String>>,
}

impl<P: ExecutablePathProvider> PluginLocator<P, NativeGrammar> {
    pub fn new(provider: P) -> Self {
        Self::with_grammar(provider, NativeGrammar::default())
    }
}

impl<P: ExecutablePathProvider, G: PathGrammar> PluginLocator<P, G> {
    pub fn with_grammar(provider: P, grammar: G) -> Self {
        Self {
            provider,
            paths: PathUtility::new(grammar),
            cache: Mutex::new(None),
        }
    }

    /// Returns the bundle root, or `None` if no ancestor of the executable
    /// is a `.sdPlugin` directory.
    ///
    /// The lock is held across the search so concurrent first calls resolve
    /// once.
    pub fn plugin_directory_path(&self) -> Result<Option<String>> {
        let mut cache = self.cache.lock();
        if let Some(cached) = cache.as_ref() {
            log::debug!("plugin directory cache hit: {cached}");
            return Ok(Some(cached.clone()));
        }

        let executable = self.provider.executable_path()?;
        log::debug!("searching plugin bundle from {executable}");

        let found = self.find_bundle_root(&executable);
        match &found {
            Some(root) => {
                log::debug!("plugin bundle found at {root}");
                *cache = Some(root.clone());
            }
            None => log::warn!("no {PLUGIN_BUNDLE_EXTENSION} directory above {executable}"),
        }
        Ok(found)
    }

    /// Walks up from `start` until a `.sdPlugin` component is found or no
    /// further parent exists.
    pub fn find_bundle_root(&self, start: &str) -> Option<String> {
        let mut candidate = start.to_string();
        while !candidate.is_empty() {
            if self.is_filesystem_root(&candidate) {
                return None;
            }

            if self.paths.extension(&candidate) == PLUGIN_BUNDLE_EXTENSION {
                return Some(candidate);
            }

            let parent = self.paths.parent_directory_path(&candidate);
            if parent == candidate {
                return None;
            }
            log::debug!("stepping up to {parent:?}");
            candidate = parent;
        }
        None
    }

    fn is_filesystem_root(&self, path: &str) -> bool {
        let grammar = self.paths.grammar();
        path.chars().eq(std::iter::once(grammar.fallback_delimiter()))
            || path.chars().eq(std::iter::once(grammar.delimiter()))
            || grammar
                .drive_root_suffix()
                .is_some_and(|suffix| has_suffix(path, &suffix))
    }

    /// Forgets a cached result.
    pub fn reset(&self) {
        *self.cache.lock() = None;
    }

    pub fn cached(&self) -> Option<String> {
        self.cache.lock().clone()
    }
}

/// Process-wide locator backed by the real executable path.
pub fn default_locator() -> &'static PluginLocator<CurrentExecutable> {
    static LOCATOR: OnceLock<PluginLocator<CurrentExecutable>> = OnceLock::new();
    LOCATOR.get_or_init(|| PluginLocator::new(CurrentExecutable))
}

/// Bundle root of the running plugin, resolved once per process.
pub fn plugin_directory_path() -> Result<Option<String>> {
    default_locator().plugin_directory_path()
}
