//! Loaded kernel module queries

use crate::mappings::Platform;
use crate::sysfs::PROC_MODULES;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Source of the kernel's loaded-module listing
#[cfg_attr(test, mockall::automock)]
pub trait ModuleListing {
    /// Full text of the listing, one module per line
    fn read_listing(&self) -> io::Result<String>;
}

/// Module listing read from `/proc/modules` (or another file of that format)
#[derive(Debug, Clone)]
pub struct ProcModules {
    path: PathBuf,
}

impl Default for ProcModules {
    fn default() -> Self {
        Self::new(PROC_MODULES)
    }
}

impl ProcModules {
    /// Listing read from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ModuleListing for ProcModules {
    fn read_listing(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// Extract module names from a listing
///
/// Each name is the first whitespace-delimited field of its line; blank lines
/// are skipped.
pub fn parse_module_list(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Answers which kernel modules are currently loaded
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry<L = ProcModules> {
    listing: L,
}

impl<L: ModuleListing> ModuleRegistry<L> {
    /// Registry over a specific listing source
    pub fn new(listing: L) -> Self {
        Self { listing }
    }

    /// Names of all loaded modules, in listing order
    ///
    /// An unreadable listing yields an empty list.
    pub fn list_loaded(&self) -> Vec<String> {
        match self.listing.read_listing() {
            Ok(text) => parse_module_list(&text),
            Err(e) => {
                warn!("cannot read loaded module list: {}", e);
                Vec::new()
            }
        }
    }

    /// Whether the driver module for `platform` is loaded
    ///
    /// Always false for [`Platform::Unknown`], without reading the listing.
    pub fn is_loaded(&self, platform: Platform) -> bool {
        let Some(expected) = platform.module_name() else {
            return false;
        };

        let loaded = self.list_loaded().iter().any(|name| name == expected);
        debug!("module {} loaded: {}", expected, loaded);
        loaded
    }
}
