//! Identification of the running machine

use crate::mappings::{lookup, Model, Platform};
use crate::modules::{ModuleListing, ModuleRegistry, ProcModules};
use crate::sysfs::{
    AttributeStore, SysfsPaths, SysfsStore, BIOS_VERSION, BOARD_VENDOR, EC_FIRMWARE_RELEASE,
    PRODUCT_NAME, PRODUCT_SERIAL,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Snapshot of everything known about the running machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// DMI product name
    pub product_name: Option<String>,
    /// DMI board vendor
    pub board_vendor: Option<String>,
    /// DMI product serial (usually root-only)
    pub product_serial: Option<String>,
    /// BIOS version
    pub bios_version: Option<String>,
    /// Embedded controller firmware release
    pub ec_firmware_release: Option<String>,
    /// Resolved platform
    pub platform: Platform,
    /// Resolved model
    pub model: Model,
    /// Whether the platform driver module is loaded
    pub module_loaded: bool,
}

impl DeviceInfo {
    /// Pretty printed JSON representation
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Resolves platform and model from DMI descriptors
///
/// Descriptors are re-read on every call.
#[derive(Debug, Clone)]
pub struct Identity<S = SysfsStore, L = ProcModules> {
    store: S,
    paths: SysfsPaths,
    registry: ModuleRegistry<L>,
}

impl Identity {
    /// Identity of the running system
    pub fn new() -> Self {
        Self::with_paths(SysfsPaths::default())
    }

    /// Identity read from the real filesystem at custom locations
    pub fn with_paths(paths: SysfsPaths) -> Self {
        let registry = ModuleRegistry::new(ProcModules::new(&paths.modules));
        Self::with_sources(SysfsStore::new(), registry, paths)
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AttributeStore, L: ModuleListing> Identity<S, L> {
    /// Identity over explicit attribute and module sources
    pub fn with_sources(store: S, registry: ModuleRegistry<L>, paths: SysfsPaths) -> Self {
        Self {
            store,
            paths,
            registry,
        }
    }

    /// Attribute store used for all reads
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Configured kernel interface locations
    pub fn paths(&self) -> &SysfsPaths {
        &self.paths
    }

    fn descriptor(&self, attribute: &str) -> Option<String> {
        let path = self.paths.dmi(attribute);
        match self.store.read(&path) {
            Ok(value) => Some(value.trim().to_string()),
            Err(e) => {
                debug!("{} unavailable: {}", path.display(), e);
                None
            }
        }
    }

    /// DMI product name
    pub fn product_name(&self) -> Option<String> {
        self.descriptor(PRODUCT_NAME)
    }

    /// DMI board vendor
    pub fn board_vendor(&self) -> Option<String> {
        self.descriptor(BOARD_VENDOR)
    }

    /// DMI product serial
    pub fn product_serial(&self) -> Option<String> {
        self.descriptor(PRODUCT_SERIAL)
    }

    /// BIOS version
    pub fn bios_version(&self) -> Option<String> {
        self.descriptor(BIOS_VERSION)
    }

    /// Embedded controller firmware release
    pub fn ec_firmware_release(&self) -> Option<String> {
        self.descriptor(EC_FIRMWARE_RELEASE)
    }

    /// Platform and model in one database lookup
    ///
    /// Unreadable descriptors compare as empty strings.
    pub fn resolve(&self) -> (Platform, Model) {
        let product = self.product_name().unwrap_or_default();
        let vendor = self.board_vendor().unwrap_or_default();
        lookup(&product, &vendor)
    }

    /// Model of the running machine, [`Model::UNKNOWN`] if unresolved
    pub fn resolve_model(&self) -> Model {
        self.resolve().1
    }

    /// Platform of the running machine, [`Platform::Unknown`] if unresolved
    pub fn resolve_platform(&self) -> Platform {
        self.resolve().0
    }

    /// Whether the driver module for the resolved platform is loaded
    pub fn is_platform_module_loaded(&self) -> bool {
        self.registry.is_loaded(self.resolve_platform())
    }

    /// Collect every descriptor and the resolution results
    pub fn info(&self) -> DeviceInfo {
        let product_name = self.product_name();
        let board_vendor = self.board_vendor();
        let (platform, model) = lookup(
            product_name.as_deref().unwrap_or_default(),
            board_vendor.as_deref().unwrap_or_default(),
        );

        DeviceInfo {
            product_name,
            board_vendor,
            product_serial: self.product_serial(),
            bios_version: self.bios_version(),
            ec_firmware_release: self.ec_firmware_release(),
            platform,
            model,
            module_loaded: self.registry.is_loaded(platform),
        }
    }
}
