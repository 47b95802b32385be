//! # slimbook - Slimbook laptop identification and control
//!
//! A small Rust library that tells which Slimbook model it is running on,
//! from the firmware DMI descriptors the kernel exposes in sysfs, and drives
//! the RGB keyboard backlight of the models that have one.
//!
//! ## Features
//!
//! - **Model database** keyed by exact DMI product name and board vendor
//! - **Platform driver check** against the loaded kernel module list
//! - **RGB keyboard backlight** get/set through the QC71 driver attributes
//! - **Pluggable attribute store** for running against fake sysfs trees
//! - **JSON export** of the identification report
//!
//! ## Quick Start
//!
//! ```no_run
//! use slimbook::{Model, RgbColor};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     println!("model {} on platform {}", slimbook::model(), slimbook::platform());
//!     slimbook::kbd_backlight_set(Model::UNKNOWN, RgbColor::new(0xff8000))?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod backlight;
pub mod error;
pub mod identity;
pub mod mappings;
pub mod modules;
pub mod sysfs;

// Re-export main API for easy access
pub use api::{
    bios_version, board_vendor, device_info, ec_firmware_release, is_module_loaded,
    kbd_backlight_get, kbd_backlight_set, model, platform, product_name, product_serial,
};
pub use backlight::{BacklightController, RgbColor};
pub use error::{Result, SlimbookError};
pub use identity::{DeviceInfo, Identity};
pub use mappings::{lookup, model_supports_backlight, DeviceRecord, Model, Platform};
pub use modules::ModuleRegistry;
pub use sysfs::{AttributeStore, MemoryStore, SysfsPaths, SysfsStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
///
/// # Example
///
/// ```no_run
/// println!("Using slimbook v{}", slimbook::version());
/// ```
pub fn version() -> &'static str {
    VERSION
}


/// Prelude module for convenient imports
///
/// # Example
///
/// ```no_run
/// use slimbook::prelude::*;
///
/// let identity = Identity::new();
/// println!("{}", identity.resolve_model());
/// ```
pub mod prelude {
    pub use crate::backlight::{BacklightController, RgbColor};
    pub use crate::error::{Result, SlimbookError};
    pub use crate::identity::{DeviceInfo, Identity};
    pub use crate::mappings::{model_supports_backlight, Model, Platform};
    pub use crate::sysfs::{AttributeStore, SysfsPaths};
    pub use crate::version;
}
