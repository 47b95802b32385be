//! High-level API over the running system
//!
//! Thin wrappers that build an [`Identity`] or [`BacklightController`] on the
//! default sysfs locations for each call.

use crate::backlight::{BacklightController, RgbColor};
use crate::error::Result;
use crate::identity::{DeviceInfo, Identity};
use crate::mappings::{Model, Platform};

/// DMI product name of the running machine
pub fn product_name() -> Option<String> {
    Identity::new().product_name()
}

/// DMI board vendor of the running machine
pub fn board_vendor() -> Option<String> {
    Identity::new().board_vendor()
}

/// DMI product serial of the running machine
pub fn product_serial() -> Option<String> {
    Identity::new().product_serial()
}

/// BIOS version of the running machine
pub fn bios_version() -> Option<String> {
    Identity::new().bios_version()
}

/// Embedded controller firmware release of the running machine
pub fn ec_firmware_release() -> Option<String> {
    Identity::new().ec_firmware_release()
}

/// Model of the running machine
pub fn model() -> Model {
    Identity::new().resolve_model()
}

/// Platform of the running machine
pub fn platform() -> Platform {
    Identity::new().resolve_platform()
}

/// Whether the platform driver of the running machine is loaded
pub fn is_module_loaded() -> bool {
    Identity::new().is_platform_module_loaded()
}

/// Full identification report of the running machine
pub fn device_info() -> DeviceInfo {
    Identity::new().info()
}

/// Keyboard backlight colour; pass [`Model::UNKNOWN`] to auto-detect
pub fn kbd_backlight_get(model: Model) -> Result<RgbColor> {
    BacklightController::new().get(model)
}

/// Set the keyboard backlight colour; pass [`Model::UNKNOWN`] to auto-detect
pub fn kbd_backlight_set(model: Model, value: RgbColor) -> Result<()> {
    BacklightController::new().set(model, value)
}
