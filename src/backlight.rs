//! RGB keyboard backlight control
//!
//! The QC71 driver exposes one attribute file per colour channel. Each file
//! holds a single byte as hex text (`0x0a`). A colour is read or written as
//! three sequential file accesses, red, green, then blue.
//!
//! Writes are not atomic: if a later channel fails the earlier ones keep
//! their new values and the call reports [`SlimbookError::IoFailure`].

use crate::error::{Result, SlimbookError};
use crate::identity::Identity;
use crate::mappings::{model_supports_backlight, Model};
use crate::modules::{ModuleListing, ProcModules};
use crate::sysfs::{
    AttributeStore, SysfsPaths, SysfsStore, KBD_BACKLIGHT_BLUE, KBD_BACKLIGHT_GREEN,
    KBD_BACKLIGHT_RED,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 24-bit colour packed as `0xRRGGBB`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RgbColor(u32);

impl RgbColor {
    /// Colour from a packed value; bits above 23 are dropped
    pub const fn new(raw: u32) -> Self {
        RgbColor(raw & 0x00FF_FFFF)
    }

    /// Colour from its three channels
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        RgbColor(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Packed `0xRRGGBB` value
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Red channel (bits 16-23)
    pub const fn red(&self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green channel (bits 8-15)
    pub const fn green(&self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel (bits 0-7)
    pub const fn blue(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl From<u32> for RgbColor {
    fn from(raw: u32) -> Self {
        RgbColor::new(raw)
    }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}

impl FromStr for RgbColor {
    type Err = SlimbookError;

    /// Accepts `0a1b2c`, `#0a1b2c` and `0x0a1b2c`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.is_empty() || digits.len() > 6 {
            return Err(SlimbookError::InvalidArgument(format!(
                "expected up to 6 hex digits, got {:?}",
                s
            )));
        }

        u32::from_str_radix(digits, 16)
            .map(RgbColor::new)
            .map_err(|e| SlimbookError::InvalidArgument(format!("{:?}: {}", s, e)))
    }
}

/// Format a channel the way the driver expects it: `0x` and two hex digits
pub fn format_channel(value: u8) -> String {
    format!("0x{:02x}", value)
}

/// Parse a channel value, with or without `0x` prefix
pub fn parse_channel(text: &str) -> Option<u8> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if digits.is_empty() || digits.starts_with('+') {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

/// Reads and writes the keyboard backlight colour
#[derive(Debug, Clone)]
pub struct BacklightController<S = SysfsStore, L = ProcModules> {
    identity: Identity<S, L>,
}

impl BacklightController {
    /// Controller for the running system
    pub fn new() -> Self {
        Self::with_identity(Identity::new())
    }

    /// Controller on the real filesystem at custom locations
    pub fn with_paths(paths: SysfsPaths) -> Self {
        Self::with_identity(Identity::with_paths(paths))
    }
}

impl Default for BacklightController {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AttributeStore, L: ModuleListing> BacklightController<S, L> {
    /// Controller sharing the attribute store of `identity`
    pub fn with_identity(identity: Identity<S, L>) -> Self {
        Self { identity }
    }

    /// Identity used for auto-detection
    pub fn identity(&self) -> &Identity<S, L> {
        &self.identity
    }

    /// Resolve `model`, auto-detecting when it is [`Model::UNKNOWN`]
    fn supported_model(&self, model: Model) -> Result<Model> {
        let model = if model.is_unknown() {
            self.identity.resolve_model()
        } else {
            model
        };

        if model.is_unknown() {
            return Err(SlimbookError::NotFound(
                "unable to identify the running model".to_string(),
            ));
        }

        if !model_supports_backlight(model) {
            return Err(SlimbookError::NotFound(format!(
                "model {} has no RGB keyboard backlight",
                model
            )));
        }

        Ok(model)
    }

    fn read_channel(&self, attribute: &str) -> Result<u8> {
        let path = self.identity.paths().qc71(attribute);
        let text = self
            .identity
            .store()
            .read(&path)
            .map_err(|e| SlimbookError::io(&path, e))?;

        parse_channel(&text)
            .ok_or_else(|| SlimbookError::invalid_data(&path, format!("not a channel value: {:?}", text)))
    }

    fn write_channel(&self, attribute: &str, value: u8) -> Result<()> {
        let path = self.identity.paths().qc71(attribute);
        self.identity
            .store()
            .write(&path, &format_channel(value))
            .map_err(|e| SlimbookError::io(&path, e))
    }

    /// Current backlight colour
    ///
    /// `model` may be [`Model::UNKNOWN`] to auto-detect. Fails with
    /// [`SlimbookError::NotFound`] when the model is unresolved or has no RGB
    /// backlight, and with [`SlimbookError::IoFailure`] when any channel cannot
    /// be read or parsed.
    pub fn get(&self, model: Model) -> Result<RgbColor> {
        let model = self.supported_model(model)?;

        let red = self.read_channel(KBD_BACKLIGHT_RED)?;
        let green = self.read_channel(KBD_BACKLIGHT_GREEN)?;
        let blue = self.read_channel(KBD_BACKLIGHT_BLUE)?;

        let color = RgbColor::from_channels(red, green, blue);
        debug!("keyboard backlight of model {} is {}", model, color);
        Ok(color)
    }

    /// Set the backlight colour
    ///
    /// Same model handling as [`BacklightController::get`]. Channels are
    /// written red, green, blue; a failure stops the sequence without undoing
    /// channels already written.
    pub fn set(&self, model: Model, value: RgbColor) -> Result<()> {
        let model = self.supported_model(model)?;
        debug!("setting keyboard backlight of model {} to {}", model, value);

        let channels = [
            (KBD_BACKLIGHT_RED, value.red()),
            (KBD_BACKLIGHT_GREEN, value.green()),
            (KBD_BACKLIGHT_BLUE, value.blue()),
        ];

        for (written, (attribute, channel)) in channels.into_iter().enumerate() {
            if let Err(e) = self.write_channel(attribute, channel) {
                if written > 0 {
                    warn!("keyboard backlight left partially updated: {}", e);
                }
                return Err(e);
            }
        }

        Ok(())
    }
}
