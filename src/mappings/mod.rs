//! Hardware database for Slimbook model identification

pub mod database;

pub use database::{lookup, record_for, DeviceRecord, DEVICE_DATABASE};

use serde::{Deserialize, Serialize};

/// Laptop platform families, each driven by its own kernel module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// Unidentified hardware
    #[default]
    Unknown,
    /// Tongfang QC71 based models
    Qc71,
    /// Clevo based models
    Clevo,
}

impl Platform {
    /// Numeric platform identifier
    pub fn raw(&self) -> u32 {
        match self {
            Platform::Unknown => 0x0000,
            Platform::Qc71 => 0x0100,
            Platform::Clevo => 0x0200,
        }
    }

    /// Kernel module that drives this platform
    pub fn module_name(&self) -> Option<&'static str> {
        match self {
            Platform::Unknown => None,
            Platform::Qc71 => Some("qc71_laptop"),
            Platform::Clevo => Some("clevo_platform"),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Unknown => write!(f, "Unknown"),
            Platform::Qc71 => write!(f, "QC71"),
            Platform::Clevo => write!(f, "Clevo"),
        }
    }
}

/// Model identifier
///
/// Format: [family:8 | variant:8]. Family bits are tested with a bitwise AND,
/// so [`Model::UNKNOWN`] (zero) belongs to no family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(u32);

impl Model {
    /// Unresolved model; also requests auto-detection in backlight calls
    pub const UNKNOWN: Model = Model(0x0000);

    /// ProX family bit
    pub const PROX: Model = Model(0x0100);
    /// ProX AMD5
    pub const PROX_AMD5: Model = Model(0x0103);

    /// Hero family bit, the models with an RGB keyboard backlight
    pub const HERO: Model = Model(0x0200);
    /// Hero RPL RTX
    pub const HERO_RPL_RTX: Model = Model(0x0201);

    const FAMILY_MASK: u32 = 0xFF00;

    /// Build a model from its numeric identifier
    pub const fn from_raw(raw: u32) -> Self {
        Model(raw)
    }

    /// Numeric model identifier
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Whether this is [`Model::UNKNOWN`]
    pub const fn is_unknown(&self) -> bool {
        self.0 == 0
    }

    /// Family bits of this model
    pub const fn family(&self) -> Model {
        Model(self.0 & Self::FAMILY_MASK)
    }

    /// Whether this model belongs to `family`
    pub const fn in_family(&self, family: Model) -> bool {
        (self.0 & family.0) > 0
    }

    /// Whether this model is a Hero
    pub const fn is_hero(&self) -> bool {
        self.in_family(Model::HERO)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

/// Whether `model` has a controllable RGB keyboard backlight
pub fn model_supports_backlight(model: Model) -> bool {
    model.is_hero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Model::HERO_RPL_RTX, true)]
    #[case(Model::HERO, true)]
    #[case(Model::PROX_AMD5, false)]
    #[case(Model::PROX, false)]
    #[case(Model::UNKNOWN, false)]
    fn test_backlight_support(#[case] model: Model, #[case] expected: bool) {
        assert_eq!(model_supports_backlight(model), expected);
    }

    #[test]
    fn test_family() {
        assert_eq!(Model::HERO_RPL_RTX.family(), Model::HERO);
        assert_eq!(Model::PROX_AMD5.family(), Model::PROX);
        assert!(Model::PROX_AMD5.in_family(Model::PROX));
        assert!(!Model::PROX_AMD5.in_family(Model::HERO));
    }

    #[test]
    fn test_module_names() {
        assert_eq!(Platform::Qc71.module_name(), Some("qc71_laptop"));
        assert_eq!(Platform::Clevo.module_name(), Some("clevo_platform"));
        assert_eq!(Platform::Unknown.module_name(), None);
        assert_eq!(Platform::default(), Platform::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(Model::HERO_RPL_RTX.to_string(), "0x0201");
        assert_eq!(Platform::Qc71.to_string(), "QC71");
    }

    #[test]
    fn test_model_serializes_as_number() {
        let json = serde_json::to_string(&Model::HERO_RPL_RTX).unwrap();
        assert_eq!(json, "513");
    }
}
