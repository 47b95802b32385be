//! Slimbook model database

use super::{Model, Platform};
use log::debug;

/// One known machine, keyed by its DMI product name and board vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRecord {
    /// Exact DMI `product_name`
    pub product_name: &'static str,
    /// Exact DMI `board_vendor`
    pub board_vendor: &'static str,
    /// Platform driver family
    pub platform: Platform,
    /// Model identifier
    pub model: Model,
}

/// Complete database of known Slimbook models
///
/// (product_name, board_vendor) pairs are unique.
pub const DEVICE_DATABASE: &[DeviceRecord] = &[
    DeviceRecord { product_name: "PROX-AMD5",    board_vendor: "SLIMBOOK", platform: Platform::Qc71, model: Model::PROX_AMD5 },
    DeviceRecord { product_name: "HERO-RPL-RTX", board_vendor: "SLIMBOOK", platform: Platform::Qc71, model: Model::HERO_RPL_RTX },
];

/// Identify a machine from its DMI product name and board vendor
///
/// Comparison is exact and case-sensitive. Returns the first matching record's
/// platform and model, or `(Platform::Unknown, Model::UNKNOWN)`.
pub fn lookup(product_name: &str, board_vendor: &str) -> (Platform, Model) {
    let found = DEVICE_DATABASE
        .iter()
        .find(|record| record.product_name == product_name && record.board_vendor == board_vendor);

    match found {
        Some(record) => {
            debug!(
                "identified {:?}/{:?} as {} model {}",
                product_name, board_vendor, record.platform, record.model
            );
            (record.platform, record.model)
        }
        None => {
            debug!("no database entry for {:?}/{:?}", product_name, board_vendor);
            (Platform::Unknown, Model::UNKNOWN)
        }
    }
}

/// Database record for a model identifier
pub fn record_for(model: Model) -> Option<&'static DeviceRecord> {
    DEVICE_DATABASE.iter().find(|record| record.model == model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn test_every_record_resolves_to_itself() {
        for record in DEVICE_DATABASE {
            assert_eq!(
                lookup(record.product_name, record.board_vendor),
                (record.platform, record.model),
                "{}",
                record.product_name
            );
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = DEVICE_DATABASE
            .iter()
            .map(|r| (r.product_name, r.board_vendor))
            .collect();
        assert_eq!(keys.len(), DEVICE_DATABASE.len());
    }

    #[test]
    fn test_no_unknown_entries() {
        for record in DEVICE_DATABASE {
            assert!(!record.model.is_unknown());
            assert_ne!(record.platform, Platform::Unknown);
        }
    }

    #[rstest]
    #[case("", "")]
    #[case("HERO-RPL-RTX", "")]
    #[case("hero-rpl-rtx", "SLIMBOOK")]
    #[case("HERO-RPL-RTX", "Slimbook")]
    #[case("HERO-RPL-RTX ", "SLIMBOOK")]
    #[case("PROX-AMD5", "Notebook")]
    #[case("Standard PC (Q35 + ICH9, 2009)", "QEMU")]
    fn test_unknown_pairs(#[case] product: &str, #[case] vendor: &str) {
        assert_eq!(lookup(product, vendor), (Platform::Unknown, Model::UNKNOWN));
    }

    #[test]
    fn test_record_for() {
        let record = record_for(Model::HERO_RPL_RTX).unwrap();
        assert_eq!(record.product_name, "HERO-RPL-RTX");
        assert!(record_for(Model::UNKNOWN).is_none());
    }
}
