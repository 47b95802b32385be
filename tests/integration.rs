use pretty_assertions::assert_eq;
use slimbook::{
    BacklightController, Identity, Model, Platform, RgbColor, SlimbookError, SysfsPaths,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MODULES: &str = "\
qc71_laptop 61440 0 - Live 0x0000000000000000
snd_hda_intel 61440 4 - Live 0x0000000000000000
";

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Build a fake sysfs/procfs tree for a machine
fn fake_machine(product: &str, vendor: &str, modules: &str) -> (TempDir, SysfsPaths) {
    let root = tempfile::tempdir().unwrap();
    let paths = SysfsPaths::under(root.path());

    write(&paths.dmi("product_name"), &format!("{}\n", product));
    write(&paths.dmi("board_vendor"), &format!("{}\n", vendor));
    write(&paths.dmi("bios_version"), "1.07.08RSL4\n");
    write(&paths.modules, modules);
    for channel in ["red", "green", "blue"] {
        write(&paths.qc71(&format!("kbd_backlight_rgb_{}", channel)), "0x00\n");
    }

    (root, paths)
}

#[test]
fn test_identifies_hero() {
    let (_root, paths) = fake_machine("HERO-RPL-RTX", "SLIMBOOK", MODULES);
    let identity = Identity::with_paths(paths);

    assert_eq!(identity.resolve_platform(), Platform::Qc71);
    assert_eq!(identity.resolve_model(), Model::HERO_RPL_RTX);
    assert!(identity.is_platform_module_loaded());
    assert_eq!(identity.product_serial(), None);
}

#[test]
fn test_unknown_machine() {
    let (_root, paths) = fake_machine("Standard PC (Q35 + ICH9, 2009)", "QEMU", MODULES);
    let identity = Identity::with_paths(paths.clone());

    assert_eq!(identity.resolve(), (Platform::Unknown, Model::UNKNOWN));
    assert!(!identity.is_platform_module_loaded());

    let err = BacklightController::with_paths(paths).get(Model::UNKNOWN).unwrap_err();
    assert!(matches!(err, SlimbookError::NotFound(_)));
}

#[test]
fn test_module_not_loaded() {
    let (_root, paths) = fake_machine("HERO-RPL-RTX", "SLIMBOOK", "snd_hda_intel 1 0 - Live 0x0\n");
    assert!(!Identity::with_paths(paths).is_platform_module_loaded());
}

#[test]
fn test_backlight_round_trip_on_disk() {
    let (_root, paths) = fake_machine("HERO-RPL-RTX", "SLIMBOOK", MODULES);
    let backlight = BacklightController::with_paths(paths.clone());

    backlight.set(Model::UNKNOWN, RgbColor::new(0x0A1B2C)).unwrap();

    assert_eq!(fs::read_to_string(paths.qc71("kbd_backlight_rgb_red")).unwrap(), "0x0a");
    assert_eq!(fs::read_to_string(paths.qc71("kbd_backlight_rgb_green")).unwrap(), "0x1b");
    assert_eq!(fs::read_to_string(paths.qc71("kbd_backlight_rgb_blue")).unwrap(), "0x2c");
    assert_eq!(backlight.get(Model::UNKNOWN).unwrap(), RgbColor::new(0x0A1B2C));
}

#[test]
fn test_missing_channel_is_io_failure() {
    let (_root, paths) = fake_machine("HERO-RPL-RTX", "SLIMBOOK", MODULES);
    fs::remove_file(paths.qc71("kbd_backlight_rgb_green")).unwrap();

    let err = BacklightController::with_paths(paths).get(Model::UNKNOWN).unwrap_err();
    assert!(matches!(err, SlimbookError::IoFailure { .. }));
    assert_eq!(err.errno(), libc::EIO);
}

#[test]
fn test_info_report() {
    let (_root, paths) = fake_machine("PROX-AMD5", "SLIMBOOK", MODULES);
    let info = Identity::with_paths(paths).info();

    assert_eq!(info.product_name.as_deref(), Some("PROX-AMD5"));
    assert_eq!(info.bios_version.as_deref(), Some("1.07.08RSL4"));
    assert_eq!(info.platform, Platform::Qc71);
    assert_eq!(info.model, Model::PROX_AMD5);
    assert!(info.module_loaded);
}
