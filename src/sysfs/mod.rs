//! Attribute file access
//!
//! Every piece of hardware state this crate touches is a tiny kernel-exposed
//! text file: DMI descriptors under `/sys/devices/virtual/dmi/id/` and the
//! platform driver controls under `/sys/devices/platform/qc71_laptop/`.
//! [`AttributeStore`] is the single read/write primitive over those files so
//! the layers above can run against a real sysfs or an in-memory fake.

mod memory;

pub use memory::MemoryStore;

use log::{debug, trace};
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// DMI descriptor directory
pub const SYSFS_DMI: &str = "/sys/devices/virtual/dmi/id";
/// QC71 platform driver directory
pub const SYSFS_QC71: &str = "/sys/devices/platform/qc71_laptop";
/// Kernel listing of loaded modules
pub const PROC_MODULES: &str = "/proc/modules";

/// DMI product name attribute
pub const PRODUCT_NAME: &str = "product_name";
/// DMI board vendor attribute
pub const BOARD_VENDOR: &str = "board_vendor";
/// DMI product serial attribute
pub const PRODUCT_SERIAL: &str = "product_serial";
/// DMI BIOS version attribute
pub const BIOS_VERSION: &str = "bios_version";
/// DMI embedded controller firmware release attribute
pub const EC_FIRMWARE_RELEASE: &str = "ec_firmware_release";

/// Keyboard backlight red channel
pub const KBD_BACKLIGHT_RED: &str = "kbd_backlight_rgb_red";
/// Keyboard backlight green channel
pub const KBD_BACKLIGHT_GREEN: &str = "kbd_backlight_rgb_green";
/// Keyboard backlight blue channel
pub const KBD_BACKLIGHT_BLUE: &str = "kbd_backlight_rgb_blue";

/// Read/write access to single-value attribute files
///
/// Each call is one fresh open; nothing is cached and nothing is retried.
#[cfg_attr(test, mockall::automock)]
pub trait AttributeStore {
    /// Return the first line of the file at `path`, without the line terminator
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Truncate the file at `path` and write `content` verbatim
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

impl<T: AttributeStore + ?Sized> AttributeStore for &T {
    fn read(&self, path: &Path) -> io::Result<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        (**self).write(path, content)
    }
}

/// [`AttributeStore`] backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct SysfsStore;

impl SysfsStore {
    /// Create a filesystem-backed store
    pub fn new() -> Self {
        Self
    }
}

impl AttributeStore for SysfsStore {
    fn read(&self, path: &Path) -> io::Result<String> {
        let file = fs::File::open(path)?;
        let mut line = String::new();
        BufReader::new(file).read_line(&mut line)?;

        let line = strip_line_terminator(&line).to_string();
        debug!("read {}", path.display());
        trace!("{} = {:?}", path.display(), line);
        Ok(line)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        debug!("write {} <- {:?}", path.display(), content);
        fs::write(path, content)
    }
}

/// Drop a trailing `\n` or `\r\n`
pub(crate) fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Locations of the kernel interfaces this crate reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsPaths {
    /// DMI descriptor directory
    pub dmi_root: PathBuf,
    /// QC71 platform driver directory
    pub qc71_root: PathBuf,
    /// Loaded module listing
    pub modules: PathBuf,
}

impl Default for SysfsPaths {
    fn default() -> Self {
        Self {
            dmi_root: PathBuf::from(SYSFS_DMI),
            qc71_root: PathBuf::from(SYSFS_QC71),
            modules: PathBuf::from(PROC_MODULES),
        }
    }
}

impl SysfsPaths {
    /// Default paths re-rooted below `prefix`
    ///
    /// `SysfsPaths::under("/tmp/fake")` reads descriptors from
    /// `/tmp/fake/sys/devices/virtual/dmi/id/` and so on.
    pub fn under(prefix: impl AsRef<Path>) -> Self {
        let prefix = prefix.as_ref();
        let reroot = |p: &str| prefix.join(p.trim_start_matches('/'));

        Self {
            dmi_root: reroot(SYSFS_DMI),
            qc71_root: reroot(SYSFS_QC71),
            modules: reroot(PROC_MODULES),
        }
    }

    /// Path of a DMI descriptor attribute
    pub fn dmi(&self, attribute: &str) -> PathBuf {
        self.dmi_root.join(attribute)
    }

    /// Path of a QC71 platform driver attribute
    pub fn qc71(&self, attribute: &str) -> PathBuf {
        self.qc71_root.join(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_returns_first_line_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "HERO-RPL-RTX\nsecond line\n").unwrap();

        let value = SysfsStore::new().read(file.path()).unwrap();
        assert_eq!(value, "HERO-RPL-RTX");
    }

    #[test]
    fn test_read_without_trailing_newline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "SLIMBOOK").unwrap();

        assert_eq!(SysfsStore::new().read(file.path()).unwrap(), "SLIMBOOK");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = SysfsStore::new().read(&dir.path().join("product_serial"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_write_truncates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0xffffff").unwrap();

        SysfsStore::new().write(file.path(), "0x0a").unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "0x0a");
    }

    #[test]
    fn test_paths_under_prefix() {
        let paths = SysfsPaths::under("/tmp/root");
        assert_eq!(
            paths.dmi(PRODUCT_NAME),
            PathBuf::from("/tmp/root/sys/devices/virtual/dmi/id/product_name")
        );
        assert_eq!(
            paths.qc71(KBD_BACKLIGHT_BLUE),
            PathBuf::from("/tmp/root/sys/devices/platform/qc71_laptop/kbd_backlight_rgb_blue")
        );
        assert_eq!(paths.modules, PathBuf::from("/tmp/root/proc/modules"));
    }

    #[test]
    fn test_strip_line_terminator() {
        assert_eq!(strip_line_terminator("abc\r\n"), "abc");
        assert_eq!(strip_line_terminator("abc\n"), "abc");
        assert_eq!(strip_line_terminator("abc"), "abc");
    }
}
