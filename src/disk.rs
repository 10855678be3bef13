/// Disk name used when none is given on the command line
pub const DEFAULT_DISK_NAME: &str = "hd0";

/// Image file attached when none is given on the command line
pub const DEFAULT_IMAGE_NAME: &str = "fat32_test0.img";

/// Directory the harness resolves image names against
pub const IMAGE_DIR: &str = "../img";

/// Partition number the harness mounts the filesystem under
pub const PARTITION: u32 = 1;

/// A disk image attached to the harness under a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualDisk {
    name: String,
    image: String,
}

impl VirtualDisk {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Disk identifier, e.g. "hd0"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Image file name without the image directory
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Image path as the harness expects it (e.g., "../img/fat32_test0.img")
    pub fn image_path(&self) -> String {
        format!("{}/{}", IMAGE_DIR, self.image)
    }

    /// Root of the mounted partition (e.g., "/hd0/1")
    pub fn mount_prefix(&self) -> String {
        format!("/{}/{}", self.name, PARTITION)
    }
}

impl Default for VirtualDisk {
    fn default() -> Self {
        Self::new(DEFAULT_DISK_NAME, DEFAULT_IMAGE_NAME)
    }
}
