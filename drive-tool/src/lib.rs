mod block_file;
pub mod image;

use std::io;

use drives::{DriveConfig, EmulatedDrive, FixtureDrive};

pub use self::block_file::BlockFile;

/// 按名称找到夹具驱动器并初始化
pub fn open(id: &str, config: DriveConfig) -> io::Result<FixtureDrive> {
    let fixture = drives::find(id).ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, format!("no fixture drive named {id:?}"))
    })?;

    let mut drive = FixtureDrive::with_config(fixture, config);
    drive.initialize()?;
    Ok(drive)
}
