//! 把模拟磁盘导出为原始镜像文件

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use block_dev::{BlockDevice, Error, Result};
use emulated_disk::EmulatedDisk;

use crate::BlockFile;

/// 镜像包含的扇区数。
///
/// 设定了容量时取容量，否则截止到最后一个已写入的扇区。
pub fn image_sectors(disk: &EmulatedDisk) -> usize {
    disk.capacity().unwrap_or_else(|| {
        disk.lbas()
            .last()
            .map_or(0, |&lba| usize::from(lba) + 1)
    })
}

/// 把已写入的扇区逐个复制到 `dev`，返回复制的扇区数。
/// 未写入的扇区不会被触碰。
pub fn copy_sectors(disk: &EmulatedDisk, dev: &dyn BlockDevice) -> Result<usize> {
    if dev.block_size() != disk.sector_size() {
        return Err(Error::BufferSize {
            expected: disk.sector_size(),
            actual: dev.block_size(),
        });
    }

    let lbas = disk.lbas();
    let mut buf = vec![0; disk.sector_size()];
    for &lba in &lbas {
        disk.sector_read(lba, &mut buf)?;
        dev.write_block(lba.into(), &buf)?;
    }

    Ok(lbas.len())
}

/// 写出镜像文件，返回文件的字节数
pub fn export(disk: &EmulatedDisk, path: &Path) -> io::Result<u64> {
    let size = image_sectors(disk) as u64 * disk.sector_size() as u64;

    let fd = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    // 空洞部分由文件系统补零
    fd.set_len(size)?;

    let image = BlockFile::new(fd, disk.sector_size());
    let copied = copy_sectors(disk, &image)?;
    log::info!("wrote {copied} sector(s) to {}", path.display());

    Ok(size)
}
