use std::collections::BTreeMap;
use std::fmt;

use block_dev::{BlockDevice, Error, Result, check_len};
use spin::Mutex;

use crate::config::{DiskConfig, UnwrittenRead};
use crate::dump::Dump;
use crate::sector::{Sector, SectorId};

/// 内存中的稀疏磁盘
///
/// 只为写入过的扇区分配空间，其余扇区视为未写入。
pub struct EmulatedDisk {
    config: DiskConfig,
    sectors: Mutex<BTreeMap<SectorId, Sector>>,
}

impl fmt::Debug for EmulatedDisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmulatedDisk")
            .field("config", &self.config)
            .field("populated", &self.len())
            .finish()
    }
}

impl EmulatedDisk {
    /// 创建一个空磁盘，扇区大小固定为 `sector_size`
    pub fn create(sector_size: usize) -> Result<Self> {
        Self::with_config(DiskConfig::new(sector_size))
    }

    pub fn with_config(config: DiskConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sectors: Mutex::default(),
        })
    }

    pub const fn config(&self) -> &DiskConfig {
        &self.config
    }

    pub const fn sector_size(&self) -> usize {
        self.config.sector_size
    }

    pub const fn capacity(&self) -> Option<usize> {
        self.config.capacity
    }

    /// 将 `src` 写入 `lba`，已存在则覆盖。
    ///
    /// `flag` 随扇区保存，除在转储中显示外没有其它作用。
    pub fn sector_write(&self, lba: SectorId, src: &[u8], flag: bool) -> Result<()> {
        check_len(self.sector_size(), src.len())?;
        self.check_range(lba)?;

        log::debug!("write LBA {lba} (flag={flag})");
        self.sectors
            .lock()
            .entry(lba)
            .and_modify(|sector| sector.overwrite(src, flag))
            .or_insert_with(|| Sector::new(src, flag));

        Ok(())
    }

    /// 将 `lba` 处的扇区读入 `dst`
    pub fn sector_read(&self, lba: SectorId, dst: &mut [u8]) -> Result<()> {
        check_len(self.sector_size(), dst.len())?;
        self.check_range(lba)?;

        match self.sectors.lock().get(&lba) {
            Some(sector) => {
                log::debug!("read LBA {lba}");
                dst.copy_from_slice(&sector.data);
                Ok(())
            }
            None => match self.config.unwritten {
                UnwrittenRead::Zeroed => {
                    log::trace!("read unwritten LBA {lba}, zero-filled");
                    dst.fill(0);
                    Ok(())
                }
                UnwrittenRead::NotWritten => Err(Error::NotWritten(lba.into())),
            },
        }
    }

    /// 打印磁盘内容至标准输出
    pub fn print(&self) {
        println!("{}", self.dump());
    }

    pub fn dump(&self) -> Dump<'_> {
        Dump::new(self)
    }

    /// 已写入的扇区数
    pub fn len(&self) -> usize {
        self.sectors.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.lock().is_empty()
    }

    pub fn is_written(&self, lba: SectorId) -> bool {
        self.sectors.lock().contains_key(&lba)
    }

    /// 已写入扇区的 LBA，升序
    pub fn lbas(&self) -> Vec<SectorId> {
        self.sectors.lock().keys().copied().collect()
    }

    /// 最近一次写入 `lba` 时携带的标志
    pub fn write_flag(&self, lba: SectorId) -> Option<bool> {
        self.sectors.lock().get(&lba).map(|sector| sector.flag)
    }

    /// 清空全部扇区，回到刚创建时的状态
    pub fn clear(&self) {
        self.sectors.lock().clear();
    }

    /// 持锁访问全部扇区，按 LBA 升序
    pub(crate) fn with_sectors<F>(&self, f: F) -> fmt::Result
    where
        F: FnOnce(&BTreeMap<SectorId, Sector>) -> fmt::Result,
    {
        f(&self.sectors.lock())
    }

    fn check_range(&self, lba: SectorId) -> Result<()> {
        match self.config.capacity {
            Some(capacity) if lba.get() >= capacity => Err(Error::OutOfRange {
                lba: lba.get(),
                capacity,
            }),
            _ => Ok(()),
        }
    }
}

impl BlockDevice for EmulatedDisk {
    fn block_size(&self) -> usize {
        self.sector_size()
    }

    fn read_block(&self, block_id: usize, buf: &mut [u8]) -> Result<()> {
        self.sector_read(SectorId::new(block_id), buf)
    }

    fn write_block(&self, block_id: usize, buf: &[u8]) -> Result<()> {
        self.sector_write(SectorId::new(block_id), buf, true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn disk() -> EmulatedDisk {
        EmulatedDisk::create(512).unwrap()
    }

    #[test]
    fn sparse_write_read() {
        let disk = disk();
        let sector1 = vec![0x1; 512];
        let sector479 = vec![0x52; 512];

        disk.sector_write(SectorId::new(1), &sector1, true).unwrap();
        disk.sector_write(SectorId::new(479), &sector479, true)
            .unwrap();

        let mut buf = vec![0; 512];
        disk.sector_read(SectorId::new(1), &mut buf).unwrap();
        assert_eq!(sector1, buf);
        disk.sector_read(SectorId::new(479), &mut buf).unwrap();
        assert_eq!(sector479, buf);

        assert_eq!(2, disk.len());
        assert_eq!(vec![SectorId::new(1), SectorId::new(479)], disk.lbas());
        assert!(!disk.is_written(SectorId::new(2)));
    }

    #[test]
    fn unwritten_reads_zeroed_by_default() {
        let disk = disk();
        let mut buf = vec![0xFF; 512];
        disk.sector_read(SectorId::new(511), &mut buf).unwrap();
        assert_eq!(vec![0; 512], buf);
        assert!(disk.is_empty());
    }

    #[test]
    fn unwritten_reads_strict() {
        let disk =
            EmulatedDisk::with_config(DiskConfig::new(512).unwritten(UnwrittenRead::NotWritten))
                .unwrap();
        let mut buf = vec![0xFF; 512];
        assert_eq!(
            Err(Error::NotWritten(3)),
            disk.sector_read(SectorId::new(3), &mut buf)
        );
        assert_eq!(vec![0xFF; 512], buf);
    }

    #[test]
    fn last_write_wins() {
        let disk = disk();
        let mut buffer = vec![0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49];
        buffer.append(&mut vec![0; 504]);

        disk.sector_write(SectorId::new(0), &[0x42; 512], true)
            .unwrap();
        disk.sector_write(SectorId::new(0), &buffer, false).unwrap();

        let mut read = vec![0; 512];
        disk.sector_read(SectorId::new(0), &mut read).unwrap();
        assert_eq!(buffer, read);
        assert_eq!(Some(false), disk.write_flag(SectorId::new(0)));
        assert_eq!(1, disk.len());
    }

    #[test]
    fn buffer_size_mismatch() {
        let disk = disk();
        assert_eq!(
            Err(Error::BufferSize {
                expected: 512,
                actual: 511
            }),
            disk.sector_write(SectorId::new(0), &[0; 511], true)
        );
        let mut long = vec![0; 1024];
        assert_eq!(
            Err(Error::BufferSize {
                expected: 512,
                actual: 1024
            }),
            disk.sector_read(SectorId::new(0), &mut long)
        );
        assert!(disk.is_empty());
    }

    #[test]
    fn capacity_limit() {
        let disk = EmulatedDisk::with_config(DiskConfig::new(512).capacity(480)).unwrap();
        disk.sector_write(SectorId::new(479), &[0xE5; 512], true)
            .unwrap();
        assert_eq!(
            Err(Error::OutOfRange {
                lba: 480,
                capacity: 480
            }),
            disk.sector_write(SectorId::new(480), &[0xE5; 512], true)
        );
        let mut buf = [0; 512];
        assert!(disk.sector_read(SectorId::new(1000), &mut buf).is_err());
        assert_eq!(vec![SectorId::new(479)], disk.lbas());
    }

    #[test]
    fn invalid_sector_size() {
        assert_eq!(
            Err(Error::InvalidSectorSize(0)),
            EmulatedDisk::create(0).map(|_| ())
        );
    }

    #[test]
    fn clear_resets() {
        let disk = disk();
        disk.sector_write(SectorId::new(7), &[1; 512], true).unwrap();
        disk.clear();
        assert!(disk.is_empty());
        assert_eq!(None, disk.write_flag(SectorId::new(7)));
    }

    #[test]
    fn through_block_device() {
        let dev: Arc<dyn BlockDevice> = Arc::new(disk());
        assert_eq!(512, dev.block_size());

        dev.write_block(34, &[0x2E; 512]).unwrap();
        let mut buf = [0; 512];
        dev.read_block(34, &mut buf).unwrap();
        assert_eq!([0x2E; 512], buf);
    }
}
