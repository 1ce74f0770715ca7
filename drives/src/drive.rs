use block_dev::check_len;
use emulated_disk::{DiskConfig, EmulatedDisk, Error, Result, SectorId, UnwrittenRead};

use crate::Fixture;

/// 驱动器描述：测试框架通过它发现并操作驱动器
pub trait EmulatedDrive {
    /// 重新创建磁盘并写入镜像
    fn initialize(&mut self) -> Result<()>;

    fn print(&self);

    fn id(&self) -> &'static str;

    /// 从 `lba` 开始连续写入 `count` 个扇区，`buf` 恰好容纳 `count` 个扇区
    fn write_sectors(&self, buf: &[u8], lba: u32, count: usize) -> Result<()>;

    /// 从 `lba` 开始连续读出 `count` 个扇区
    fn read_sectors(&self, buf: &mut [u8], lba: u32, count: usize) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveConfig {
    /// 每次写扇区时传给磁盘的标志
    pub write_flag: bool,
    pub unwritten: UnwrittenRead,
    /// 磁盘扇区数上限
    pub capacity: Option<usize>,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            write_flag: true,
            unwritten: UnwrittenRead::Zeroed,
            capacity: None,
        }
    }
}

/// 由 [`Fixture`] 驱动的模拟驱动器
#[derive(Debug)]
pub struct FixtureDrive {
    fixture: &'static Fixture,
    config: DriveConfig,
    /// `initialize` 之前为空
    disk: Option<EmulatedDisk>,
}

impl FixtureDrive {
    pub fn new(fixture: &'static Fixture) -> Self {
        Self::with_config(fixture, DriveConfig::default())
    }

    pub fn with_config(fixture: &'static Fixture, config: DriveConfig) -> Self {
        Self {
            fixture,
            config,
            disk: None,
        }
    }

    pub const fn fixture(&self) -> &'static Fixture {
        self.fixture
    }

    pub const fn config(&self) -> &DriveConfig {
        &self.config
    }

    pub fn disk(&self) -> Result<&EmulatedDisk> {
        self.disk.as_ref().ok_or(Error::NotCreated)
    }

    /// 读回镜像中的每个扇区，返回内容不符的 LBA
    pub fn verify(&self) -> Result<Vec<u32>> {
        let mut buf = vec![0; self.fixture.sector_size];
        let mut mismatched = Vec::new();

        for lba in self.fixture.lbas() {
            self.read_sectors(&mut buf, lba, 1)?;
            if Some(buf.as_slice()) != self.fixture.sector(lba) {
                log::warn!("{}: LBA {lba} differs from the fixture", self.id());
                mismatched.push(lba);
            }
        }

        Ok(mismatched)
    }

    /// 检查 `count` 个扇区的缓冲区长度与 LBA 范围，任一不符则一个扇区也不读写
    fn check_span(&self, disk: &EmulatedDisk, len: usize, lba: u32, count: usize) -> Result<()> {
        let sector_size = disk.sector_size();
        let expected = count.checked_mul(sector_size).ok_or(Error::BufferSize {
            expected: usize::MAX,
            actual: len,
        })?;
        check_len(expected, len)?;

        if count == 0 {
            return Ok(());
        }
        // LBA 为 32 位，末扇区越过 u32::MAX 即越界
        let last = u32::try_from(count - 1)
            .ok()
            .and_then(|n| lba.checked_add(n))
            .map(SectorId::from)
            .ok_or(Error::OutOfRange {
                lba: lba as usize,
                capacity: u32::MAX as usize + 1,
            })?;
        match disk.capacity() {
            Some(capacity) if last.get() >= capacity => Err(Error::OutOfRange {
                lba: last.get(),
                capacity,
            }),
            _ => Ok(()),
        }
    }

    fn write_span(&self, disk: &EmulatedDisk, buf: &[u8], lba: u32, count: usize) -> Result<()> {
        self.check_span(disk, buf.len(), lba, count)?;

        let start = SectorId::from(lba);
        for (i, sector) in buf.chunks_exact(disk.sector_size()).enumerate() {
            disk.sector_write(start + i, sector, self.config.write_flag)?;
        }
        Ok(())
    }
}

impl EmulatedDrive for FixtureDrive {
    fn initialize(&mut self) -> Result<()> {
        let mut config = DiskConfig::new(self.fixture.sector_size).unwritten(self.config.unwritten);
        config.capacity = self.config.capacity;
        self.disk = None;

        // 全部扇区写入成功后才交给驱动器
        let disk = EmulatedDisk::with_config(config)?;
        for &(lba, data) in self.fixture.sectors {
            self.write_span(&disk, data, lba, 1)?;
        }
        self.disk = Some(disk);

        log::info!(
            "{}: initialized {} sector(s)",
            self.id(),
            self.fixture.sectors.len()
        );
        Ok(())
    }

    fn print(&self) {
        match &self.disk {
            Some(disk) => {
                println!("{}", self.id());
                disk.print();
            }
            None => println!("{}: disk not created", self.id()),
        }
    }

    fn id(&self) -> &'static str {
        self.fixture.id
    }

    fn write_sectors(&self, buf: &[u8], lba: u32, count: usize) -> Result<()> {
        self.write_span(self.disk()?, buf, lba, count)
    }

    fn read_sectors(&self, buf: &mut [u8], lba: u32, count: usize) -> Result<()> {
        let disk = self.disk()?;
        self.check_span(disk, buf.len(), lba, count)?;

        let start = SectorId::from(lba);
        for (i, sector) in buf.chunks_exact_mut(disk.sector_size()).enumerate() {
            disk.sector_read(start + i, sector)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{DRV048, DRV050};

    fn initialized(fixture: &'static Fixture) -> FixtureDrive {
        let mut drive = FixtureDrive::new(fixture);
        drive.initialize().unwrap();
        drive
    }

    #[test]
    fn uninitialized_access() {
        let drive = FixtureDrive::new(&DRV048);
        let mut buf = [0; 512];
        assert_eq!(Err(Error::NotCreated), drive.read_sectors(&mut buf, 0, 1));
        assert_eq!(Err(Error::NotCreated), drive.write_sectors(&buf, 0, 1));
        assert!(drive.disk().is_err());
    }

    #[test]
    fn multi_sector_equals_single_sectors() {
        let drive = initialized(&DRV050);

        let mut whole = vec![0; 3 * 512];
        drive.read_sectors(&mut whole, 32, 3).unwrap();

        let mut single = vec![0; 512];
        for (i, expected) in whole.chunks_exact(512).enumerate() {
            drive.read_sectors(&mut single, 32 + i as u32, 1).unwrap();
            assert_eq!(expected, single.as_slice());
        }
        assert_eq!(DRV050.sector(33).unwrap(), &whole[512..1024]);

        let pattern: Vec<u8> = (0..2 * 512).map(|i| (i / 512) as u8 + 0x10).collect();
        drive.write_sectors(&pattern, 100, 2).unwrap();
        drive.read_sectors(&mut single, 101, 1).unwrap();
        assert_eq!([0x11; 512].as_slice(), single.as_slice());
    }

    #[test]
    fn mismatched_buffer_writes_nothing() {
        let drive = initialized(&DRV048);
        let before = drive.disk().unwrap().lbas();

        assert_eq!(
            Err(Error::BufferSize {
                expected: 1024,
                actual: 1000
            }),
            drive.write_sectors(&[0xFF; 1000], 2, 2)
        );
        assert_eq!(before, drive.disk().unwrap().lbas());
    }

    #[test]
    fn capacity_checked_before_writing() {
        let config = DriveConfig {
            capacity: Some(480),
            ..DriveConfig::default()
        };
        let mut drive = FixtureDrive::with_config(&DRV048, config);
        drive.initialize().unwrap();

        assert_eq!(
            Err(Error::OutOfRange {
                lba: 480,
                capacity: 480
            }),
            drive.write_sectors(&[0; 1024], 479, 2)
        );
        assert_eq!(Ok(vec![]), drive.verify());
    }

    #[test]
    fn capacity_too_small_for_fixture() {
        let config = DriveConfig {
            capacity: Some(100),
            ..DriveConfig::default()
        };
        let mut drive = FixtureDrive::with_config(&DRV048, config);
        assert_eq!(
            Err(Error::OutOfRange {
                lba: 479,
                capacity: 100
            }),
            drive.initialize()
        );
        assert_eq!(Err(Error::NotCreated), drive.disk().map(|_| ()));
        assert_eq!(
            Err(Error::NotCreated),
            drive.read_sectors(&mut [0; 512], 0, 1)
        );
    }

    #[test]
    fn failed_reinitialize_drops_old_disk() {
        let mut drive = FixtureDrive::new(&DRV048);
        drive.initialize().unwrap();
        drive.config.capacity = Some(100);

        assert!(drive.initialize().is_err());
        assert_eq!(Err(Error::NotCreated), drive.disk().map(|_| ()));
    }

    #[test]
    fn span_past_last_lba() {
        let drive = initialized(&DRV048);
        let overflow = Err(Error::OutOfRange {
            lba: u32::MAX as usize,
            capacity: u32::MAX as usize + 1,
        });

        assert_eq!(overflow, drive.write_sectors(&[0x77; 1024], u32::MAX, 2));
        assert_eq!(overflow, drive.read_sectors(&mut [0; 1024], u32::MAX, 2));
        assert_eq!(
            vec![SectorId::new(0), SectorId::new(1), SectorId::new(479)],
            drive.disk().unwrap().lbas()
        );

        drive.write_sectors(&[0x77; 512], u32::MAX, 1).unwrap();
        assert!(drive.disk().unwrap().is_written(SectorId::from(u32::MAX)));
    }

    #[test]
    fn zero_count_is_noop() {
        let drive = initialized(&DRV048);
        drive.write_sectors(&[], 7, 0).unwrap();
        drive.read_sectors(&mut [], 7, 0).unwrap();
        assert_eq!(3, drive.disk().unwrap().len());
    }

    #[test]
    fn write_flag_is_forwarded() {
        let config = DriveConfig {
            write_flag: false,
            ..DriveConfig::default()
        };
        let mut drive = FixtureDrive::with_config(&DRV048, config);
        drive.initialize().unwrap();
        assert_eq!(
            Some(false),
            drive.disk().unwrap().write_flag(SectorId::new(479))
        );

        let drive = initialized(&DRV048);
        assert_eq!(
            Some(true),
            drive.disk().unwrap().write_flag(SectorId::new(0))
        );
    }

    #[test]
    fn verify_reports_tampered_sectors() {
        let drive = initialized(&DRV050);
        drive.write_sectors(&[0; 512], 513, 1).unwrap();
        assert_eq!(Ok(vec![513]), drive.verify());
    }
}
