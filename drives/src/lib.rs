//! # 夹具驱动器
//!
//! 每个驱动器拥有一块私有的 [`EmulatedDisk`]，初始化时把固定的扇区镜像
//! 写入若干 LBA。测试框架通过 [`EmulatedDrive`] 以统一的方式初始化、打印、
//! 识别驱动器，并按扇区读写。

mod drive;
pub mod fixtures;

pub use self::drive::{DriveConfig, EmulatedDrive, FixtureDrive};
pub use emulated_disk::{EmulatedDisk, Error, Result, SectorId, UnwrittenRead};

/// 驱动器镜像：在哪些 LBA 写入哪些扇区
#[derive(Debug)]
pub struct Fixture {
    /// 定宽的驱动器名，如 `DRV048`
    pub id: &'static str,
    pub sector_size: usize,
    /// 按初始化时的写入顺序排列
    pub sectors: &'static [(u32, &'static [u8])],
}

impl Fixture {
    /// 镜像写入的全部 LBA，升序
    pub fn lbas(&self) -> Vec<u32> {
        let mut lbas: Vec<_> = self.sectors.iter().map(|&(lba, _)| lba).collect();
        lbas.sort_unstable();
        lbas
    }

    pub fn sector(&self, lba: u32) -> Option<&'static [u8]> {
        self.sectors
            .iter()
            .find_map(|&(id, data)| (id == lba).then_some(data))
    }
}

/// 全部夹具
pub fn fixtures() -> &'static [&'static Fixture] {
    &fixtures::ALL
}

/// 按名称查找夹具，忽略大小写
pub fn find(id: &str) -> Option<&'static Fixture> {
    fixtures()
        .iter()
        .copied()
        .find(|fixture| fixture.id.eq_ignore_ascii_case(id))
}

/// 每个夹具对应一个尚未初始化的驱动器
pub fn drives() -> Vec<FixtureDrive> {
    fixtures().iter().copied().map(FixtureDrive::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!("DRV048", find("drv048").unwrap().id);
        assert_eq!("DRV050", find("DRV050").unwrap().id);
        assert!(find("DRV049").is_none());
    }

    #[test]
    fn fixture_sectors_are_whole() {
        for fixture in fixtures() {
            for &(lba, data) in fixture.sectors {
                assert_eq!(
                    fixture.sector_size,
                    data.len(),
                    "{} LBA {lba}",
                    fixture.id
                );
            }
        }
    }

    #[test]
    fn lbas_sorted() {
        assert_eq!(vec![0, 1, 479], fixtures::DRV048.lbas());
        assert_eq!(
            vec![0, 32, 33, 34, 272, 273, 512, 513, 544],
            fixtures::DRV050.lbas()
        );
    }
}
