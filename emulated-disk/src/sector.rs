//! 扇区的抽象

use derive_more::{Add, From, Into};

/// 扇区号，即 LBA
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Add, From, Into)]
#[repr(transparent)]
pub struct SectorId(usize);

impl core::ops::Add<usize> for SectorId {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        self + Self(rhs)
    }
}

impl From<u32> for SectorId {
    fn from(lba: u32) -> Self {
        Self(lba as usize)
    }
}

impl core::fmt::Display for SectorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

impl SectorId {
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// 向后偏移 `count` 个扇区，溢出时返回 `None`
    pub const fn checked_add(self, count: usize) -> Option<Self> {
        match self.0.checked_add(count) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

/// 内存中的扇区
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Sector {
    /// 扇区数据，长度恒为磁盘的扇区大小
    pub data: Box<[u8]>,
    /// 最近一次写入时携带的标志
    pub flag: bool,
}

impl Sector {
    pub fn new(data: &[u8], flag: bool) -> Self {
        Self {
            data: data.into(),
            flag,
        }
    }

    /// 原地覆盖，复用已分配的缓冲区
    pub fn overwrite(&mut self, data: &[u8], flag: bool) {
        self.data.copy_from_slice(data);
        self.flag = flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_id_arithmetic() {
        let lba = SectorId::new(32);
        assert_eq!(SectorId::new(33), lba + 1);
        assert_eq!(SectorId::new(544), lba + SectorId::new(512));
        assert_eq!(None, SectorId::new(usize::MAX).checked_add(1));
        assert_eq!(Some(SectorId::new(479)), SectorId::from(478u32).checked_add(1));

        let raw: usize = SectorId::new(479).into();
        assert_eq!(479, raw);
    }

    #[test]
    fn overwrite_in_place() {
        let mut sector = Sector::new(&[0xAA; 8], true);
        assert!(sector.flag);

        sector.overwrite(&[0; 8], false);
        assert_eq!([0; 8].as_slice(), &*sector.data);
        assert!(!sector.flag);
        assert_eq!(8, sector.data.len());
    }
}
