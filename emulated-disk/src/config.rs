use block_dev::{Error, Result};

use crate::SECTOR_SIZE;

/// 读取从未写入的扇区时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnwrittenRead {
    /// 当作全零扇区
    #[default]
    Zeroed,
    /// 返回 [`Error::NotWritten`]
    NotWritten,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskConfig {
    /// 每个扇区的字节数，创建后不再改变
    pub sector_size: usize,
    /// 扇区总数上限，`None` 表示不设上限
    pub capacity: Option<usize>,
    pub unwritten: UnwrittenRead,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self::new(SECTOR_SIZE)
    }
}

impl DiskConfig {
    pub const fn new(sector_size: usize) -> Self {
        Self {
            sector_size,
            capacity: None,
            unwritten: UnwrittenRead::Zeroed,
        }
    }

    pub const fn capacity(mut self, sectors: usize) -> Self {
        self.capacity = Some(sectors);
        self
    }

    pub const fn unwritten(mut self, policy: UnwrittenRead) -> Self {
        self.unwritten = policy;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.sector_size.is_power_of_two() {
            Ok(())
        } else {
            Err(Error::InvalidSectorSize(self.sector_size))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixture_drives() {
        let config = DiskConfig::default();
        assert_eq!(512, config.sector_size);
        assert_eq!(None, config.capacity);
        assert_eq!(UnwrittenRead::Zeroed, config.unwritten);
    }

    #[test]
    fn sector_size_validation() {
        assert!(DiskConfig::new(512).validate().is_ok());
        assert!(DiskConfig::new(4096).validate().is_ok());
        assert_eq!(
            Err(Error::InvalidSectorSize(0)),
            DiskConfig::new(0).validate()
        );
        assert_eq!(
            Err(Error::InvalidSectorSize(500)),
            DiskConfig::new(500).validate()
        );
    }
}
