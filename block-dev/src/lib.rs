//! # 块设备接口层
//!
//! 块设备是以**块**为单位存储数据的设备，例如磁盘、软盘、U盘等；
//! [`BlockDevice`] 就是对读写块设备的抽象，
//! 实现了此特质的类型称为**块设备驱动**。
//!
//! 模拟磁盘与宿主机上的镜像文件都通过此接口读写。

use std::any::Any;
use std::io;

use derive_more::Display;

pub type Result<T> = core::result::Result<T, Error>;

/// 块设备驱动特质
///
/// 一次读写恰好一个块，缓冲区长度必须等于 [`BlockDevice::block_size`]。
pub trait BlockDevice: Send + Sync + Any {
    fn block_size(&self) -> usize;
    fn read_block(&self, block_id: usize, buf: &mut [u8]) -> Result<()>;
    fn write_block(&self, block_id: usize, buf: &[u8]) -> Result<()>;
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Error {
    /// 缓冲区长度与扇区（或扇区数 × 扇区大小）不符
    #[display(fmt = "buffer holds {} bytes, expected {}", actual, expected)]
    BufferSize { expected: usize, actual: usize },

    /// LBA 超出磁盘容量，或 LBA 运算溢出
    #[display(fmt = "LBA {} is out of range (capacity {} sectors)", lba, capacity)]
    OutOfRange { lba: usize, capacity: usize },

    /// 严格模式下读取了从未写入的扇区
    #[display(fmt = "LBA {} has never been written", _0)]
    NotWritten(usize),

    /// 扇区大小必须是非零的2的幂
    #[display(fmt = "invalid sector size {}", _0)]
    InvalidSectorSize(usize),

    /// 驱动器尚未初始化，磁盘还不存在
    #[display(fmt = "disk has not been created")]
    NotCreated,

    #[display(fmt = "host I/O error: {}", _0)]
    Io(io::ErrorKind),
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err.kind())
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(kind) => kind.into(),
            Error::NotWritten(_) => io::Error::new(io::ErrorKind::NotFound, err),
            err => io::Error::new(io::ErrorKind::InvalidInput, err),
        }
    }
}

/// 检查缓冲区长度恰为 `expected`
pub fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::BufferSize { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn buffer_length() {
        assert_eq!(Ok(()), check_len(512, 512));
        assert_eq!(
            Err(Error::BufferSize {
                expected: 512,
                actual: 511
            }),
            check_len(512, 511)
        );
    }

    #[test]
    fn io_conversion() {
        let err: io::Error = Error::NotWritten(7).into();
        assert_eq!(io::ErrorKind::NotFound, err.kind());

        let err: io::Error = Error::InvalidSectorSize(0).into();
        assert_eq!(io::ErrorKind::InvalidInput, err.kind());

        let err: Error = io::Error::from(io::ErrorKind::UnexpectedEof).into();
        assert_eq!(Error::Io(io::ErrorKind::UnexpectedEof), err);
        assert_eq!("host I/O error: unexpected end of file", err.to_string());
    }

    #[test]
    fn messages() {
        assert_eq!(
            "LBA 9 is out of range (capacity 8 sectors)",
            Error::OutOfRange {
                lba: 9,
                capacity: 8
            }
            .to_string()
        );
        assert_eq!("LBA 3 has never been written", Error::NotWritten(3).to_string());
    }
}
