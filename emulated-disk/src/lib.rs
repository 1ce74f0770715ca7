//! # 模拟磁盘
//!
//! 以扇区为单位、完全位于内存中的稀疏块存储。
//!
//! 测试夹具只会写入少数几个 LBA（启动扇区、FAT、根目录、数据簇），
//! 因此磁盘不预先分配空间，扇区在首次写入时才创建。

/* 自上而下 */

// 十六进制转储
mod dump;
pub use dump::{Dump, SectorDump};

// 磁盘本体：创建、扇区读写
mod disk;
pub use disk::EmulatedDisk;

// 磁盘配置
mod config;
pub use config::{DiskConfig, UnwrittenRead};

// 扇区与扇区号
mod sector;
pub use sector::SectorId;

pub use block_dev::{BlockDevice, Error, Result};

/// 夹具驱动器统一使用的扇区大小
pub const SECTOR_SIZE: usize = 512;

/// 转储时每行的字节数
pub const DUMP_ROW: usize = 16;
