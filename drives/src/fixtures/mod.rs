//! 夹具镜像，内容逐字节取自预先制作的 FAT12/FAT16 磁盘

mod drv048;
mod drv050;

pub use self::{drv048::DRV048, drv050::DRV050};

use crate::Fixture;

pub(crate) static ALL: [&Fixture; 2] = [&DRV048, &DRV050];
