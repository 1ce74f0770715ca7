//! 磁盘内容的十六进制转储

use std::fmt;

use crate::{DUMP_ROW, EmulatedDisk};

/// [`EmulatedDisk`] 的可读转储，格式化时才加锁遍历扇区。
///
/// 连续的全零行折叠为一行 `*`。
pub struct Dump<'a> {
    disk: &'a EmulatedDisk,
}

impl<'a> Dump<'a> {
    pub(crate) fn new(disk: &'a EmulatedDisk) -> Self {
        Self { disk }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let disk = self.disk;

        disk.with_sectors(|sectors| {
            write!(
                f,
                "EmulatedDisk: sector size {} B, {} sector(s) populated, capacity ",
                disk.sector_size(),
                sectors.len()
            )?;
            match disk.capacity() {
                Some(capacity) => write!(f, "{capacity} sectors")?,
                None => f.write_str("unbounded")?,
            }

            for (lba, sector) in sectors {
                write!(f, "\nLBA {lba} (flag={})", sector.flag)?;
                write_sector(f, &sector.data)?;
            }
            Ok(())
        })
    }
}

/// 单个扇区（或任意字节串）的十六进制转储，每行前都有换行
pub struct SectorDump<'a>(pub &'a [u8]);

impl fmt::Display for SectorDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sector(f, self.0)
    }
}

fn write_sector(f: &mut fmt::Formatter<'_>, data: &[u8]) -> fmt::Result {
    let mut in_zero_run = false;

    for (i, row) in data.chunks(DUMP_ROW).enumerate() {
        if row.iter().all(|&b| b == 0) {
            if !in_zero_run {
                f.write_str("\n  *")?;
                in_zero_run = true;
            }
            continue;
        }
        in_zero_run = false;
        write_row(f, i * DUMP_ROW, row)?;
    }

    Ok(())
}

fn write_row(f: &mut fmt::Formatter<'_>, offset: usize, row: &[u8]) -> fmt::Result {
    write!(f, "\n  {offset:04x}:")?;
    for byte in row {
        write!(f, " {byte:02x}")?;
    }
    // 不足一行时补齐，让 ASCII 列对齐
    for _ in row.len()..DUMP_ROW {
        f.write_str("   ")?;
    }

    f.write_str(" |")?;
    for &byte in row {
        let c = if byte.is_ascii_graphic() || byte == b' ' {
            byte as char
        } else {
            '.'
        };
        write!(f, "{c}")?;
    }
    f.write_str("|")
}

#[cfg(test)]
mod tests {
    use super::SectorDump;
    use crate::{DiskConfig, EmulatedDisk, SectorId};

    #[test]
    fn empty_disk() {
        let disk = EmulatedDisk::create(512).unwrap();
        assert_eq!(
            "EmulatedDisk: sector size 512 B, 0 sector(s) populated, capacity unbounded",
            disk.dump().to_string()
        );
    }

    #[test]
    fn collapses_zero_rows() {
        let disk = EmulatedDisk::with_config(DiskConfig::new(64).capacity(8)).unwrap();
        let mut sector = [0u8; 64];
        sector[..8].copy_from_slice(b"MSDOS5.0");
        sector[62] = 0x55;
        sector[63] = 0xAA;
        disk.sector_write(SectorId::new(2), &sector, true).unwrap();
        disk.sector_write(SectorId::new(5), &[0; 64], false).unwrap();

        let expected = "\
EmulatedDisk: sector size 64 B, 2 sector(s) populated, capacity 8 sectors
LBA 2 (flag=true)
  0000: 4d 53 44 4f 53 35 2e 30 00 00 00 00 00 00 00 00 |MSDOS5.0........|
  *
  0030: 00 00 00 00 00 00 00 00 00 00 00 00 00 00 55 aa |..............U.|
LBA 5 (flag=false)
  *";
        assert_eq!(expected, disk.dump().to_string());
    }

    #[test]
    fn short_rows_are_padded() {
        let disk = EmulatedDisk::create(8).unwrap();
        disk.sector_write(SectorId::new(0), b"FAT12   ", true).unwrap();

        let dump = disk.dump().to_string();
        let row = dump.lines().last().unwrap();
        assert_eq!(
            "  0000: 46 41 54 31 32 20 20 20                         |FAT12   |",
            row
        );
    }

    #[test]
    fn standalone_sector() {
        let mut data = [0u8; 48];
        data[16..20].copy_from_slice(&[0xF8, 0xFF, 0xFF, 0xFF]);
        assert_eq!(
            "\n  *\n  0010: f8 ff ff ff 00 00 00 00 00 00 00 00 00 00 00 00 |................|\n  *",
            SectorDump(&data).to_string()
        );
    }

    #[test]
    fn header_count_matches_rows() {
        let disk = EmulatedDisk::create(16).unwrap();
        for lba in [3, 9, 12, 40] {
            disk.sector_write(SectorId::new(lba), &[lba as u8; 16], true)
                .unwrap();
        }

        let dump = disk.dump().to_string();
        let rows = dump.lines().filter(|line| line.starts_with("LBA ")).count();
        assert!(dump.starts_with("EmulatedDisk: sector size 16 B, 4 sector(s) populated"));
        assert_eq!(4, rows);
    }
}
