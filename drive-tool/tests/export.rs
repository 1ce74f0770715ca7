use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use block_dev::BlockDevice;
use drive_tool::{BlockFile, image};
use drives::{DriveConfig, EmulatedDisk, EmulatedDrive, SectorId};

fn temp_image(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("drive-tool-{}-{name}.img", std::process::id()))
}

#[test]
fn export_places_sectors_at_their_lba() {
    let drive = drive_tool::open("drv048", DriveConfig::default()).unwrap();
    let path = temp_image("drv048");

    let size = image::export(drive.disk().unwrap(), &path).unwrap();
    let bytes = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(480 * 512, size);
    assert_eq!(size as usize, bytes.len());

    let fixture = drive.fixture();
    for (lba, sector) in bytes.chunks_exact(512).enumerate() {
        match fixture.sector(lba as u32) {
            Some(data) => assert_eq!(data, sector, "LBA {lba}"),
            None => assert!(sector.iter().all(|&b| b == 0), "LBA {lba}"),
        }
    }
}

#[test]
fn export_honours_capacity() {
    let config = DriveConfig {
        capacity: Some(1024),
        ..DriveConfig::default()
    };
    let drive = drive_tool::open("DRV050", config).unwrap();
    let path = temp_image("drv050");

    let size = image::export(drive.disk().unwrap(), &path).unwrap();
    let len = fs::metadata(&path).unwrap().len();
    fs::remove_file(&path).unwrap();

    assert_eq!(1024 * 512, size);
    assert_eq!(size, len);
}

#[test]
fn block_file_round_trip() {
    let path = temp_image("block-file");
    let fd = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .unwrap();
    fd.set_len(4 * 512).unwrap();

    let file = BlockFile::new(fd, 512);
    file.write_block(2, &[0x8; 512]).unwrap();
    let mut buf = [0; 512];
    file.read_block(2, &mut buf).unwrap();
    assert_eq!([0x8; 512], buf);
    file.read_block(1, &mut buf).unwrap();
    assert_eq!([0; 512], buf);
    assert!(file.write_block(0, &[0; 100]).is_err());

    drop(file);
    assert_eq!(4 * 512, File::open(&path).unwrap().metadata().unwrap().len());
    fs::remove_file(&path).unwrap();
}

#[test]
fn copy_between_disks() {
    let drive = drive_tool::open("DRV050", DriveConfig::default()).unwrap();
    let copy = EmulatedDisk::create(512).unwrap();

    let copied = image::copy_sectors(drive.disk().unwrap(), &copy).unwrap();
    assert_eq!(9, copied);
    assert_eq!(drive.disk().unwrap().lbas(), copy.lbas());

    let mut buf = [0; 512];
    copy.sector_read(SectorId::new(544), &mut buf).unwrap();
    assert_eq!(b"asdfjkl;", &buf[..8]);

    let small = EmulatedDisk::create(256).unwrap();
    assert!(image::copy_sectors(drive.disk().unwrap(), &small).is_err());
}

#[test]
fn unknown_drive() {
    let err = drive_tool::open("DRV999", DriveConfig::default()).unwrap_err();
    assert_eq!(std::io::ErrorKind::NotFound, err.kind());
    assert!(drives::drives().iter().all(|drive| drive.id() != "DRV999"));
}
