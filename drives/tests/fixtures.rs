use drives::fixtures::{DRV048, DRV050};
use drives::{EmulatedDrive, FixtureDrive, SectorId};

fn initialized(id: &str) -> FixtureDrive {
    let mut drive = FixtureDrive::new(drives::find(id).unwrap());
    drive.initialize().unwrap();
    drive
}

fn read(drive: &dyn EmulatedDrive, lba: u32) -> Vec<u8> {
    let mut buf = vec![0; 512];
    drive.read_sectors(&mut buf, lba, 1).unwrap();
    buf
}

#[test]
fn every_drive_reads_back_its_image() {
    for mut drive in drives::drives() {
        let drive: &mut dyn EmulatedDrive = &mut drive;
        drive.initialize().unwrap();

        let fixture = drives::find(drive.id()).unwrap();
        for &(lba, data) in fixture.sectors {
            assert_eq!(data, read(drive, lba).as_slice(), "{} LBA {lba}", drive.id());
        }
    }
}

#[test]
fn ids_are_stable() {
    let mut drive = FixtureDrive::new(&DRV048);
    let before = drive.id();
    drive.initialize().unwrap();
    assert_eq!(before, drive.id());
    assert_eq!("DRV048", drive.id());

    let ids: Vec<_> = drives::drives().iter().map(|drive| drive.id()).collect();
    assert_eq!(vec!["DRV048", "DRV050"], ids);
    assert!(ids.iter().all(|id| !id.is_empty()));
}

#[test]
fn drv048_layout() {
    let drive = initialized("DRV048");

    assert_eq!(
        [0xEBu8, 0x3C, 0x90, 0x4D, 0x53, 0x44, 0x4F, 0x53],
        read(&drive, 0)[..8]
    );
    assert_eq!([0xF8u8, 0xFF, 0xFF, 0xFF], read(&drive, 1)[..4]);
    assert_eq!([0xE5u8, 0x52, 0x49, 0x54, 0x45], read(&drive, 479)[..5]);

    let disk = drive.disk().unwrap();
    assert_eq!(
        vec![SectorId::new(0), SectorId::new(1), SectorId::new(479)],
        disk.lbas()
    );
    assert_eq!(vec![0; 512], read(&drive, 2));
}

#[test]
fn drv050_layout() {
    let drive = initialized("DRV050");

    let mut populated: Vec<u32> = drive
        .disk()
        .unwrap()
        .lbas()
        .into_iter()
        .map(|lba| lba.get() as u32)
        .collect();
    populated.sort_unstable();
    assert_eq!(vec![0, 32, 33, 34, 272, 273, 512, 513, 544], populated);

    for &(lba, data) in DRV050.sectors {
        assert_eq!(data, read(&drive, lba).as_slice());
    }
    assert_eq!(b"asdfjkl;", &read(&drive, 544)[..8]);
    assert_eq!(read(&drive, 33), read(&drive, 272));
    // MBR 签名
    assert_eq!([0x55u8, 0xAA], read(&drive, 0)[510..]);
}

#[test]
fn last_write_wins() {
    let drive = initialized("DRV048");

    drive.write_sectors(&[0x11; 512], 479, 1).unwrap();
    drive.write_sectors(&[0x22; 512], 479, 1).unwrap();
    assert_eq!(vec![0x22; 512], read(&drive, 479));
    assert_eq!(3, drive.disk().unwrap().len());
}

#[test]
fn reinitialize_restores_image() {
    let mut drive = initialized("DRV050");
    drive.write_sectors(&[0xAB; 1024], 600, 2).unwrap();
    drive.write_sectors(&[0; 512], 0, 1).unwrap();

    drive.initialize().unwrap();
    assert_eq!(9, drive.disk().unwrap().len());
    assert_eq!(Ok(vec![]), drive.verify());
    assert!(!drive.disk().unwrap().is_written(SectorId::new(600)));
}

#[test]
fn drives_are_independent() {
    let mut all = drives::drives();
    for drive in &mut all {
        drive.initialize().unwrap();
    }

    all[0].write_sectors(&[0x5A; 512], 32, 1).unwrap();
    assert_eq!(DRV050.sector(32).unwrap(), read(&all[1], 32).as_slice());
    assert_eq!(4, all[0].disk().unwrap().len());
}
