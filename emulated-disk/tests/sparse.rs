use std::sync::Arc;
use std::thread;

use emulated_disk::{BlockDevice, EmulatedDisk, SECTOR_SIZE, SectorId};

#[test]
fn gaps_stay_unpopulated() {
    let disk = EmulatedDisk::create(SECTOR_SIZE).unwrap();
    for lba in [0, 1, 479] {
        disk.sector_write(SectorId::new(lba), &[lba as u8 + 1; SECTOR_SIZE], true)
            .unwrap();
    }

    assert_eq!(3, disk.len());
    assert!((2..479).all(|lba| !disk.is_written(SectorId::new(lba))));
}

#[test]
fn shared_between_threads() {
    let disk = Arc::new(EmulatedDisk::create(SECTOR_SIZE).unwrap());

    let handles: Vec<_> = (0..4usize)
        .map(|i| {
            let disk = Arc::clone(&disk);
            thread::spawn(move || {
                disk.write_block(i * 32, &[i as u8; SECTOR_SIZE]).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        vec![0, 32, 64, 96],
        disk.lbas()
            .into_iter()
            .map(usize::from)
            .collect::<Vec<_>>()
    );
    let mut buf = [0; SECTOR_SIZE];
    disk.read_block(96, &mut buf).unwrap();
    assert_eq!([3; SECTOR_SIZE], buf);
}
