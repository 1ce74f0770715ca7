mod cli;

use std::io;

use clap::Parser;
use drive_tool::image;
use drives::{DriveConfig, EmulatedDrive, FixtureDrive};
use emulated_disk::SectorDump;
use typed_bytesize::ByteSizeIec;

use self::cli::{Cli, Command};

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.drive_config();

    let result = match cli.command {
        Command::List => {
            list();
            Ok(())
        }
        Command::Print { id } => drive_tool::open(&id, config).map(|drive| drive.print()),
        Command::Read { id, lba, count } => read(&id, lba, count, config),
        Command::Verify { id } => verify(id.as_deref(), config),
        Command::Export { id, output } => drive_tool::open(&id, config).and_then(|drive| {
            let size = image::export(drive.disk()?, &output)?;
            println!("{}: {} -> {:?}", drive.id(), ByteSizeIec(size), output);
            Ok(())
        }),
    };

    if let Err(err) = &result {
        log::error!("{err}");
    }
    result
}

fn list() {
    for fixture in drives::fixtures() {
        let lbas = fixture
            .lbas()
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{}  {} B/sector  LBA {}",
            fixture.id, fixture.sector_size, lbas
        );
    }
}

fn read(id: &str, lba: u32, count: usize, config: DriveConfig) -> io::Result<()> {
    let drive = drive_tool::open(id, config)?;
    let sector_size = drive.disk()?.sector_size();

    let len = count
        .checked_mul(sector_size)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "sector count too large"))?;
    let mut buf = vec![0; len];
    drive.read_sectors(&mut buf, lba, count)?;

    for (i, sector) in buf.chunks_exact(sector_size).enumerate() {
        println!("LBA {}{}", lba as usize + i, SectorDump(sector));
    }
    Ok(())
}

fn verify(id: Option<&str>, config: DriveConfig) -> io::Result<()> {
    let drives = match id {
        Some(id) => vec![drive_tool::open(id, config)?],
        None => drives::fixtures()
            .iter()
            .copied()
            .map(|fixture| {
                let mut drive = FixtureDrive::with_config(fixture, config);
                drive.initialize().map(|()| drive)
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    let mut intact = true;
    for drive in &drives {
        let mismatched = drive.verify()?;
        if mismatched.is_empty() {
            println!("{}: ok", drive.id());
        } else {
            println!("{}: mismatched LBA {mismatched:?}", drive.id());
            intact = false;
        }
    }

    if intact {
        Ok(())
    } else {
        Err(io::Error::other("fixture verification failed"))
    }
}
