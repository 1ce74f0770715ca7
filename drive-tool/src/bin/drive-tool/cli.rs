use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use drives::{DriveConfig, UnwrittenRead};

#[derive(Parser)]
#[command(about = "Inspect and export the emulated fixture drives")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Flag passed along with every sector write
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    pub write_flag: bool,

    /// Fail on reads of never-written sectors instead of zero-filling them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Limit each disk to this many sectors
    #[arg(long, global = true)]
    pub capacity: Option<usize>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every fixture drive and the sectors it populates
    List,

    /// Initialize a drive and dump its disk
    Print { id: String },

    /// Initialize a drive and hex-dump a run of sectors
    Read {
        id: String,

        /// First sector to read
        #[arg(long, short)]
        lba: u32,

        /// Number of sectors
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Initialize drives and check every fixture sector reads back intact
    Verify {
        /// Drive to check, all drives when omitted
        id: Option<String>,
    },

    /// Initialize a drive and write it out as a raw disk image
    Export {
        id: String,

        /// Image file
        #[arg(long, short)]
        output: PathBuf,
    },
}

impl Cli {
    pub fn drive_config(&self) -> DriveConfig {
        DriveConfig {
            write_flag: self.write_flag,
            unwritten: if self.strict {
                UnwrittenRead::NotWritten
            } else {
                UnwrittenRead::Zeroed
            },
            capacity: self.capacity,
        }
    }
}
