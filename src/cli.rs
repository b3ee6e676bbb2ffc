use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vidcompress")]
#[command(
    author,
    version,
    about = "Compress the .mp4 videos in a directory into a compressed/ subdirectory"
)]
pub struct Cli {
    /// Only print what would be done; create, encode and delete nothing
    #[arg(
        long,
        alias = "dry_run",
        value_name = "BOOL",
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        action = ArgAction::Set
    )]
    pub dry_run: bool,

    /// Keep the original videos after compressing them
    #[arg(
        long,
        alias = "skip_remove",
        value_name = "BOOL",
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        action = ArgAction::Set
    )]
    pub skip_remove: bool,

    /// Directory that directly contains the videos to compress
    #[arg(long, alias = "videos_directory", value_name = "DIR")]
    pub videos_directory: PathBuf,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
