use clap::{Parser, ValueEnum};
use std::fmt;

use crate::language::{DEFAULT_AUDIOS, DEFAULT_SUBTITLES};

#[derive(Parser, Debug)]
#[command(name = "crunchy-archive")]
#[command(about = "Archive a Crunchyroll series with crunchy-cli using Kodi naming")]
pub struct Args {
    #[arg(value_name = "ETP_RT", help = "The value of the ETP_RT cookie")]
    pub etp_rt: String,
    #[arg(value_name = "SERIES_URL", help = "The series URL")]
    pub series_url: String,

    /// Subtitle filtering
    #[arg(short, long = "subtitle", num_args = 1.., default_values = DEFAULT_SUBTITLES)]
    pub subtitles: Vec<String>,

    /// Audio filtering
    #[arg(short, long = "audio", num_args = 1.., default_values = DEFAULT_AUDIOS)]
    pub audios: Vec<String>,

    /// Title; when given, episodes go into a folder of that name
    #[arg(short, long)]
    pub title: Option<String>,

    /// Streams merging when the video length differs between dubs
    #[arg(short, long, value_enum, default_value_t = MergeMode::Audio)]
    pub merge: MergeMode,

    /// Path of the crunchy-cli executable
    #[arg(long = "bin", env = "CRUNCHY_CLI_BIN", default_value = "./crunchy-cli.exe")]
    pub bin: String,

    /// Print the crunchy-cli command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MergeMode {
    Auto,
    Video,
    Audio,
}

impl MergeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeMode::Auto => "auto",
            MergeMode::Video => "video",
            MergeMode::Audio => "audio",
        }
    }
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
