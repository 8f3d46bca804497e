pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod validation;

pub use archive::ArchiveCommand;
pub use cli::{Args, MergeMode};
pub use config::DownloadConfig;
pub use error::{ArchiveError, ValidationError};
