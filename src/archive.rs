use std::fmt;
use std::process::ExitStatus;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::DownloadConfig;
use crate::error::ArchiveError;

/// One `crunchy-cli archive` invocation, kept as an argument vector so no
/// shell ever sees the values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveCommand {
    program: String,
    args: Vec<String>,
}

impl ArchiveCommand {
    pub fn new(program: impl Into<String>, config: &DownloadConfig) -> Self {
        let mut args = vec![
            "--etp-rt".to_string(),
            config.cookie.clone(),
            "archive".to_string(),
        ];

        for audio in &config.audios {
            args.push("-a".to_string());
            args.push(audio.clone());
        }
        for subtitle in &config.subtitles {
            args.push("-s".to_string());
            args.push(subtitle.clone());
        }
        args.push("-m".to_string());
        args.push(config.merge.to_string());
        args.push("-o".to_string());
        args.push(output_template(&config.title, config.new_dir));
        args.push(config.url.clone());

        ArchiveCommand {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command with inherited stdio and waits for it to exit.
    pub async fn run(&self) -> Result<ExitStatus, ArchiveError> {
        info!("Running {}", self.program);
        debug!("Command: {}", self);

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .map_err(|source| ArchiveError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            info!("{} finished", self.program);
        } else {
            warn!("{} exited with {}", self.program, status);
        }
        Ok(status)
    }
}

/// Kodi layout: `[<title>/]Season {season_number}/<title> S{season_number}E{episode_number}.mkv`.
/// The braces are crunchy-cli placeholders and are passed through literally.
pub fn output_template(title: &str, new_dir: bool) -> String {
    let file = format!(
        "Season {{season_number}}/{} S{{season_number}}E{{episode_number}}.mkv",
        title
    );
    if new_dir {
        format!("{}/{}", title, file)
    } else {
        file
    }
}

fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

impl fmt::Display for ArchiveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}
