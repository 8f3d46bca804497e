use std::path::{Path, PathBuf};

use tracing::warn;

use crate::cli::{Args, MergeMode};

/// Fully resolved settings for one archive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    pub cookie: String,
    pub url: String,
    pub subtitles: Vec<String>,
    pub audios: Vec<String>,
    pub title: String,
    pub merge: MergeMode,
    /// Set when the title came from `--title`: episodes go into `<title>/`.
    pub new_dir: bool,
}

impl DownloadConfig {
    /// Resolves `args`, taking the title from the last segment of `cwd`
    /// when none was given. A directory without a name (`/`) yields an
    /// empty title.
    pub fn resolve(args: &Args, cwd: &Path) -> Self {
        let (title, new_dir) = match &args.title {
            Some(title) => (title.clone(), true),
            None => (title_from_dir(cwd), false),
        };

        DownloadConfig {
            cookie: args.etp_rt.clone(),
            url: args.series_url.clone(),
            subtitles: args.subtitles.clone(),
            audios: args.audios.clone(),
            title,
            merge: args.merge,
            new_dir,
        }
    }

    pub fn from_args(args: &Args) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|e| {
            warn!("Cannot read the current directory: {}", e);
            PathBuf::new()
        });
        Self::resolve(args, &cwd)
    }
}

fn title_from_dir(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["crunchy-archive"];
        argv.extend_from_slice(extra);
        argv.push("aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee");
        argv.push("https://www.crunchyroll.com/series/ABCDE1234/some-show");
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_title_from_cwd() {
        let config = DownloadConfig::resolve(&parse(&[]), &PathBuf::from("/media/anime/Frieren"));
        assert_eq!(config.title, "Frieren");
        assert!(!config.new_dir);
        assert_eq!(config.merge, MergeMode::Audio);
        assert_eq!(config.audios, vec!["ja-JP", "en-US", "fr-FR"]);
    }

    #[test]
    fn test_explicit_title_creates_dir() {
        let config = DownloadConfig::resolve(&parse(&["-t", "My Show"]), &PathBuf::from("/media/anime"));
        assert_eq!(config.title, "My Show");
        assert!(config.new_dir);
    }

    #[test]
    fn test_root_without_title_is_empty() {
        let config = DownloadConfig::resolve(&parse(&[]), &PathBuf::from("/"));
        assert_eq!(config.title, "");
        assert!(!config.new_dir);
    }

    #[test]
    fn test_empty_dir_without_title_is_empty() {
        let config = DownloadConfig::resolve(&parse(&[]), &PathBuf::new());
        assert_eq!(config.title, "");
    }

    #[test]
    fn test_root_with_title_ok() {
        let config = DownloadConfig::resolve(&parse(&["-t", "Show"]), &PathBuf::from("/"));
        assert_eq!(config.title, "Show");
    }

    #[test]
    fn test_args_copied_verbatim() {
        let config = DownloadConfig::resolve(
            &parse(&["-s", "de-DE", "-a", "ja-JP", "it-IT", "-m", "auto"]),
            &PathBuf::from("/tmp/x"),
        );
        assert_eq!(config.cookie, "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee");
        assert_eq!(config.url, "https://www.crunchyroll.com/series/ABCDE1234/some-show");
        assert_eq!(config.subtitles, vec!["de-DE"]);
        assert_eq!(config.audios, vec!["ja-JP", "it-IT"]);
        assert_eq!(config.merge, MergeMode::Auto);
    }
}
