use regex::Regex;
use std::sync::OnceLock;

use crate::config::DownloadConfig;
use crate::error::ValidationError;
use crate::language;

const COOKIE_PATTERN: &str =
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

const SERIES_URL_PATTERN: &str =
    r"^(http|https)://(www\.)?crunchyroll\.com/series/[A-Z0-9]{9}(/[a-z0-9-]*)?(\[.*\])?$";

fn cookie_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COOKIE_PATTERN).expect("cookie pattern is valid"))
}

fn series_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SERIES_URL_PATTERN).expect("series URL pattern is valid"))
}

pub fn is_valid_cookie(cookie: &str) -> bool {
    cookie_regex().is_match(cookie)
}

pub fn is_valid_series_url(url: &str) -> bool {
    series_url_regex().is_match(url)
}

/// Checks cookie, URL, subtitles then audios, stopping at the first failure.
pub fn validate(config: &DownloadConfig) -> Result<(), ValidationError> {
    if !is_valid_cookie(&config.cookie) {
        return Err(ValidationError::InvalidCookie);
    }
    if !is_valid_series_url(&config.url) {
        return Err(ValidationError::InvalidUrl);
    }
    if let Some(code) = language::first_unavailable(config.subtitles.iter().chain(&config.audios)) {
        return Err(ValidationError::UnavailableLanguage(code.to_string()));
    }
    Ok(())
}
