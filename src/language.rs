/// Locale tags crunchy-cli accepts for `-a` and `-s`.
pub const AVAILABLE_LANGUAGES: [&str; 16] = [
    "ar-ME", "ar-SA", "de-DE", "en-IN", "en-US", "es-419", "es-ES",
    "es-LA", "fr-FR", "hi-IN", "it-IT", "ja-JP", "pt-BR", "pt-PT",
    "ru-RU", "zh-CN",
];

pub const DEFAULT_SUBTITLES: [&str; 2] = ["en-US", "fr-FR"];
pub const DEFAULT_AUDIOS: [&str; 3] = ["ja-JP", "en-US", "fr-FR"];

/// Exact, case-sensitive membership test.
pub fn is_available(code: &str) -> bool {
    AVAILABLE_LANGUAGES.contains(&code)
}

/// First code of `codes` missing from the allow-list, if any.
pub fn first_unavailable<'a, I>(codes: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    codes.into_iter().map(String::as_str).find(|code| !is_available(code))
}
