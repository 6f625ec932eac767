// SPDX-License-Identifier: MPL-2.0
//! Locale metadata and active-locale resolution.
//!
//! The engine itself accepts any locale code and falls back silently (see
//! [`crate::catalog::Catalogs::resolve`]); this module is the layer above
//! it that decides which code to ask for in the first place, from the CLI
//! flag, the saved preference, or the OS locale.

use crate::config::Config;
use unic_langid::LanguageIdentifier;

/// Locale whose catalog answers for every unsupported or unparsable code.
pub const DEFAULT_LOCALE: &str = "en";

/// The default locale as a parsed identifier.
pub fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE
        .parse()
        .expect("Default locale constant must be a valid language identifier.")
}

/// Human-readable language name for a locale picker, if the language is one
/// we ship translations for.
pub fn display_name(locale: &LanguageIdentifier) -> Option<&'static str> {
    match locale.language.as_str() {
        "en" => Some("English"),
        "fr" => Some("Français"),
        _ => None,
    }
}

/// Picks the active locale from the usual preference sources.
///
/// Preference order: CLI flag, saved preference, OS locale. Each candidate
/// is accepted only when it parses and is in `available`; `None` means no
/// source produced a usable locale and the caller should use the default.
pub fn resolve_locale(
    cli_lang: Option<&str>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let os_locale = sys_locale::get_locale();
    let candidates = [cli_lang, config.language.as_deref(), os_locale.as_deref()];

    for code in candidates.into_iter().flatten() {
        if let Ok(locale) = code.parse::<LanguageIdentifier>() {
            if available.contains(&locale) {
                return Some(locale);
            }
        }
    }
    None
}
