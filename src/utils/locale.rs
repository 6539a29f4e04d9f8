//! Resolving the thousands grouping separator of the user's locale.
//!
//! Every failure here degrades to an empty separator, which means no
//! grouping at all.

use crate::multi_eq_ignore_ascii_case;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        use self::unix::thousands_separator;
    } else if #[cfg(target_os = "windows")] {
        mod windows;
        use self::windows::thousands_separator;
    } else {
        fn thousands_separator(_lang: &str) -> Option<String> {
            None
        }
    }
}

/// The environment variable that picks the locale.
pub const LANG_ENV: &str = "LANG";

/// Returns the grouping separator for `lang` (the value of `LANG`).
///
/// `no_locale`, an unset or empty `lang`, or the neutral `C`/`POSIX` locale all
/// give an empty separator.
pub fn grouping_separator(no_locale: bool, lang: Option<&str>) -> String {
    if no_locale {
        return String::new();
    }

    match lang.map(str::trim) {
        None | Some("") => String::new(),
        Some(lang) if multi_eq_ignore_ascii_case!(lang, "C" | "POSIX") => String::new(),
        Some(lang) => thousands_separator(lang).unwrap_or_else(|| {
            log::debug!("no grouping separator for locale '{lang}', not grouping");
            String::new()
        }),
    }
}
