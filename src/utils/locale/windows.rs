use windows::{
    core::HSTRING,
    Win32::Globalization::{GetLocaleInfoEx, LOCALE_STHOUSAND},
};

/// Looks up the thousands separator of `lang` with `GetLocaleInfoEx`.
pub(super) fn thousands_separator(lang: &str) -> Option<String> {
    let name = HSTRING::from(locale_name(lang)?);
    let mut buffer = [0u16; 8];

    // SAFETY: `buffer` is a valid, writable slice, and the API writes at most
    // `buffer.len()` characters into it.
    let len = unsafe { GetLocaleInfoEx(&name, LOCALE_STHOUSAND, Some(&mut buffer)) };
    if len <= 0 {
        return None;
    }

    // The length includes the trailing NUL.
    let len = (len as usize).saturating_sub(1).min(buffer.len());
    String::from_utf16(&buffer[..len]).ok()
}

/// Turns a POSIX-style `LANG` value (`de_DE.UTF-8@euro`) into a Windows
/// locale name (`de-DE`).
fn locale_name(lang: &str) -> Option<String> {
    let name = lang
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");

    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn posix_names_map_to_windows_names() {
        assert_eq!(locale_name("de_DE.UTF-8@euro").as_deref(), Some("de-DE"));
        assert_eq!(locale_name("en_US").as_deref(), Some("en-US"));
        assert_eq!(locale_name(".UTF-8"), None);
    }
}
