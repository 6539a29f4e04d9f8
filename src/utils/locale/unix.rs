use std::ffi::{CStr, CString};

/// Looks up the thousands separator of `lang` through the C library.
///
/// `LC_NUMERIC` is switched to `lang` only for the lookup, then put back.
pub(super) fn thousands_separator(lang: &str) -> Option<String> {
    let lang = CString::new(lang).ok()?;

    // SAFETY: setlocale and localeconv are called on one thread, with valid
    // NUL-terminated strings. The returned pointers are only read before the
    // next setlocale call, and their contents are copied out.
    unsafe {
        let previous = libc::setlocale(libc::LC_NUMERIC, std::ptr::null());
        let previous = (!previous.is_null()).then(|| CStr::from_ptr(previous).to_owned());

        if libc::setlocale(libc::LC_NUMERIC, lang.as_ptr()).is_null() {
            return None;
        }

        let conv = libc::localeconv();
        let separator = if conv.is_null() || (*conv).thousands_sep.is_null() {
            None
        } else {
            Some(
                CStr::from_ptr((*conv).thousands_sep)
                    .to_string_lossy()
                    .into_owned(),
            )
        };

        if let Some(previous) = previous {
            libc::setlocale(libc::LC_NUMERIC, previous.as_ptr());
        }

        separator
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn current_numeric_locale() -> Option<CString> {
        // SAFETY: A null locale only queries; the result is copied out at once.
        unsafe {
            let current = libc::setlocale(libc::LC_NUMERIC, std::ptr::null());
            (!current.is_null()).then(|| CStr::from_ptr(current).to_owned())
        }
    }

    #[test]
    fn lookup_restores_previous_locale() {
        let before = current_numeric_locale();

        // The C locale always exists and never groups.
        assert_eq!(thousands_separator("C").as_deref(), Some(""));
        assert_eq!(thousands_separator("C.UTF-8").unwrap_or_default(), "");

        assert!(before.is_some());
        assert_eq!(current_numeric_locale(), before);
    }
}
