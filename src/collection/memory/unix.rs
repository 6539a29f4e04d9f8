//! Process limits shared by the unix counter sources.

/// Returns the soft address space limit of this process, or `None` if it is
/// unlimited or can't be read.
pub(crate) fn address_space_limit() -> Option<u64> {
    let mut limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };

    // SAFETY: `limit` is a valid, writable rlimit for the call to fill in, and
    // it is only read if the call succeeds.
    let rc = unsafe { libc::getrlimit(libc::RLIMIT_AS, &mut limit) };

    if rc != 0 || limit.rlim_cur == libc::RLIM_INFINITY {
        None
    } else {
        Some(limit.rlim_cur as u64)
    }
}
