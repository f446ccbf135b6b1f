//! OS-level process helpers.

/// Check whether a process with the given pid currently exists.
///
/// Sends signal 0, which performs the existence and permission checks
/// without delivering anything. A process owned by another user (EPERM)
/// still counts as alive. Pids that are not positive or don't fit the
/// platform's pid type are never alive.
///
/// # Examples
///
/// ```no_run
/// use skein::sys::process_alive;
///
/// assert!(process_alive(std::process::id() as i64));
/// ```
#[cfg(unix)]
pub fn process_alive(pid: i64) -> bool {
    use nix::errno::Errno;
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    let Ok(raw) = i32::try_from(pid) else {
        return false;
    };
    if raw <= 0 {
        return false;
    }

    match kill(Pid::from_raw(raw), None) {
        Ok(()) => true,
        Err(Errno::EPERM) => true,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub fn process_alive(_pid: i64) -> bool {
    // No portable signal-0 probe
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_current_process_is_alive() {
        assert!(process_alive(std::process::id() as i64));
    }

    #[test]
    fn test_non_positive_pids_are_not_alive() {
        assert!(!process_alive(0));
        assert!(!process_alive(-1));
        assert!(!process_alive(i64::MIN));
    }

    #[test]
    fn test_out_of_range_pid_is_not_alive() {
        assert!(!process_alive(i64::MAX));
        assert!(!process_alive(i32::MAX as i64 + 1));
    }
}
