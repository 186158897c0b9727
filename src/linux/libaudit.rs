//! The native libaudit facility.
//!
//! With the `linux-audit` feature on a Linux target, [`Libaudit`] binds to
//! `audit_open`, `audit_log_user_message` and `audit_close`. Otherwise it is
//! an uninhabited type: no value exists, so no code path can reach the OS.

#[cfg(all(feature = "linux-audit", target_os = "linux"))]
pub use native::Libaudit;

#[cfg(not(all(feature = "linux-audit", target_os = "linux")))]
pub use unavailable::Libaudit;

#[cfg(all(feature = "linux-audit", target_os = "linux"))]
#[allow(unsafe_code)]
mod native {
    use std::ffi::CString;
    use std::io;
    use std::ptr;

    use libc::{c_char, c_int};

    use crate::linux::{AuditFacility, AuditMessage};

    #[link(name = "audit")]
    extern "C" {
        fn audit_open() -> c_int;
        fn audit_close(fd: c_int);
        fn audit_log_user_message(
            audit_fd: c_int,
            type_: c_int,
            message: *const c_char,
            hostname: *const c_char,
            addr: *const c_char,
            tty: *const c_char,
            result: c_int,
        ) -> c_int;
    }

    /// The Linux audit facility, through libaudit.
    #[derive(Debug, Clone, Copy)]
    pub struct Libaudit {
        _private: (),
    }

    impl Libaudit {
        pub(crate) fn probe() -> Option<Self> {
            Some(Self { _private: () })
        }
    }

    impl AuditFacility for Libaudit {
        type Handle = c_int;

        fn open(&self) -> io::Result<c_int> {
            // SAFETY: no arguments; failure is reported as a negative fd with errno set.
            let fd = unsafe { audit_open() };
            if fd < 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(fd)
        }

        fn submit(&self, fd: c_int, message: &AuditMessage) -> io::Result<()> {
            let text = CString::new(message.text())
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

            // SAFETY: `text` outlives the call and is NUL terminated. Null
            // hostname, addr and tty are accepted by libaudit.
            let rc = unsafe {
                audit_log_user_message(
                    fd,
                    message.message_type(),
                    text.as_ptr(),
                    ptr::null(),
                    ptr::null(),
                    ptr::null(),
                    message.outcome().code(),
                )
            };

            match rc {
                rc if rc > 0 => Ok(()),
                0 => Err(io::Error::last_os_error()),
                rc => Err(io::Error::from_raw_os_error(-rc)),
            }
        }

        fn close(&self, fd: c_int) {
            // SAFETY: `fd` came from a successful `audit_open` and is closed once.
            unsafe { audit_close(fd) }
        }
    }
}

#[cfg(not(all(feature = "linux-audit", target_os = "linux")))]
mod unavailable {
    use std::io;

    use crate::linux::{AuditFacility, AuditMessage};

    /// The Linux audit facility. Not compiled into this build.
    #[derive(Debug, Clone, Copy)]
    pub enum Libaudit {}

    impl Libaudit {
        pub(crate) fn probe() -> Option<Self> {
            None
        }
    }

    impl AuditFacility for Libaudit {
        type Handle = i32;

        fn open(&self) -> io::Result<i32> {
            match *self {}
        }

        fn submit(&self, _handle: i32, _message: &AuditMessage) -> io::Result<()> {
            match *self {}
        }

        fn close(&self, _handle: i32) {
            match *self {}
        }
    }
}
