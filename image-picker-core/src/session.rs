//! Single-flight guard for picker sessions.
//!
//! A platform owns one visible picker surface and one pending-result slot, so
//! backends allow only one open session at a time.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::error::{Error, Result};

/// Tracks whether a picker session is currently open.
#[derive(Debug, Default)]
pub struct SessionSlot {
    active: AtomicBool,
}

impl SessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for a new session.
    ///
    /// Fails with [`Error::Busy`] if a session is already open. The slot is
    /// released when the returned guard is dropped.
    pub fn try_begin(&self) -> Result<SessionGuard<'_>> {
        if self
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Rejecting picker session: another one is active");
            return Err(Error::Busy);
        }
        Ok(SessionGuard { slot: self })
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

/// Releases its [`SessionSlot`] on drop.
#[derive(Debug)]
pub struct SessionGuard<'a> {
    slot: &'a SessionSlot,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.slot.active.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_session_is_busy() {
        let slot = SessionSlot::new();
        let guard = slot.try_begin().unwrap();
        assert!(slot.is_active());
        assert_eq!(slot.try_begin().unwrap_err(), Error::Busy);

        drop(guard);
        assert!(!slot.is_active());
        assert!(slot.try_begin().is_ok());
    }
}
