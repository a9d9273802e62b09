//! Close latch: keeps a process alive until another thread authorizes exit.
//!
//! One thread parks in [`prevent_close`], another calls [`close`] with the
//! exit code. The first signal wins and the latch never resets.

use std::sync::{Condvar, Mutex, PoisonError};

/// Single-shot signal carrying an exit code.
#[derive(Debug, Default)]
pub struct CloseLatch {
    code: Mutex<Option<i32>>,
    signaled: Condvar,
}

impl CloseLatch {
    pub const fn new() -> Self {
        Self {
            code: Mutex::new(None),
            signaled: Condvar::new(),
        }
    }

    /// Move the latch from pending to signaled with `code`.
    ///
    /// Returns `false` without touching the stored code if the latch was
    /// already signaled.
    pub fn signal(&self, code: i32) -> bool {
        let mut state = self.code.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(first) = *state {
            tracing::debug!(code, first, "close latch already signaled, ignoring");
            return false;
        }
        *state = Some(code);
        drop(state);

        tracing::debug!(code, "close latch signaled");
        self.signaled.notify_all();
        true
    }

    /// Block until the latch is signaled, then return its code.
    pub fn wait(&self) -> i32 {
        let state = self.code.lock().unwrap_or_else(PoisonError::into_inner);
        let state = self
            .signaled
            .wait_while(state, |code| code.is_none())
            .unwrap_or_else(PoisonError::into_inner);
        // wait_while only returns once the predicate is false
        (*state).unwrap_or_default()
    }

    /// Signaled code, or `None` while pending.
    pub fn code(&self) -> Option<i32> {
        *self.code.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_signaled(&self) -> bool {
        self.code().is_some()
    }
}

static CLOSE_LATCH: CloseLatch = CloseLatch::new();

/// Process-wide latch used by [`prevent_close`] and [`close`].
pub fn latch() -> &'static CloseLatch {
    &CLOSE_LATCH
}

/// Park the calling thread until [`close`] is called, returning the exit
/// code it carried. Returns at once if the process latch is already signaled.
///
/// Exiting the process with the code is left to the caller.
pub fn prevent_close() -> i32 {
    CLOSE_LATCH.wait()
}

/// Release [`prevent_close`] with `code`. Only the first call has any effect.
pub fn close(code: i32) {
    CLOSE_LATCH.signal(code);
}

/// [`close`] with exit code 0.
pub fn close_default() {
    close(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn first_signal_wins() {
        let latch = CloseLatch::new();
        assert_eq!(latch.code(), None);
        assert!(latch.signal(5));
        assert!(!latch.signal(9));
        assert_eq!(latch.code(), Some(5));
        assert_eq!(latch.wait(), 5);
    }

    #[test]
    fn wait_after_signal_returns_immediately() {
        let latch = CloseLatch::new();
        latch.signal(3);
        assert_eq!(latch.wait(), 3);
        assert_eq!(latch.wait(), 3);
    }

    #[test]
    fn signal_from_other_thread_unblocks_waiter() {
        let latch = Arc::new(CloseLatch::new());

        let worker = {
            let latch = Arc::clone(&latch);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                latch.signal(7)
            })
        };

        assert_eq!(latch.wait(), 7);
        assert!(worker.join().unwrap());
    }

    #[test]
    fn concurrent_signals_pick_exactly_one_winner() {
        let latch = Arc::new(CloseLatch::new());

        let handles: Vec<_> = (0..8)
            .map(|code| {
                let latch = Arc::clone(&latch);
                thread::spawn(move || latch.signal(code))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        let code = latch.wait();
        assert!((0..8).contains(&code));
    }

    #[test]
    fn process_latch_keeps_first_code() {
        close(5);
        close(9);
        close_default();
        assert_eq!(prevent_close(), 5);
        assert!(latch().is_signaled());
    }
}
