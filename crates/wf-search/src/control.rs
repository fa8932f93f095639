//! Pause / resume / cancel for the run in flight.
//!
//! A [`RunControl`] is a cheap cloneable handle.  The UI keeps one clone and
//! the engine another; the engine claims it for the duration of one search
//! with [`RunControl::begin`], which is what enforces one search at a time.
//!
//! Yield points wait out the pacing delay and then block while paused.  Both
//! waits wake early on cancel.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::{SearchError, SearchResult};

#[derive(Default)]
struct ControlState {
    running:   bool,
    paused:    bool,
    cancelled: bool,
}

#[derive(Default)]
struct Shared {
    state:  Mutex<ControlState>,
    signal: Condvar,
}

/// Shared control handle for one search at a time.
#[derive(Clone, Default)]
pub struct RunControl {
    inner: Arc<Shared>,
}

impl RunControl {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ControlState> {
        // No invariant spans the three flags, so a poisoned lock is still usable.
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Suspend the running search at its next yield point.
    pub fn pause(&self) {
        self.lock().paused = true;
    }

    pub fn resume(&self) {
        self.lock().paused = false;
        self.inner.signal.notify_all();
    }

    /// Ask the running search to stop at its next expansion step.
    pub fn cancel(&self) {
        self.lock().cancelled = true;
        self.inner.signal.notify_all();
    }

    pub fn is_paused(&self) -> bool {
        self.lock().paused
    }

    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    pub fn is_running(&self) -> bool {
        self.lock().running
    }

    /// Claim the handle for one search.
    ///
    /// Clears any pause or cancel left over from an earlier run.  Fails with
    /// [`SearchError::AlreadyRunning`] while another search holds it.
    pub fn begin(&self) -> SearchResult<RunGuard> {
        let mut st = self.lock();
        if st.running {
            return Err(SearchError::AlreadyRunning);
        }
        *st = ControlState { running: true, ..ControlState::default() };
        Ok(RunGuard { control: self.clone() })
    }

    /// One yield point: wait `delay`, then block while paused.
    pub(crate) fn yield_step(&self, delay: Duration) {
        let mut st = self.lock();
        if !delay.is_zero() {
            let deadline = Instant::now() + delay;
            while !st.cancelled {
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                st = self
                    .inner
                    .signal
                    .wait_timeout(st, deadline - now)
                    .unwrap_or_else(PoisonError::into_inner)
                    .0;
            }
        }
        while st.paused && !st.cancelled {
            st = self.inner.signal.wait(st).unwrap_or_else(PoisonError::into_inner);
        }
    }
}

/// Marks the control idle again when the search returns.
pub struct RunGuard {
    control: RunControl,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        let mut st = self.control.lock();
        st.running = false;
        st.paused = false;
    }
}
