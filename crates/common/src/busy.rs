//! Per-operation busy tracking
//!
//! Each submit-style operation owns one `BusyFlag`. Entering the flag hands
//! back a guard; the flag reads busy while any guard is alive, so overlapping
//! calls of the same operation keep it raised until the last one finishes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Busy flag for a single kind of operation
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    in_flight: Arc<AtomicUsize>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the operation as running until the returned guard is dropped
    pub fn enter(&self) -> BusyGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        BusyGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}

/// Keeps a `BusyFlag` raised while alive
#[derive(Debug)]
pub struct BusyGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
