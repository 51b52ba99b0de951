//! Concurrency ticket pool shared across the server.
//!
//! - Bounds the number of probes in flight across every `POST /` call.
//! - A ticket returns to the pool when it is dropped, so a probe that fails,
//!   times out, panics or is aborted cannot leak capacity.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};

/// Fixed-capacity pool of concurrency tickets.
///
/// Cloning is cheap and yields a handle to the same pool.
#[derive(Clone, Debug)]
pub struct TicketPool {
    inner: Arc<TicketPoolInner>,
}

#[derive(Debug)]
struct TicketPoolInner {
    semaphore: Arc<Semaphore>,
    capacity: usize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl TicketPool {
    /// Create a pool holding `capacity` tickets.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(TicketPoolInner {
                semaphore: Arc::new(Semaphore::new(capacity)),
                capacity,
                in_flight: AtomicUsize::new(0),
                peak_in_flight: AtomicUsize::new(0),
            }),
        }
    }

    /// Total number of tickets.
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Tickets not currently held.
    pub fn available(&self) -> usize {
        self.inner.semaphore.available_permits()
    }

    /// Tickets currently held by running probes.
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of tickets held at the same time since creation.
    pub fn peak_in_flight(&self) -> usize {
        self.inner.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Wait for a free ticket.
    ///
    /// Fails only if the underlying semaphore has been closed, which this
    /// pool never does.
    pub async fn acquire(&self) -> Result<Ticket, AcquireError> {
        let permit = self.inner.semaphore.clone().acquire_owned().await?;
        let now = self.inner.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        Ok(Ticket {
            pool: self.clone(),
            _permit: permit,
        })
    }

    fn release(&self) {
        self.inner.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A held concurrency ticket. Returned to the pool on drop.
#[derive(Debug)]
pub struct Ticket {
    pool: TicketPool,
    // Dropped after `Drop::drop` runs, so `in_flight` never exceeds held permits.
    _permit: OwnedSemaphorePermit,
}

impl Drop for Ticket {
    fn drop(&mut self) {
        self.pool.release();
    }
}
