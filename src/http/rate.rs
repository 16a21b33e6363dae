use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::interval;

use crate::args::PositiveUsize;

const REFILL_PERIOD: Duration = Duration::from_secs(1);

/// Caps request starts at `capacity` per second.
///
/// The bucket starts full and a background task tops it back up to full
/// capacity once per second, so up to `capacity` starts may happen back to
/// back right after each refill. Acquired permits are consumed, never
/// returned: the bucket limits starts, not requests in flight.
pub struct TokenBucket {
    permits: Arc<Semaphore>,
    capacity: usize,
    refill: JoinHandle<()>,
}

impl TokenBucket {
    /// Creates a full bucket and starts its refill task.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(rate_limit: PositiveUsize) -> Self {
        let capacity = rate_limit.get().min(Semaphore::MAX_PERMITS);
        let permits = Arc::new(Semaphore::new(capacity));
        let refill = spawn_refill(Arc::clone(&permits), capacity);
        Self {
            permits,
            capacity,
            refill,
        }
    }

    /// Waits for a permit and consumes it. Waiters are served in no
    /// particular order.
    pub async fn acquire(&self) {
        // The semaphore is never closed, so acquisition only ever waits.
        if let Ok(permit) = self.permits.acquire().await {
            permit.forget();
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }
}

impl Drop for TokenBucket {
    fn drop(&mut self) {
        self.refill.abort();
    }
}

fn spawn_refill(permits: Arc<Semaphore>, capacity: usize) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut refill_tick = interval(REFILL_PERIOD);
        // The first tick completes immediately and the bucket is already full.
        refill_tick.tick().await;
        loop {
            refill_tick.tick().await;
            let available = permits.available_permits();
            if available < capacity {
                permits.add_permits(capacity.saturating_sub(available));
            }
        }
    })
}
