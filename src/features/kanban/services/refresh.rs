use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::{AbortHandle, Abortable};
use tracing::debug;

use crate::core::clock::Clock;

/// Ticks on wall-clock multiples of `period` (minute boundaries for the
/// default 60 s), so each tick re-aligns instead of accumulating timer drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSchedule {
    period: Duration,
    // Boundary (unix millis) the last returned delay aimed at
    target: Option<i64>,
}

impl RefreshSchedule {
    pub fn new(period: Duration) -> Self {
        Self { period, target: None }
    }

    /// Delay until the next boundary strictly after `now`. A timer that fires
    /// early, before the boundary it was aimed at, waits for the one after.
    pub fn next_delay(&mut self, now: DateTime<Utc>) -> Duration {
        let period_ms = self.period.as_millis().max(1) as i64;
        let now_ms = now.timestamp_millis();
        let mut boundary = now_ms - now_ms.rem_euclid(period_ms) + period_ms;
        if self.target == Some(boundary) {
            boundary += period_ms;
        }
        self.target = Some(boundary);
        Duration::from_millis((boundary - now_ms) as u64)
    }
}

/// Handle to the running refresh loop. Stopping is idempotent; dropping the
/// handle stops the loop too.
pub struct RefreshCycle {
    abort: AbortHandle,
}

impl RefreshCycle {
    pub fn spawn<F>(mut schedule: RefreshSchedule, clock: Rc<dyn Clock>, tick: F) -> Self
    where
        F: Fn() + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let ticking = Abortable::new(
            async move {
                loop {
                    let delay = schedule.next_delay(clock.now());
                    gloo_timers::future::sleep(delay).await;
                    tick();
                }
            },
            registration,
        );
        leptos::task::spawn_local(async move {
            if ticking.await.is_err() {
                debug!("Refresh cycle stopped");
            }
        });
        Self { abort }
    }

    pub fn stop(&self) {
        self.abort.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for RefreshCycle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
