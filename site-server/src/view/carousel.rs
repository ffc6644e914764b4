//! Auto-advancing slide carousel
//!
//! Slides advance every `interval`. A manual move jumps immediately and
//! pauses auto-advance until no interaction has happened for `idle_resume`;
//! the next automatic step then comes one full interval later.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_IDLE_RESUME: Duration = Duration::from_secs(10);

/// How often the driver checks the carousel
const TICK_RESOLUTION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    current: usize,
    interval: Duration,
    idle_resume: Duration,
    last_advance: Instant,
    paused_until: Option<Instant>,
}

impl Carousel {
    pub fn new(len: usize, now: Instant) -> Self {
        Self::with_timing(len, now, DEFAULT_INTERVAL, DEFAULT_IDLE_RESUME)
    }

    pub fn with_timing(len: usize, now: Instant, interval: Duration, idle_resume: Duration) -> Self {
        Self {
            len,
            current: 0,
            interval,
            idle_resume,
            last_advance: now,
            paused_until: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self, now: Instant) -> bool {
        self.paused_until.is_some_and(|until| now < until)
    }

    /// Replace the slide count, keeping the index in range
    pub fn set_len(&mut self, len: usize, now: Instant) {
        self.len = len;
        if self.current >= len {
            self.current = 0;
        }
        self.last_advance = now;
    }

    /// Advance if an interval has passed
    ///
    /// Returns whether the slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(until) = self.paused_until {
            if now < until {
                return false;
            }
            self.paused_until = None;
            self.last_advance = until;
        }
        if self.len < 2 || now.saturating_duration_since(self.last_advance) < self.interval {
            return false;
        }
        self.current = (self.current + 1) % self.len;
        self.last_advance = now;
        true
    }

    pub fn next(&mut self, now: Instant) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
            self.pause(now);
        }
    }

    pub fn prev(&mut self, now: Instant) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
            self.pause(now);
        }
    }

    /// Jump to a slide; ignored when out of range
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if index < self.len {
            self.current = index;
            self.pause(now);
        }
    }

    fn pause(&mut self, now: Instant) {
        self.paused_until = Some(now + self.idle_resume);
    }
}

/// Tick a shared carousel until `shutdown` fires
pub async fn run_auto_advance(carousel: Arc<Mutex<Carousel>>, shutdown: CancellationToken) {
    let mut ticker = tokio::time::interval(TICK_RESOLUTION);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = ticker.tick() => {
                let mut carousel = carousel.lock();
                if carousel.tick(Instant::now()) {
                    tracing::trace!(slide = carousel.current(), "Carousel advanced");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_auto_advance_wraps() {
        let t0 = Instant::now();
        let mut c = Carousel::new(3, t0);
        assert!(!c.tick(t0 + secs(4)));
        assert!(c.tick(t0 + secs(5)));
        assert!(c.tick(t0 + secs(10)));
        assert!(c.tick(t0 + secs(15)));
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_single_slide_never_moves() {
        let t0 = Instant::now();
        let mut c = Carousel::new(1, t0);
        assert!(!c.tick(t0 + secs(60)));
        c.next(t0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_manual_move_pauses_then_resumes() {
        let t0 = Instant::now();
        let mut c = Carousel::new(4, t0);
        c.next(t0 + secs(2));
        assert_eq!(c.current(), 1);
        assert!(c.is_paused(t0 + secs(3)));

        // Paused until t0+12, first automatic step at t0+17
        assert!(!c.tick(t0 + secs(7)));
        assert!(!c.tick(t0 + secs(12)));
        assert!(!c.tick(t0 + secs(16)));
        assert!(c.tick(t0 + secs(17)));
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_interaction_extends_pause() {
        let t0 = Instant::now();
        let mut c = Carousel::new(4, t0);
        c.go_to(3, t0);
        c.prev(t0 + secs(8));
        assert_eq!(c.current(), 2);
        assert!(c.is_paused(t0 + secs(12)));
        assert!(!c.tick(t0 + secs(17)));
        assert!(c.tick(t0 + secs(23)));
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn test_set_len_clamps() {
        let t0 = Instant::now();
        let mut c = Carousel::new(5, t0);
        c.go_to(4, t0);
        c.set_len(2, t0);
        assert_eq!(c.current(), 0);
        c.go_to(7, t0);
        assert_eq!(c.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_advances_and_stops() {
        let start = Instant::now();
        let carousel = Arc::new(Mutex::new(Carousel::new(4, start)));
        let shutdown = CancellationToken::new();
        let driver = tokio::spawn(run_auto_advance(carousel.clone(), shutdown.clone()));

        tokio::time::sleep(Duration::from_millis(5_300)).await;
        assert_eq!(carousel.lock().current(), 1);

        carousel.lock().next(Instant::now());
        assert_eq!(carousel.lock().current(), 2);

        // Still paused shortly before the idle timeout ends
        tokio::time::sleep(secs(9)).await;
        assert_eq!(carousel.lock().current(), 2);

        // One interval after resuming, rounded up to the next driver tick
        tokio::time::sleep(Duration::from_millis(6_500)).await;
        assert_eq!(carousel.lock().current(), 3);

        shutdown.cancel();
        driver.await.unwrap();
        tokio::time::sleep(secs(30)).await;
        assert_eq!(carousel.lock().current(), 3);
    }
}
