use std::time::{Duration, Instant};

/// Cancellable one-shot timer for search input. Each keystroke re-arms it,
/// replacing the previous deadline; `poll` fires at most once per armed
/// period, after the input has been idle for the full delay.
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn arm(&mut self) {
        self.arm_at(Instant::now());
    }

    pub fn arm_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the deadline has passed; disarms on fire.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending fire, for scheduling the next repaint.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(250);

    #[test]
    fn does_not_fire_before_deadline() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(DELAY);
        debounce.arm_at(start);

        assert!(!debounce.poll_at(start + Duration::from_millis(100)));
        assert!(debounce.is_armed());
    }

    #[test]
    fn fires_once_after_idle_period() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(DELAY);
        debounce.arm_at(start);

        assert!(debounce.poll_at(start + DELAY));
        // Already fired; stays quiet until re-armed.
        assert!(!debounce.poll_at(start + DELAY * 2));
        assert!(!debounce.is_armed());
    }

    #[test]
    fn rearming_pushes_the_deadline() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(DELAY);

        // Keystrokes every 100 ms: no fire until 250 ms of idle time.
        debounce.arm_at(start);
        debounce.arm_at(start + Duration::from_millis(100));
        debounce.arm_at(start + Duration::from_millis(200));

        assert!(!debounce.poll_at(start + Duration::from_millis(300)));
        assert!(debounce.poll_at(start + Duration::from_millis(450)));
    }

    #[test]
    fn cancel_disarms() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(DELAY);
        debounce.arm_at(start);
        debounce.cancel();

        assert!(!debounce.poll_at(start + DELAY * 2));
        assert!(debounce.remaining(start).is_none());
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(DELAY);
        debounce.arm_at(start);

        assert_eq!(
            debounce.remaining(start + Duration::from_millis(50)),
            Some(Duration::from_millis(200))
        );
        assert_eq!(
            debounce.remaining(start + Duration::from_millis(500)),
            Some(Duration::ZERO)
        );
    }
}
