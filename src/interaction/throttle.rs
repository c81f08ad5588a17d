use std::time::Duration;

/// Leading + trailing edge rate limiter driven by a host-supplied clock.
///
/// At most one call is released per `window`. A call that arrives inside the
/// window is parked; later calls replace it so the trailing release always
/// carries the latest arguments. Nothing here owns a timer: the host asks
/// [`Throttle::next_deadline`] when to call [`Throttle::poll`].
#[derive(Debug, Clone, PartialEq)]
pub struct Throttle<T> {
    window: Duration,
    last_released: Option<Duration>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_released: None,
            pending: None,
        }
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Offers a call at `now`. Returns the arguments when they may run now.
    pub fn submit(&mut self, now: Duration, args: T) -> Option<T> {
        if self.window_elapsed(now) {
            self.pending = None;
            self.last_released = Some(now);
            return Some(args);
        }
        self.pending = Some(args);
        None
    }

    /// Releases the parked call once the window since the last release has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        if self.pending.is_none() || !self.window_elapsed(now) {
            return None;
        }
        self.last_released = Some(now);
        self.pending.take()
    }

    /// When a parked call becomes releasable.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.as_ref()?;
        Some(
            self.last_released
                .map_or(Duration::ZERO, |last| last.saturating_add(self.window)),
        )
    }

    /// Drops any parked call. The release history is kept.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Forgets both the parked call and the release history.
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_released = None;
    }

    fn window_elapsed(&self, now: Duration) -> bool {
        match self.last_released {
            None => true,
            // A clock that went backwards counts as a fresh window.
            Some(last) => now < last || now - last >= self.window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Throttle;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn first_call_runs_on_leading_edge() {
        let mut throttle = Throttle::new(ms(5));
        assert_eq!(throttle.submit(ms(100), 1), Some(1));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn burst_collapses_to_latest_trailing_call() {
        let mut throttle = Throttle::new(ms(5));
        assert_eq!(throttle.submit(ms(0), 1), Some(1));
        assert_eq!(throttle.submit(ms(1), 2), None);
        assert_eq!(throttle.submit(ms(2), 3), None);
        assert_eq!(throttle.next_deadline(), Some(ms(5)));

        assert_eq!(throttle.poll(ms(4)), None);
        assert_eq!(throttle.poll(ms(5)), Some(3));
        assert_eq!(throttle.poll(ms(20)), None);
    }

    #[test]
    fn backwards_clock_does_not_stall() {
        let mut throttle = Throttle::new(ms(5));
        assert_eq!(throttle.submit(ms(50), 1), Some(1));
        assert_eq!(throttle.submit(ms(10), 2), Some(2));
    }
}
