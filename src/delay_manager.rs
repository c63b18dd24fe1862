use std::thread;
use std::time::Duration;
use log::info;

/// Waits between consecutive page requests.
pub trait Pacer {
    fn pause(&self);
}

impl<T: Pacer + ?Sized> Pacer for &T {
    fn pause(&self) {
        (**self).pause()
    }
}

/// Blocks the current thread for a fixed amount of time.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        FixedDelay { delay }
    }
}

impl Pacer for FixedDelay {
    fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        info!("Waiting for {:.1} seconds (Page Delay)...", self.delay.as_secs_f64());
        thread::sleep(self.delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn sleeps_for_configured_delay() {
        let pacer = FixedDelay::new(Duration::from_millis(50));
        let started = Instant::now();
        pacer.pause();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn zero_delay_returns_immediately() {
        let started = Instant::now();
        FixedDelay::new(Duration::ZERO).pause();
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn borrowed_pacer_delegates() {
        fn pace_twice<P: Pacer>(pacer: P) {
            pacer.pause();
            pacer.pause();
        }
        let pacer = FixedDelay::new(Duration::from_millis(20));
        let started = Instant::now();
        pace_twice(&pacer);
        assert!(started.elapsed() >= Duration::from_millis(40));
    }
}
