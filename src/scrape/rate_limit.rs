// src/scrape/rate_limit.rs

use std::time::Duration;

/// Fixed-window request limiter: after every `every` completed requests,
/// pause for `pause`. The sleep is injected so the gate can be tested
/// without wall-clock delay; production callers pass `thread_sleep`.
///
/// The pause is a blocking delay, not a cancellation point — callers tick
/// after a page is fully processed, so no partial results are lost.
pub struct CooldownGate {
    every: u32,
    pause: Duration,
    completed: u32,
}

impl CooldownGate {
    pub fn new(every: u32, pause: Duration) -> Self {
        Self { every, pause, completed: 0 }
    }

    /// Record one completed request; sleeps when the window fills.
    pub fn tick(&mut self, sleep: &mut dyn FnMut(Duration)) {
        self.completed += 1;
        if self.every > 0 && self.completed % self.every == 0 {
            logf!("Request cooldown ({:?}) after {} requests", self.pause, self.completed);
            sleep(self.pause);
        }
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }
}

/// Production sleeper.
pub fn thread_sleep(d: Duration) {
    std::thread::sleep(d);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_one_requests_pause_exactly_once() {
        let mut gate = CooldownGate::new(30, Duration::from_secs(60));
        let mut pauses: Vec<u32> = Vec::new();

        for i in 1..=31u32 {
            // simulate: request i processed, then the gate ticks
            let completed_at_tick = i;
            let mut sleep = |d: Duration| {
                assert_eq!(d, Duration::from_secs(60));
                pauses.push(completed_at_tick);
            };
            gate.tick(&mut sleep);
        }

        // one pause, right after the 30th and before the 31st
        assert_eq!(pauses, vec![30]);
        assert_eq!(gate.completed(), 31);
    }

    #[test]
    fn zero_window_never_pauses() {
        let mut gate = CooldownGate::new(0, Duration::from_secs(60));
        let mut slept = false;
        for _ in 0..100 {
            gate.tick(&mut |_| slept = true);
        }
        assert!(!slept);
    }

    #[test]
    fn pause_every_window_boundary() {
        let mut gate = CooldownGate::new(2, Duration::from_millis(1));
        let mut count = 0;
        for _ in 0..7 {
            gate.tick(&mut |_| count += 1);
        }
        assert_eq!(count, 3); // after requests 2, 4, 6
    }
}
