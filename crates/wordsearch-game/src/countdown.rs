/// Result of advancing a [`Countdown`] by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Tick {
    /// Time is left; holds the remaining seconds.
    Running(u32),
    /// The countdown reached zero on this tick.
    Expired,
    /// The countdown had already expired or was cancelled; nothing happened.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountdownState {
    Running,
    Expired,
    Cancelled,
}

/// A level timer driven by external one-second ticks.
///
/// [`Tick::Expired`] is reported exactly once, on the tick that reaches zero.
/// After [`Countdown::cancel`] no tick fires, so a timer that outlives its
/// level cannot end the next one.
///
/// # Examples
///
/// ```
/// use wordsearch_game::{Countdown, Tick};
///
/// let mut countdown = Countdown::new(2);
/// assert_eq!(countdown.tick(), Tick::Running(1));
/// assert_eq!(countdown.tick(), Tick::Expired);
/// assert_eq!(countdown.tick(), Tick::Stopped);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    state: CountdownState,
}

impl Countdown {
    /// Creates a running countdown of `seconds`.
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            state: CountdownState::Running,
        }
    }

    /// Returns the seconds left.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns `true` while ticks still count down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    /// Returns `true` if the countdown reached zero.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.state == CountdownState::Expired
    }

    /// Advances the countdown by one second.
    ///
    /// A countdown created with zero seconds expires on its first tick.
    pub fn tick(&mut self) -> Tick {
        if !self.is_running() {
            return Tick::Stopped;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = CountdownState::Expired;
            return Tick::Expired;
        }
        Tick::Running(self.remaining)
    }

    /// Advances the countdown by up to `seconds` ticks, stopping early if it
    /// expires. Returns the last tick result, or the current state when
    /// `seconds` is zero.
    pub fn advance(&mut self, seconds: u32) -> Tick {
        let mut last = if self.is_running() {
            Tick::Running(self.remaining)
        } else {
            Tick::Stopped
        };
        for _ in 0..seconds {
            last = self.tick();
            if !last.is_running() {
                break;
            }
        }
        last
    }

    /// Stops the countdown without expiring it. Remaining time is kept.
    pub fn cancel(&mut self) {
        if self.is_running() {
            self.state = CountdownState::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_and_expires_once() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), Tick::Running(2));
        assert_eq!(countdown.tick(), Tick::Running(1));
        assert_eq!(countdown.tick(), Tick::Expired);
        assert!(countdown.is_expired());
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(countdown.tick(), Tick::Stopped);
        assert_eq!(countdown.tick(), Tick::Stopped);
    }

    #[test]
    fn test_zero_seconds_expires_on_first_tick() {
        let mut countdown = Countdown::new(0);
        assert!(countdown.is_running());
        assert_eq!(countdown.tick(), Tick::Expired);
    }

    #[test]
    fn test_cancel_prevents_expiry() {
        let mut countdown = Countdown::new(1);
        countdown.cancel();
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), Tick::Stopped);
        assert!(!countdown.is_expired());
        assert_eq!(countdown.remaining(), 1);
    }

    #[test]
    fn test_cancel_after_expiry_keeps_expired() {
        let mut countdown = Countdown::new(1);
        assert_eq!(countdown.tick(), Tick::Expired);
        countdown.cancel();
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_advance() {
        let mut countdown = Countdown::new(10);
        assert_eq!(countdown.advance(4), Tick::Running(6));
        assert_eq!(countdown.advance(0), Tick::Running(6));
        assert_eq!(countdown.advance(100), Tick::Expired);
        assert_eq!(countdown.advance(1), Tick::Stopped);
    }
}
