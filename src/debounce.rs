use std::time::Duration;

/// Identifies one signal; only the most recent ticket can settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Coalesces bursts of signals into one action after a quiet period.
///
/// Every signal hands out a ticket; the caller arms a timer for `window` and
/// presents the ticket back when it fires. Timers holding an older ticket are
/// ignored, so only the timer of the last signal in a burst settles, and it
/// fires no earlier than `window` after that signal.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    generation: u64,
    latest: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            latest: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn signal(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.latest = Some(value);
        Ticket(self.generation)
    }

    /// Yields the latest value once, if `ticket` is the newest.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.latest.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(250);

    #[test]
    fn burst_settles_exactly_once_with_the_last_value() {
        let mut debouncer = Debouncer::new(WINDOW);

        let tickets: Vec<Ticket> = (0..10u64).map(|i| debouncer.signal((800 + i, 600))).collect();

        let settled: Vec<_> = tickets
            .into_iter()
            .filter_map(|ticket| debouncer.settle(ticket))
            .collect();
        assert_eq!(settled, vec![(809, 600)]);
    }

    #[test]
    fn newest_ticket_settles_even_when_its_timer_fires_early() {
        let mut debouncer = Debouncer::new(WINDOW);
        let stale = debouncer.signal(1);
        let newest = debouncer.signal(2);

        // the older timer fires first and is ignored; the newest must not be lost
        assert_eq!(debouncer.settle(stale), None);
        assert_eq!(debouncer.settle(newest), Some(2));
    }

    #[test]
    fn a_ticket_settles_only_once() {
        let mut debouncer = Debouncer::new(WINDOW);
        let ticket = debouncer.signal(1);

        assert_eq!(debouncer.settle(ticket), Some(1));
        assert_eq!(debouncer.settle(ticket), None);
    }

    #[test]
    fn separate_bursts_settle_separately() {
        let mut debouncer = Debouncer::new(WINDOW);

        let first = debouncer.signal("a");
        assert_eq!(debouncer.settle(first), Some("a"));

        let second = debouncer.signal("b");
        assert_ne!(first, second);
        assert_eq!(debouncer.settle(first), None);
        assert_eq!(debouncer.settle(second), Some("b"));
    }

    #[test]
    fn window_is_what_was_configured() {
        assert_eq!(Debouncer::<()>::new(WINDOW).window(), WINDOW);
    }
}
