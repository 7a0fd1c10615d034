//! Last-write-wins tickets
//!
//! Every debounced change or remote load takes a ticket; when its timer
//! fires or its response arrives it applies only if the ticket is still the
//! latest one handed out.

/// Monotonic ticket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

/// Hands out tickets and tells whether one is still current
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationCounter {
    current: Generation,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, invalidating every earlier ticket
    pub fn advance(&mut self) -> Generation {
        self.current = self.current.next();
        self.current
    }

    pub fn current(&self) -> Generation {
        self.current
    }

    pub fn is_current(&self, ticket: Generation) -> bool {
        self.current == ticket
    }
}

/// Cancel-and-restart debounce over a pending value.
///
/// `schedule` replaces the pending value and returns the ticket the caller
/// waits on; `fire` yields the value only for the latest ticket.
#[derive(Debug, Clone, Default)]
pub struct Debouncer<T> {
    counter: GenerationCounter,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self {
            counter: GenerationCounter::new(),
            pending: None,
        }
    }

    pub fn schedule(&mut self, value: T) -> Generation {
        self.pending = Some(value);
        self.counter.advance()
    }

    pub fn fire(&mut self, ticket: Generation) -> Option<T> {
        if !self.counter.is_current(ticket) {
            return None;
        }
        self.pending.take()
    }

    /// Drops the pending value; outstanding tickets fire nothing
    pub fn cancel(&mut self) {
        self.pending = None;
        self.counter.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_rapid_changes_render_once_with_final_term() {
        let mut debouncer = Debouncer::new();
        let t1 = debouncer.schedule("o".to_string());
        let t2 = debouncer.schedule("ol".to_string());
        let t3 = debouncer.schedule("oli".to_string());

        // Timers fire in scheduling order after the window
        let renders: Vec<String> = [t1, t2, t3]
            .into_iter()
            .filter_map(|t| debouncer.fire(t))
            .collect();
        assert_eq!(renders, vec!["oli".to_string()]);
    }

    #[test]
    fn test_fire_is_single_shot() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.schedule(1);
        assert_eq!(debouncer.fire(ticket), Some(1));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.schedule(1);
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut loads = GenerationCounter::new();
        let first = loads.advance();
        let second = loads.advance();
        assert!(!loads.is_current(first));
        assert!(loads.is_current(second));
        assert!(second > first);
    }
}
