//! Timer-free core of the search debouncer.
//!
//! Each keystroke takes a new ticket and supersedes the pending one; the
//! caller arms a timer for the ticket and reports back with [`Debouncer::elapsed`].
//! Only the ticket that is still current when its timer fires emits.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: Option<String>,
    disposed: bool,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a raw keystroke value and returns the ticket for its timer.
    pub fn input(&mut self, value: impl Into<String>) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value.into());
        DebounceTicket(self.generation)
    }

    /// Called when the timer for `ticket` fires. Returns the stabilized value
    /// when no later keystroke superseded it.
    pub fn elapsed(&mut self, ticket: DebounceTicket) -> Option<String> {
        if self.disposed || ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drops the pending value; timers still in flight will emit nothing.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays keystrokes on a virtual clock and returns `(emitted_at_ms, value)`.
    fn simulate(keystrokes: &[(u32, &str)], delay_ms: u32, dispose_at: Option<u32>) -> Vec<(u32, String)> {
        let mut debouncer = Debouncer::new();
        let mut timers: Vec<(u32, DebounceTicket)> = Vec::new();
        let mut emitted = Vec::new();

        let horizon = keystrokes.last().map(|(t, _)| *t).unwrap_or(0) + delay_ms * 4;
        let mut strokes = keystrokes.iter().peekable();
        for now in 0..=horizon {
            if dispose_at == Some(now) {
                debouncer.dispose();
            }
            while let Some((at, value)) = strokes.peek() {
                if *at != now {
                    break;
                }
                let ticket = debouncer.input(*value);
                timers.push((now + delay_ms, ticket));
                strokes.next();
            }
            for (_, ticket) in timers.iter().filter(|(fire_at, _)| *fire_at == now) {
                if let Some(value) = debouncer.elapsed(*ticket) {
                    emitted.push((now, value));
                }
            }
        }
        emitted
    }

    #[test]
    fn test_burst_emits_once_with_final_value() {
        let words = "abcdefghijklmnopqrst";
        let keystrokes: Vec<(u32, String)> = (0..20)
            .map(|i| (i as u32 * 100, words[..=i].to_string()))
            .collect();
        let refs: Vec<(u32, &str)> = keystrokes.iter().map(|(t, s)| (*t, s.as_str())).collect();

        let emitted = simulate(&refs, 500, None);
        assert_eq!(emitted, vec![(1900 + 500, words.to_string())]);
    }

    #[test]
    fn test_pauses_longer_than_delay_emit_each_value() {
        let emitted = simulate(&[(0, "ab"), (800, "abc")], 500, None);
        assert_eq!(emitted, vec![(500, "ab".to_string()), (1300, "abc".to_string())]);
    }

    #[test]
    fn test_dispose_before_delay_emits_nothing() {
        let emitted = simulate(&[(0, "query")], 500, Some(200));
        assert!(emitted.is_empty());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.input("a");
        let second = debouncer.input("ab");
        assert_eq!(debouncer.elapsed(first), None);
        assert!(debouncer.has_pending());
        assert_eq!(debouncer.elapsed(second), Some("ab".to_string()));
        assert_eq!(debouncer.elapsed(second), None);
    }
}
