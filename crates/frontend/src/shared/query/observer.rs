use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Identifies the key an observer was watching when it subscribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Liveness and generation flag shared between an observing component and
/// the callbacks it hands out. Results arriving after the component was
/// disposed, or after it switched to another key, are dropped.
#[derive(Debug, Clone)]
pub struct ObserverGuard {
    alive: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl ObserverGuard {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn ticket(&self) -> FetchTicket {
        FetchTicket(self.generation.load(Ordering::Relaxed))
    }

    /// Start a new generation; older tickets stop being accepted.
    pub fn advance(&self) -> FetchTicket {
        FetchTicket(self.generation.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        self.is_alive() && self.ticket() == ticket
    }

    pub fn dispose(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Default for ObserverGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_ticket_is_rejected() {
        let guard = ObserverGuard::new();
        let first = guard.ticket();
        assert!(guard.accepts(first));

        let second = guard.advance();
        assert!(!guard.accepts(first));
        assert!(guard.accepts(second));
    }

    #[test]
    fn test_disposed_guard_rejects_everything() {
        let guard = ObserverGuard::new();
        let ticket = guard.ticket();
        let handle = guard.clone();
        handle.dispose();
        assert!(!guard.is_alive());
        assert!(!guard.accepts(ticket));
    }
}
