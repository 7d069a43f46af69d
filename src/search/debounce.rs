use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default delay between the last keystroke and the filter being applied
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Identity of one scheduled query application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

/// What a query edit did to the search state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchInput {
    /// Query was blank; the empty query is already applied
    Cleared,
    /// Query will be applied when this ticket fires
    Scheduled(DebounceTicket),
}

#[derive(Debug, Clone)]
struct Pending {
    ticket: DebounceTicket,
    query: String,
}

/// Raw vs. applied search query.
///
/// Holds at most one pending ticket. Every edit supersedes the previous one,
/// so only the last query typed before the delay elapses is ever applied.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    raw: String,
    applied: String,
    pending: Option<Pending>,
    issued: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a query edit
    pub fn on_input(&mut self, value: &str) -> SearchInput {
        self.raw = value.to_string();
        self.pending = None;

        if value.trim().is_empty() {
            self.applied.clear();
            return SearchInput::Cleared;
        }

        self.issued += 1;
        let ticket = DebounceTicket(self.issued);
        self.pending = Some(Pending {
            ticket,
            query: value.to_string(),
        });
        SearchInput::Scheduled(ticket)
    }

    /// Drop the query without waiting for the delay
    pub fn clear(&mut self) -> SearchInput {
        self.on_input("")
    }

    /// Apply the pending query if `ticket` is still the current one
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        match self.pending.take() {
            Some(pending) if pending.ticket == ticket => {
                self.applied = pending.query;
                true
            }
            other => {
                debug!(?ticket, "ignoring superseded search ticket");
                self.pending = other;
                false
            }
        }
    }

    /// Text currently in the search box
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Query the filter is currently built from
    pub fn applied(&self) -> &str {
        &self.applied
    }

    /// True while an edit is waiting for its delay to elapse
    pub fn is_searching(&self) -> bool {
        self.pending.is_some()
    }
}

/// Cancellable deferred delivery of debounce tickets.
///
/// Owns the handle of the single in-flight timer task; scheduling a new
/// ticket aborts the previous task before spawning the next one.
#[derive(Debug)]
pub struct DebounceTimer {
    delay: Duration,
    handle: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<DebounceTicket>,
}

impl DebounceTimer {
    /// Create a timer and the receiver its tickets are delivered on
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<DebounceTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let timer = Self {
            delay,
            handle: None,
            tx,
        };
        (timer, rx)
    }

    /// Deliver `ticket` after the delay, cancelling any earlier schedule.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, ticket: DebounceTicket) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // receiver gone means the screen was dropped
            let _ = tx.send(ticket);
        }));
    }

    /// Abort the in-flight timer, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether a timer task is still waiting to deliver its ticket
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
