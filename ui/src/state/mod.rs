//! Fetch State Management
//!
//! Two small pieces shared by every tab:
//!
//! - [`RemoteData`]: an explicit state machine for one fetched value.
//!   A value is idle, loading, ready, or failed — never "error plus stale
//!   data" at the same time.
//! - [`FetchSeq`]: per-tab request sequencing. Each fetch takes a ticket;
//!   a response whose ticket is no longer the latest issued is discarded,
//!   so a slow response cannot overwrite the result of a newer request.

use std::cell::Cell;
use std::rc::Rc;

/// State of one remotely fetched value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RemoteData<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Ready(T),
    /// The last request failed with a displayable message.
    Failed(String),
}

impl<T> RemoteData<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(message) => Self::Failed(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonically increasing ticket counter for one tab's requests.
///
/// There is no request cancellation in the browser client; instead, every
/// fetch grabs a ticket with [`begin`](FetchSeq::begin) and checks
/// [`is_current`](FetchSeq::is_current) before writing its response into
/// component state.
#[derive(Debug, Clone, Default)]
pub struct FetchSeq {
    issued: Rc<Cell<u64>>,
}

impl FetchSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all earlier tickets.
    pub fn begin(&self) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        ticket
    }

    /// True when `ticket` belongs to the most recently issued request.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.issued.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_data_transitions() {
        let mut state: RemoteData<u32> = RemoteData::Idle;
        assert!(!state.is_loading());
        assert!(state.ready().is_none());
        assert!(state.error().is_none());

        state = RemoteData::Loading;
        assert!(state.is_loading());

        state = RemoteData::from_result(Ok(7));
        assert_eq!(state.ready(), Some(&7));
        assert!(state.error().is_none());

        state = RemoteData::from_result(Err("nope".into()));
        assert_eq!(state.error(), Some("nope"));
        // A failed state carries no data: error and stale data never coexist.
        assert!(state.ready().is_none());
    }

    #[test]
    fn stale_tickets_are_rejected() {
        let seq = FetchSeq::new();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = FetchSeq::new();
        let clone = seq.clone();
        let ticket = seq.begin();
        assert!(clone.is_current(ticket));
        clone.begin();
        assert!(!seq.is_current(ticket));
    }
}
