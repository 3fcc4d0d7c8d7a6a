//! Fetch lifecycle for a single view.
//!
//! ```text
//!          begin()            resolve(Ok)
//!   Idle ──────────▶ Loading ────────────▶ Loaded
//!                      ▲  │  resolve(Err)
//!          begin()     │  └────────────▶ Failed
//!   (parameter change) │
//!   Loaded / Failed ───┘
//! ```
//!
//! Every [`ViewState::begin`] hands out a [`RequestId`]. Only the most recent
//! id may resolve the state, so a slow response for an old route parameter
//! can never overwrite a newer one.

use crate::error::{FetchError, FetchResult};

/// Ticket for one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(u64);

/// Where a view is in its fetch lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(FetchError),
}

/// Per-view fetch state with stale-response protection.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState<T> {
    load: LoadState<T>,
    generation: u64,
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self {
            load: LoadState::Idle,
            generation: 0,
        }
    }

    /// Enter `Loading` for a new request. Any older request becomes stale.
    pub fn begin(&mut self) -> RequestId {
        self.generation += 1;
        self.load = LoadState::Loading;
        RequestId(self.generation)
    }

    /// Apply a result. Returns `false` and leaves the state untouched when
    /// `id` is not the latest request.
    pub fn resolve(&mut self, id: RequestId, result: FetchResult<T>) -> bool {
        if !self.is_current(id) {
            log::debug!(
                "Dropping response for request {} (latest is {})",
                id.0,
                self.generation
            );
            return false;
        }
        self.load = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err),
        };
        true
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.generation
    }

    pub fn load(&self) -> &LoadState<T> {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Nothing to show yet: idle or loading.
    pub fn is_pending(&self) -> bool {
        matches!(self.load, LoadState::Idle) || self.is_loading()
    }

    pub fn loaded(&self) -> Option<&T> {
        match &self.load {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state = ViewState::<u32>::new();
        assert_eq!(state.load(), &LoadState::Idle);
        assert!(state.is_pending());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_is_not_pending() {
        let mut state = ViewState::<u32>::new();
        let id = state.begin();
        assert!(state.is_pending());

        let error = FetchError::Status {
            status: 500,
            body: String::new(),
        };
        state.resolve(id, Err(error));
        assert!(!state.is_pending());
        assert!(state.loaded().is_none());
    }

    #[test]
    fn test_loading_then_loaded() {
        let mut state = ViewState::new();
        let id = state.begin();
        assert!(state.is_loading());

        assert!(state.resolve(id, Ok(42)));
        assert_eq!(state.loaded(), Some(&42));
        assert!(!state.is_pending());
    }

    #[test]
    fn test_rejected_fetch_never_stays_loading() {
        let mut state = ViewState::<u32>::new();
        let id = state.begin();
        assert!(state.resolve(id, Err(FetchError::Network("offline".into()))));

        assert!(!state.is_loading());
        assert_eq!(
            state.load(),
            &LoadState::Failed(FetchError::Network("offline".into()))
        );
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut state = ViewState::new();
        let first = state.begin();
        let second = state.begin();

        // first response arrives late, after the parameter already changed
        assert!(!state.resolve(first, Ok("old")));
        assert!(state.is_loading());

        assert!(state.resolve(second, Ok("new")));
        assert_eq!(state.loaded(), Some(&"new"));

        // and even later it still cannot overwrite
        assert!(!state.resolve(first, Ok("old")));
        assert_eq!(state.loaded(), Some(&"new"));
    }

    #[test]
    fn test_parameter_change_reenters_loading() {
        let mut state = ViewState::<u32>::new();
        let id = state.begin();
        state.resolve(id, Err(FetchError::Decode("bad".into())));

        let retry = state.begin();
        assert!(state.is_loading());
        assert!(!matches!(state.load(), LoadState::Failed(_)));
        assert!(state.resolve(retry, Ok(1)));
    }
}
