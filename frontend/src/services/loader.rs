//! Drives a view's [`ViewState`] from an async request.

use estately::{FetchResult, RequestId, ViewState};
use leptos::*;
use std::future::Future;

/// Start a request for `state` and apply its result when it lands.
///
/// The result is dropped when a newer request was started in the meantime,
/// or when the owning view has been unmounted and its signal disposed.
pub fn spawn_load<T, Fut>(state: RwSignal<ViewState<T>>, what: &'static str, request: Fut)
where
    T: 'static,
    Fut: Future<Output = FetchResult<T>> + 'static,
{
    let Some(id) = begin_load(state, what) else {
        return;
    };

    spawn_local(async move {
        let result = request.await;
        apply_result(state, id, what, result);
    });
}

/// Enter `Loading`, or `None` when the view is already gone.
fn begin_load<T: 'static>(state: RwSignal<ViewState<T>>, what: &str) -> Option<RequestId> {
    let id = state.try_update(|s| s.begin());
    if id.is_none() {
        log::debug!("Not loading {}: view already disposed", what);
    }
    id
}

/// Returns `true` only when the result reached the view.
fn apply_result<T: 'static>(
    state: RwSignal<ViewState<T>>,
    id: RequestId,
    what: &str,
    result: FetchResult<T>,
) -> bool {
    if let Err(e) = &result {
        log::error!("❌ Error fetching {}: {}", what, e);
    }

    match state.try_update(|s| s.resolve(id, result)) {
        Some(applied) => applied,
        None => {
            log::debug!("Discarding {} response: view unmounted", what);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estately::{FetchError, LoadState};

    #[test]
    fn test_result_reaches_mounted_view() {
        let runtime = create_runtime();
        let state = create_rw_signal(ViewState::<u32>::new());

        let id = begin_load(state, "count").unwrap();
        assert!(state.with_untracked(ViewState::is_pending));

        assert!(apply_result(state, id, "count", Ok(7)));
        assert_eq!(state.with_untracked(|s| s.loaded().copied()), Some(7));

        runtime.dispose();
    }

    #[test]
    fn test_failure_reaches_mounted_view() {
        let runtime = create_runtime();
        let state = create_rw_signal(ViewState::<u32>::new());

        let id = begin_load(state, "count").unwrap();
        let error = FetchError::Network("offline".into());
        assert!(apply_result(state, id, "count", Err(error.clone())));
        assert_eq!(
            state.with_untracked(|s| s.load().clone()),
            LoadState::Failed(error)
        );

        runtime.dispose();
    }

    #[test]
    fn test_disposed_view_starts_nothing() {
        let runtime = create_runtime();
        let state = create_rw_signal(ViewState::<u32>::new());
        state.dispose();

        assert!(begin_load(state, "count").is_none());

        runtime.dispose();
    }

    #[test]
    fn test_response_after_unmount_is_dropped() {
        let runtime = create_runtime();
        let state = create_rw_signal(ViewState::<u32>::new());

        let id = begin_load(state, "count").unwrap();
        state.dispose();

        assert!(!apply_result(state, id, "count", Ok(7)));

        runtime.dispose();
    }

    #[test]
    fn test_stale_response_is_rejected() {
        let runtime = create_runtime();
        let state = create_rw_signal(ViewState::<&str>::new());

        let first = begin_load(state, "type").unwrap();
        let second = begin_load(state, "type").unwrap();

        assert!(!apply_result(state, first, "type", Ok("villas")));
        assert!(state.with_untracked(ViewState::is_pending));

        assert!(apply_result(state, second, "type", Ok("plots")));
        assert_eq!(state.with_untracked(|s| s.loaded().copied()), Some("plots"));

        runtime.dispose();
    }
}
