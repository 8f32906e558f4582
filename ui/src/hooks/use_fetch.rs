use fetcher::{FetchCycle, Generation, GenerationCounter, Phase, RequestKey};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;
use crate::get_fetch_client;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub phase: Phase,
    pub refetch: Callback<()>,
}

/// Per-hook fetch state, owned through `use_reducer`.
struct CycleState<T>(FetchCycle<T>);

impl<T> Default for CycleState<T> {
    fn default() -> Self {
        CycleState(FetchCycle::new())
    }
}

enum CycleAction<T> {
    Begin(Generation),
    Settle(Generation, Result<Option<T>, String>),
}

impl<T: Clone + 'static> Reducible for CycleState<T> {
    type Action = CycleAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut cycle = self.0.clone();

        match action {
            CycleAction::Begin(generation) => cycle.begin(generation),
            CycleAction::Settle(generation, outcome) => {
                if !cycle.settle(generation, outcome) {
                    return self;
                }
            }
        }

        Rc::new(CycleState(cycle))
    }
}

/// Generic fetch hook composer.
///
/// Fetches on mount and whenever `deps` changes, and provides refetch.
/// The fetch function captures its inputs from the closure; `deps` is only
/// used for change tracking.
///
/// `Ok(None)` from the fetch function means the response carried no
/// payload. Each cycle takes a new generation, and results from a cycle
/// that has since been superseded are dropped.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_profile(user_id: u32) -> FetchHookReturn<Profile> {
///     use_fetch_with(user_id, move || async move {
///         get_fetch_client()
///             .fetch_data(&profile_key(user_id))
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch_with<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Option<T>, String>> + 'static,
{
    let state = use_reducer(CycleState::<T>::default);
    let generations = use_memo((), |_| GenerationCounter::default());

    let refetch = {
        let dispatcher = state.dispatcher();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let dispatcher = dispatcher.clone();
            let fetch_fn = fetch_fn.clone();

            let generation = generations.next();
            dispatcher.dispatch(CycleAction::Begin(generation));

            yew::platform::spawn_local(async move {
                let outcome = fetch_fn().await;
                if let Err(e) = &outcome {
                    tracing::warn!(%generation, "Fetch failed: {e}");
                }
                dispatcher.dispatch(CycleAction::Settle(generation, outcome));
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();

        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    let cycle = &state.0;
    FetchHookReturn {
        data: cycle.data().cloned().into(),
        is_loading: cycle.is_loading(),
        error: cycle.error().map(str::to_string),
        phase: cycle.phase(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}

/// Fetch the JSON document named by `key` and expose its `data` field.
///
/// The key compares structurally, so callers may rebuild it on every
/// render without triggering another request.
#[hook]
pub fn use_fetch<T>(key: RequestKey) -> FetchHookReturn<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let fetch_key = key.clone();

    use_fetch_with(key, move || {
        let key = fetch_key.clone();
        async move {
            get_fetch_client()
                .fetch_data::<T>(&key)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
