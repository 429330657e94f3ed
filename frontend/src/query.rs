//! Yew side of the query cache: a shared client in context and the
//! `use_query` hook the data hooks build on.

use std::{cell::RefCell, future::Future, rc::Rc};

use gloo_timers::future::TimeoutFuture;
use guides_shared::{
    query::{retry_delay_ms, should_retry, Cached, QueryCache, QueryKey, QueryOptions},
    ApiError,
};
use yew::prelude::*;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Handle to the app-wide cache. Clones share one cache.
#[derive(Clone, Default)]
pub struct QueryClient {
    cache: Rc<RefCell<QueryCache>>,
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cache, &other.cache)
    }
}

impl QueryClient {
    fn lookup<T: 'static>(&self, key: &QueryKey, stale_time_ms: u64) -> Cached<T> {
        self.cache.borrow_mut().lookup(key, stale_time_ms, now_ms())
    }

    fn store<T: 'static>(&self, key: QueryKey, value: Rc<T>) {
        let now = now_ms();
        let mut cache = self.cache.borrow_mut();
        cache.insert(key, value, now);
        cache.collect_garbage(now);
    }
}

#[derive(Properties, PartialEq)]
pub struct QueryClientProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(QueryClientProvider)]
pub fn query_client_provider(props: &QueryClientProviderProps) -> Html {
    let client = use_memo((), |_| QueryClient::default());

    html! {
        <ContextProvider<QueryClient> context={(*client).clone()}>
            { for props.children.iter() }
        </ContextProvider<QueryClient>>
    }
}

/// What a component sees of one query.
pub struct QueryHandle<T> {
    pub data: Option<Rc<T>>,
    pub error: Option<ApiError>,
    /// No data yet and a fetch is in flight.
    pub is_loading: bool,
    /// Any fetch in flight, including background refreshes.
    pub is_fetching: bool,
    /// Force a network fetch regardless of freshness.
    pub refetch: Callback<()>,
}

struct QueryState<T> {
    data: Option<Rc<T>>,
    error: Option<ApiError>,
    is_fetching: bool,
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            error: self.error.clone(),
            is_fetching: self.is_fetching,
        }
    }
}

impl<T> QueryState<T> {
    fn idle() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: false,
        }
    }
}

/// Cached, retried fetch keyed by `key`.
///
/// A fresh cache hit never touches the network. A stale hit renders the
/// cached data and refreshes it in the background. Answers that arrive
/// after the key has moved on are dropped.
#[hook]
pub fn use_query<T, F, Fut>(key: QueryKey, options: QueryOptions, fetcher: F) -> QueryHandle<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fallback = use_memo((), |_| QueryClient::default());
    let client = use_context::<QueryClient>().unwrap_or_else(|| (*fallback).clone());

    let state = {
        let client = client.clone();
        let key = key.clone();
        use_state(move || {
            let data = if options.enabled {
                client.lookup::<T>(&key, options.stale_time_ms).data()
            } else {
                None
            };
            QueryState {
                is_fetching: options.enabled && data.is_none(),
                data,
                error: None,
            }
        })
    };
    let latest_key = use_mut_ref(|| key.clone());
    let force_next = use_mut_ref(|| false);
    let nonce = use_state(|| 0u32);

    {
        let state = state.clone();
        let client = client.clone();
        let latest_key = latest_key.clone();
        let force_next = force_next.clone();
        use_effect_with((key, options.enabled, *nonce), move |(key, enabled, _)| {
            *latest_key.borrow_mut() = key.clone();
            let forced = std::mem::take(&mut *force_next.borrow_mut());

            if !*enabled {
                state.set(QueryState::idle());
                return;
            }

            let cached = client.lookup::<T>(key, options.stale_time_ms);
            if !forced {
                if let Cached::Fresh(data) = &cached {
                    state.set(QueryState {
                        data: Some(Rc::clone(data)),
                        error: None,
                        is_fetching: false,
                    });
                    return;
                }
            }

            let previous = cached.data();
            state.set(QueryState {
                data: previous.clone(),
                error: None,
                is_fetching: true,
            });

            let key = key.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut failures = 0u32;
                loop {
                    match fetcher().await {
                        Ok(value) => {
                            let value = Rc::new(value);
                            client.store(key.clone(), Rc::clone(&value));
                            if *latest_key.borrow() == key {
                                state.set(QueryState {
                                    data: Some(value),
                                    error: None,
                                    is_fetching: false,
                                });
                            }
                            break;
                        },
                        Err(err) => {
                            failures += 1;
                            if should_retry(failures, &options, &err) {
                                let delay = retry_delay_ms(failures - 1);
                                log::debug!("query {key} failed ({err}), retry {failures} in {delay}ms");
                                TimeoutFuture::new(u32::try_from(delay).unwrap_or(u32::MAX)).await;
                                if *latest_key.borrow() != key {
                                    break;
                                }
                                continue;
                            }
                            log::warn!("query {key} failed: {err}");
                            if *latest_key.borrow() == key {
                                state.set(QueryState {
                                    data: previous,
                                    error: Some(err),
                                    is_fetching: false,
                                });
                            }
                            break;
                        },
                    }
                }
            });
        });
    }

    let refetch = {
        let nonce = nonce.clone();
        Callback::from(move |_: ()| {
            *force_next.borrow_mut() = true;
            nonce.set(nonce.wrapping_add(1));
        })
    };

    let current = (*state).clone();
    QueryHandle {
        is_loading: current.is_fetching && current.data.is_none(),
        is_fetching: current.is_fetching,
        data: current.data,
        error: current.error,
        refetch,
    }
}
