//! Data-Fetch Hook
//!
//! Request lifecycle wrapper (`data` / `loading` / `error`) shared by every
//! page that loads server data.
//!
//! Calls are single-flight: starting a new `execute` aborts the one still in
//! flight, and a superseded or cancelled call never writes hook state. Pages
//! call [`ApiHook::cancel`] from `on_cleanup` so a late response cannot land
//! after the view is gone.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{AbortHandle, Abortable, LocalBoxFuture};
use futures::FutureExt;
use leptos::prelude::*;

use crate::error::ApiError;

type Operation<A, T> = Arc<dyn Fn(A) -> LocalBoxFuture<'static, Result<T, ApiError>> + Send + Sync>;
type SuccessCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;
type ErrorCallback = Arc<dyn Fn(&ApiError) + Send + Sync>;

pub struct ApiHook<A, T: Send + Sync + 'static> {
    pub(crate) data: ArcRwSignal<Option<T>>,
    pub(crate) loading: ArcRwSignal<bool>,
    pub(crate) error: ArcRwSignal<Option<ApiError>>,
    operation: Operation<A, T>,
    on_success: Option<SuccessCallback<T>>,
    on_error: Option<ErrorCallback>,
    generation: Arc<AtomicU64>,
    in_flight: Arc<Mutex<Option<AbortHandle>>>,
}

impl<A, T: Send + Sync + 'static> Clone for ApiHook<A, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: self.loading.clone(),
            error: self.error.clone(),
            operation: self.operation.clone(),
            on_success: self.on_success.clone(),
            on_error: self.on_error.clone(),
            generation: self.generation.clone(),
            in_flight: self.in_flight.clone(),
        }
    }
}

/// Wrap an async endpoint call in a request lifecycle
pub fn use_api<A, T, F, Fut>(operation: F) -> ApiHook<A, T>
where
    T: Send + Sync + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    ApiHook {
        data: ArcRwSignal::new(None),
        loading: ArcRwSignal::new(false),
        error: ArcRwSignal::new(None),
        operation: Arc::new(move |args| operation(args).boxed_local()),
        on_success: None,
        on_error: None,
        generation: Arc::new(AtomicU64::new(0)),
        in_flight: Arc::new(Mutex::new(None)),
    }
}

impl<A: 'static, T: Clone + Send + Sync + 'static> ApiHook<A, T> {
    pub fn on_success(mut self, callback: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl Fn(&ApiError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(callback));
        self
    }

    /// Run the operation.
    ///
    /// `loading` is cleared whenever this call settles as the latest one.
    /// Success stores and returns the payload; failure stores the error and
    /// returns it as well. A superseded call returns `ApiError::Cancelled`
    /// and leaves the hook untouched.
    pub async fn execute(&self, args: A) -> Result<T, ApiError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.slot().replace(handle) {
            previous.abort();
        }

        self.loading.set(true);
        self.error.set(None);

        let outcome = Abortable::new((self.operation)(args), registration).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("[HOOK] Discarding superseded call #{}", generation);
            return Err(ApiError::Cancelled);
        }
        self.slot().take();
        self.loading.set(false);

        match outcome {
            Err(_aborted) => Err(ApiError::Cancelled),
            Ok(Ok(value)) => {
                self.data.set(Some(value.clone()));
                if let Some(callback) = &self.on_success {
                    callback(&value);
                }
                Ok(value)
            }
            Ok(Err(err)) => {
                self.error.set(Some(err.clone()));
                if let Some(callback) = &self.on_error {
                    callback(&err);
                }
                Err(err)
            }
        }
    }

    /// Execute once in the background, e.g. when a page mounts
    pub fn execute_on_mount(&self, args: A) {
        let hook = self.clone();
        leptos::task::spawn_local(async move {
            let _ = hook.execute(args).await;
        });
    }

    /// Abort the in-flight call, if any, and clear `loading`
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.slot().take() {
            handle.abort();
        }
        self.loading.set(false);
    }

    /// Replace `data` without a request
    pub fn set_data(&self, value: Option<T>) {
        self.data.set(value);
    }

    pub fn data(&self) -> Signal<Option<T>> {
        self.data.clone().into()
    }

    pub fn loading(&self) -> Signal<bool> {
        self.loading.clone().into()
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        self.error.clone().into()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<AbortHandle>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::sync::atomic::AtomicUsize;

    fn echo() -> ApiHook<Result<u32, ApiError>, u32> {
        use_api(|result: Result<u32, ApiError>| async move { result })
    }

    #[test]
    fn test_success_stores_payload_and_clears_loading() {
        let successes = Arc::new(AtomicUsize::new(0));
        let hook = echo().on_success({
            let successes = successes.clone();
            move |value| {
                assert_eq!(*value, 7);
                successes.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(block_on(hook.execute(Ok(7))), Ok(7));
        assert_eq!(hook.data.get_untracked(), Some(7));
        assert!(!hook.loading.get_untracked());
        assert_eq!(hook.error.get_untracked(), None);
        assert_eq!(successes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_stores_error_and_reraises() {
        let failures = Arc::new(AtomicUsize::new(0));
        let hook = echo().on_error({
            let failures = failures.clone();
            move |_| {
                failures.fetch_add(1, Ordering::SeqCst);
            }
        });
        let err = ApiError::Network("offline".to_string());

        assert_eq!(block_on(hook.execute(Err(err.clone()))), Err(err.clone()));
        assert_eq!(hook.error.get_untracked(), Some(err));
        assert!(!hook.loading.get_untracked());
        assert_eq!(hook.data.get_untracked(), None);
        assert_eq!(failures.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_next_call_clears_previous_error() {
        let hook = echo();
        let _ = block_on(hook.execute(Err(ApiError::Unauthorized)));
        assert!(hook.error.get_untracked().is_some());

        let _ = block_on(hook.execute(Ok(1)));
        assert_eq!(hook.error.get_untracked(), None);
    }

    #[test]
    fn test_newer_call_supersedes_older() {
        let hook = use_api(|rx: oneshot::Receiver<u32>| async move {
            rx.await.map_err(|_| ApiError::Network("dropped".to_string()))
        });
        let (_slow_tx, slow_rx) = oneshot::channel::<u32>();
        let (fast_tx, fast_rx) = oneshot::channel::<u32>();
        fast_tx.send(2).unwrap();

        let (first, second) = block_on(async {
            futures::join!(hook.execute(slow_rx), hook.execute(fast_rx))
        });

        assert_eq!(first, Err(ApiError::Cancelled));
        assert_eq!(second, Ok(2));
        assert_eq!(hook.data.get_untracked(), Some(2));
        assert!(!hook.loading.get_untracked());
    }

    #[test]
    fn test_cancel_discards_late_result() {
        let hook = use_api(|rx: oneshot::Receiver<u32>| async move {
            rx.await.map_err(|_| ApiError::Network("dropped".to_string()))
        });
        let (tx, rx) = oneshot::channel::<u32>();

        let result = block_on(async {
            let call = hook.execute(rx);
            let teardown = async {
                assert!(hook.loading.get_untracked());
                hook.cancel();
                let _ = tx.send(9);
            };
            let (result, ()) = futures::join!(call, teardown);
            result
        });

        assert_eq!(result, Err(ApiError::Cancelled));
        assert_eq!(hook.data.get_untracked(), None);
        assert!(!hook.loading.get_untracked());
    }

    #[test]
    fn test_set_data_overrides() {
        let hook = echo();
        hook.set_data(Some(3));
        assert_eq!(hook.data.get_untracked(), Some(3));
    }
}
