//! Loading/error state around an asynchronous loader.
//!
//! State changes are published through a [`tokio::sync::watch`] channel so a
//! presentation layer can subscribe and re-render on every change.

use crate::consts::DEFAULT_LOAD_KEY;
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::watch;

/// Message shown when a loader fails without saying why.
pub const LOAD_FAILED: &str = "failed to load";

/// Snapshot of what a view is showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadState<T> {
    pub info: Option<T>,
    pub is_loading: bool,
    /// Empty unless the last load failed.
    pub error: String,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            info: None,
            is_loading: false,
            error: String::new(),
        }
    }
}

/// Fetches the model behind a view.
#[async_trait]
pub trait Loader: Send + Sync {
    type Output: Send + Sync;

    async fn load(&self, key: &str) -> anyhow::Result<Self::Output>;
}

pub struct ViewModel<L: Loader> {
    loader: L,
    state: watch::Sender<LoadState<L::Output>>,
}

impl<L: Loader> ViewModel<L> {
    pub fn new(loader: L) -> Self {
        let (state, _) = watch::channel(LoadState::default());
        Self { loader, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState<L::Output>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> LoadState<L::Output>
    where
        L::Output: Clone,
    {
        self.state.borrow().clone()
    }

    /// Loads `key` into the state.
    ///
    /// `is_loading` is raised for the duration of the call and lowered again
    /// however it ends, including when this future is dropped mid-load.
    pub async fn load_info(&self, key: &str) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error.clear();
        });
        let _loading = LoadingGuard(&self.state);

        match self.loader.load(key).await {
            Ok(info) => self.state.send_modify(|state| state.info = Some(info)),
            Err(err) => {
                tracing::warn!(key, error = %err, "view model load failed");
                let mut message = err.to_string();
                if message.is_empty() {
                    message = LOAD_FAILED.to_owned();
                }
                self.state.send_modify(|state| {
                    state.error = message;
                    state.info = None;
                });
            }
        }
    }

    pub async fn load_default(&self) {
        self.load_info(DEFAULT_LOAD_KEY).await;
    }
}

struct LoadingGuard<'a, T>(&'a watch::Sender<LoadState<T>>);

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.0.send_modify(|state| state.is_loading = false);
    }
}
