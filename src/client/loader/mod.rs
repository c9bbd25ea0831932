//! Screen data loading. Fetches run inside a resource future and write their
//! progress into a [`LoadState`] signal that the screen renders from.
//!
//! In-flight loads are not cancelled when a new one starts for the same
//! signal; whichever completes last writes the final state.

#[cfg(feature = "web")]
use std::future::Future;

#[cfg(feature = "web")]
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::api::ApiError;

#[cfg(test)]
mod tests;

/// Lifecycle of one screen's backend data. Screens render a skeleton while
/// `Loading`, the view once `Loaded`, and an alert on `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error(ApiError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(error) => LoadState::Error(error),
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

/// Drive a fetch future into a state signal. Writes happen inside the
/// future, never during render.
#[cfg(feature = "web")]
pub async fn load_into<T: 'static>(
    mut state: Signal<LoadState<T>>,
    fetch: impl Future<Output = Result<T, ApiError>>,
) {
    state.set(LoadState::Loading);

    let result = fetch.await;
    if let Err(err) = &result {
        tracing::error!("Failed to load data: {err}");
    }

    state.set(LoadState::from_result(result));
}
