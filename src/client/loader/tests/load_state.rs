//! Tests for the screen data loading state.

use crate::client::api::ApiError;
use crate::client::loader::LoadState;

/// Test conversion of a fetch result into a load state.
///
/// Expected: success carries the data, failure carries the error.
#[test]
fn from_result_maps_both_arms() {
    let loaded = LoadState::from_result(Ok(vec![1, 2, 3]));
    assert_eq!(loaded.data(), Some(&vec![1, 2, 3]));
    assert_eq!(loaded.error(), None);

    let failed: LoadState<Vec<i32>> = LoadState::from_result(Err(ApiError::NotFound));
    assert_eq!(failed.data(), None);
    assert_eq!(failed.error(), Some(&ApiError::NotFound));
}

/// Test the loading predicate across the lifecycle.
///
/// Expected: a screen shows its skeleton before and during the fetch, and
/// stops once data or an error lands.
#[test]
fn is_loading_covers_idle_and_loading() {
    assert!(LoadState::<()>::Idle.is_loading());
    assert!(LoadState::<()>::Loading.is_loading());
    assert!(!LoadState::Loaded(()).is_loading());
    assert!(!LoadState::<()>::Error(ApiError::NotFound).is_loading());
}

/// Test the default state.
///
/// Expected: a fresh signal starts idle so the first render shows the
/// skeleton rather than an empty view.
#[test]
fn default_is_idle() {
    assert_eq!(LoadState::<String>::default(), LoadState::Idle);
}
