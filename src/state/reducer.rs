use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::state::mvi::{Intent, Reducer, UiState};

/// A plain record stored in a slice.
pub trait Record:
    Clone + PartialEq + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> Record for T where
    T: Clone + PartialEq + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T: Record> UiState for Vec<T> {}

/// Mutations a slice accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceIntent<T> {
    Replace(Vec<T>),
    Append(T),
    /// Out-of-range indices leave the state unchanged.
    RemoveAt(usize),
    Clear,
}

impl<T: Record> Intent for SliceIntent<T> {}

pub struct SliceReducer<T>(PhantomData<T>);

impl<T: Record> Reducer for SliceReducer<T> {
    type State = Vec<T>;
    type Intent = SliceIntent<T>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SliceIntent::Replace(items) => items,
            SliceIntent::Append(item) => {
                state.push(item);
                state
            }
            SliceIntent::RemoveAt(index) => {
                if index < state.len() {
                    state.remove(index);
                }
                state
            }
            SliceIntent::Clear => Vec::new(),
        }
    }
}
