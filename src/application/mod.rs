//! Application layer: the shortening controller and its observable state.

mod controller;

pub use controller::{RequestState, ShorteningController, StateSnapshot};
