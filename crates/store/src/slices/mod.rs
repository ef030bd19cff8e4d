//! State slices and their reducers.
//!
//! Every slice owns a disjoint part of [`AppState`](crate::AppState). A
//! reducer never mutates in place: it returns a fresh `Arc` when the slice
//! changes and the same `Arc` otherwise, so consumers can detect change with
//! [`Arc::ptr_eq`].

use std::sync::Arc;

use crate::action::Action;

mod feedback;
mod persist;
mod redirector;
mod toast;


pub use feedback::{FeedbackPatch, FeedbackState};
pub use persist::{PersistState, SimSnapshot};
pub use redirector::{Location, RedirectorState};
pub use toast::{Level, Toast, ToastState};

/// A state slice with a defined initial value and a pure reducer.
pub trait Slice: Default {
	/// Key of this slice in the serialized state tree.
	const NAME: &'static str;

	/// Computes the next state. Actions the slice does not handle must
	/// return `Arc::clone(state)`.
	fn reduce(state: &Arc<Self>, action: &Action) -> Arc<Self>;
}
