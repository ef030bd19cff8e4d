//! Client state store.
//!
//! [`Store`] owns an [`AppState`] made of four independent slices. Actions
//! flow through [`Store::dispatch`]; each slice's reducer computes its next
//! value, and subscribers see the new tree once per change.
//!
//! ```
//! use alloysim_store::{Action, Location, Store};
//!
//! let mut store = Store::new();
//! store.dispatch(Action::AddLocation(Location::new("a", "/alloys")));
//! store.dispatch(Action::AddLocation(Location::new("b", "/sim")));
//! store.dispatch(Action::RemoveLocation("a".into()));
//! assert_eq!(store.state().redirector.locations, [Location::new("b", "/sim")]);
//! ```

pub mod action;
pub mod error;
pub mod queue;
pub mod slices;
pub mod state;
pub mod store;

pub use action::{Action, ActionType};
pub use error::{ActionError, QueueClosed};
pub use queue::{ActionReceiver, ActionSender, action_channel};
pub use slices::{
	FeedbackPatch, FeedbackState, Level, Location, PersistState, RedirectorState, SimSnapshot,
	Slice, Toast, ToastState,
};
pub use state::AppState;
pub use store::{Listener, Store, StoreConfig, SubscriptionId};
