//! The store: single owner of the state tree.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::action::Action;
use crate::queue::ActionReceiver;
use crate::state::AppState;

#[cfg(test)]
mod tests;

/// Called with the new state after every dispatch that changed it.
pub type Listener = Box<dyn FnMut(&Arc<AppState>)>;

/// Store behaviour knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
	/// Emit a `trace` event for every dispatched action.
	pub trace_actions: bool,
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the application state and applies actions to it.
///
/// All mutation goes through [`Store::dispatch`]. State is never modified in
/// place; each change installs a new [`AppState`].
pub struct Store {
	state: Arc<AppState>,
	listeners: Vec<(SubscriptionId, Listener)>,
	next_subscription: u64,
	config: StoreConfig,
}

impl Default for Store {
	fn default() -> Self {
		Self::new()
	}
}

impl core::fmt::Debug for Store {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Store")
			.field("state", &self.state)
			.field("listeners", &self.listeners.len())
			.field("config", &self.config)
			.finish()
	}
}

impl Store {
	pub fn new() -> Self {
		Self::with_config(StoreConfig::default())
	}

	pub fn with_config(config: StoreConfig) -> Self {
		Self {
			state: Arc::new(AppState::default()),
			listeners: Vec::new(),
			next_subscription: 0,
			config,
		}
	}

	/// Current state tree.
	pub fn state(&self) -> &Arc<AppState> {
		&self.state
	}

	pub fn config(&self) -> StoreConfig {
		self.config
	}

	/// Applies `action` to every slice. Returns `true` if the state changed,
	/// in which case subscribers have been notified.
	pub fn dispatch(&mut self, action: Action) -> bool {
		if let Action::Unknown(tag) = &action {
			debug!(action = %tag, "no reducer handles action; state unchanged");
		}

		let next = AppState::reduce(&self.state, &action);
		let changed = !Arc::ptr_eq(&next, &self.state);
		if self.config.trace_actions {
			let slices = self.state.changed_slices(&next);
			trace!(action = action.action_type(), changed, ?slices, "dispatch");
		}
		if !changed {
			return false;
		}

		self.state = next;
		for (_, listener) in self.listeners.iter_mut() {
			listener(&self.state);
		}
		true
	}

	/// Registers `listener` for state changes.
	pub fn subscribe(&mut self, listener: impl FnMut(&Arc<AppState>) + 'static) -> SubscriptionId {
		let id = SubscriptionId(self.next_subscription);
		self.next_subscription += 1;
		self.listeners.push((id, Box::new(listener)));
		debug!(subscription = id.0, total = self.listeners.len(), "subscribed");
		id
	}

	/// Removes a listener. Returns `false` if `id` was not registered.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.listeners.len();
		self.listeners.retain(|(sid, _)| *sid != id);
		let removed = self.listeners.len() != before;
		if removed {
			debug!(subscription = id.0, "unsubscribed");
		}
		removed
	}

	/// Applies every action currently queued, in FIFO order. Returns how many
	/// were applied.
	pub fn drain(&mut self, queue: &mut ActionReceiver) -> usize {
		let mut applied = 0;
		while let Some(action) = queue.try_next() {
			self.dispatch(action);
			applied += 1;
		}
		applied
	}

	/// Applies queued actions as they arrive until every sender is dropped.
	/// Returns how many were applied.
	pub async fn run(&mut self, mut queue: ActionReceiver) -> usize {
		let mut applied = 0;
		while let Some(action) = queue.next().await {
			self.dispatch(action);
			applied += 1;
		}
		debug!(applied, "dispatch queue closed");
		applied
	}
}
