//! FIFO dispatch queue.
//!
//! Several logical sources (input handlers, network responses) submit
//! actions through cloned [`ActionSender`]s. The single owner of the
//! [`Store`](crate::Store) drains the [`ActionReceiver`], so actions apply one
//! at a time in send order.

use tokio::sync::mpsc;

use crate::action::Action;
use crate::error::QueueClosed;

/// Creates a connected sender/receiver pair.
pub fn action_channel() -> (ActionSender, ActionReceiver) {
	let (tx, rx) = mpsc::unbounded_channel();
	(ActionSender { tx }, ActionReceiver { rx })
}

/// Submits actions to the store's queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ActionSender {
	tx: mpsc::UnboundedSender<Action>,
}

impl ActionSender {
	/// Queues `action`. Fails only when the receiver was dropped.
	pub fn send(&self, action: Action) -> Result<(), QueueClosed> {
		self.tx.send(action).map_err(|err| QueueClosed(err.0))
	}

	pub fn is_closed(&self) -> bool {
		self.tx.is_closed()
	}
}

/// Receiving end, owned next to the store.
#[derive(Debug)]
pub struct ActionReceiver {
	rx: mpsc::UnboundedReceiver<Action>,
}

impl ActionReceiver {
	/// Next queued action without waiting.
	pub(crate) fn try_next(&mut self) -> Option<Action> {
		self.rx.try_recv().ok()
	}

	/// Next action, waiting until one arrives. `None` once every sender is
	/// dropped and the queue is empty.
	pub(crate) async fn next(&mut self) -> Option<Action> {
		self.rx.recv().await
	}
}
