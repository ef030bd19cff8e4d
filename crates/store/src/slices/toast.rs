use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Slice;
use crate::action::Action;

/// Severity of a flash toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	/// Informational message.
	Info,
	/// Warning message.
	Warn,
	/// Error message.
	Error,
	/// Success message.
	Success,
}

/// A flash notification.
///
/// Only `key` and `message` are required. `level` stays absent unless the
/// payload names one; any other payload keys are carried in `extra` and
/// serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
	pub key: String,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub level: Option<Level>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Toast {
	pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			message: message.into(),
			level: None,
			extra: Map::new(),
		}
	}

	pub fn level(mut self, level: Level) -> Self {
		self.level = Some(level);
		self
	}
}

/// Flash toasts in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToastState {
	pub notifications: Vec<Toast>,
}

impl Slice for ToastState {
	const NAME: &'static str = "toast";

	fn reduce(state: &Arc<Self>, action: &Action) -> Arc<Self> {
		match action {
			Action::AddFlashToast(toast) => {
				let mut notifications = state.notifications.clone();
				notifications.push(toast.clone());
				Arc::new(Self { notifications })
			}
			Action::RemoveFlashToast(key) => Arc::new(Self {
				notifications: state
					.notifications
					.iter()
					.filter(|t| t.key != *key)
					.cloned()
					.collect(),
			}),
			_ => Arc::clone(state),
		}
	}
}
