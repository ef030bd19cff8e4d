use thiserror::Error;

use crate::action::{Action, ActionType};

/// Errors decoding an action from its `{ type, payload }` wire shape.
#[derive(Debug, Error)]
pub enum ActionError {
	#[error("action must be a JSON object")]
	NotAnObject,

	#[error("action is missing its `type` tag")]
	MissingType,

	#[error("action `type` must be a string")]
	InvalidType,

	#[error("{0} requires a payload")]
	MissingPayload(ActionType),

	#[error("invalid payload for {action}: {source}")]
	Payload {
		action: ActionType,
		#[source]
		source: serde_json::Error,
	},
}

/// The receiving end of the dispatch queue is gone.
#[derive(Debug, Error)]
#[error("dispatch queue closed; dropped {}", .0.action_type())]
pub struct QueueClosed(pub Action);

pub type Result<T> = std::result::Result<T, ActionError>;
