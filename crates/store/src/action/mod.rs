//! Actions: named state transitions with optional payloads.
//!
//! In process, an [`Action`] is a closed enum. At the boundary (server
//! responses, replay files) actions travel as `{ "type": TAG, "payload": ... }`
//! and are decoded with [`Action::from_value`]. Tags no reducer knows decode
//! to [`Action::Unknown`] and pass through every reducer unchanged.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::debug;

use crate::error::{ActionError, Result};
use crate::slices::{FeedbackPatch, Location, SimSnapshot, Toast};


/// Tags of the actions reducers handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum ActionType {
	#[strum(serialize = "UPDATE_FEEDBACK")]
	UpdateFeedback,
	#[strum(serialize = "CLOSE_FEEDBACK")]
	CloseFeedback,
	#[strum(serialize = "RESET_FEEDBACK")]
	ResetFeedback,
	#[strum(serialize = "PERSIST_SIM")]
	PersistSim,
	#[strum(serialize = "RESET")]
	Reset,
	#[strum(serialize = "ADD_LOCATION")]
	AddLocation,
	#[strum(serialize = "REMOVE_LOCATION")]
	RemoveLocation,
	#[strum(serialize = "ADD_FLASH_TOAST")]
	AddFlashToast,
	#[strum(serialize = "REMOVE_FLASH_TOAST")]
	RemoveFlashToast,
}

impl ActionType {
	pub fn as_str(self) -> &'static str {
		self.into()
	}
}

/// A state transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
	/// Shallow-merge into the feedback slice.
	UpdateFeedback(FeedbackPatch),
	/// Hide the feedback modal and its backdrop.
	CloseFeedback,
	/// Restore the feedback slice to its initial value.
	ResetFeedback,
	/// Replace the last simulation snapshot.
	PersistSim(SimSnapshot),
	/// Clear the persist slice to an empty record.
	Reset,
	AddLocation(Location),
	/// Remove every location with this key.
	RemoveLocation(String),
	AddFlashToast(Toast),
	/// Remove every toast with this key.
	RemoveFlashToast(String),
	/// Any tag outside the known set.
	Unknown(String),
}

impl Action {
	/// The known tag, or `None` for [`Action::Unknown`].
	pub fn kind(&self) -> Option<ActionType> {
		Some(match self {
			Action::UpdateFeedback(_) => ActionType::UpdateFeedback,
			Action::CloseFeedback => ActionType::CloseFeedback,
			Action::ResetFeedback => ActionType::ResetFeedback,
			Action::PersistSim(_) => ActionType::PersistSim,
			Action::Reset => ActionType::Reset,
			Action::AddLocation(_) => ActionType::AddLocation,
			Action::RemoveLocation(_) => ActionType::RemoveLocation,
			Action::AddFlashToast(_) => ActionType::AddFlashToast,
			Action::RemoveFlashToast(_) => ActionType::RemoveFlashToast,
			Action::Unknown(_) => return None,
		})
	}

	/// The wire tag, e.g. `"ADD_LOCATION"`.
	pub fn action_type(&self) -> &str {
		match self {
			Action::Unknown(tag) => tag.as_str(),
			known => known.kind().map_or("", ActionType::as_str),
		}
	}

	/// Decodes `{ "type": TAG, "payload"?: ... }`.
	pub fn from_value(value: Value) -> Result<Self> {
		let Value::Object(mut obj) = value else {
			return Err(ActionError::NotAnObject);
		};
		let tag = match obj.remove("type") {
			Some(Value::String(tag)) => tag,
			Some(_) => return Err(ActionError::InvalidType),
			None => return Err(ActionError::MissingType),
		};
		let payload = obj.remove("payload");

		let Ok(kind) = tag.parse::<ActionType>() else {
			debug!(action = %tag, "decoded unknown action type");
			return Ok(Action::Unknown(tag));
		};

		Ok(match kind {
			ActionType::UpdateFeedback => Action::UpdateFeedback(payload_as(kind, payload)?),
			ActionType::CloseFeedback => Action::CloseFeedback,
			ActionType::ResetFeedback => Action::ResetFeedback,
			ActionType::PersistSim => Action::PersistSim(payload_as(kind, payload)?),
			ActionType::Reset => Action::Reset,
			ActionType::AddLocation => Action::AddLocation(payload_as(kind, payload)?),
			ActionType::RemoveLocation => Action::RemoveLocation(payload_as(kind, payload)?),
			ActionType::AddFlashToast => Action::AddFlashToast(payload_as(kind, payload)?),
			ActionType::RemoveFlashToast => Action::RemoveFlashToast(payload_as(kind, payload)?),
		})
	}

	/// Encodes to the `{ "type": TAG, "payload"?: ... }` shape.
	pub fn to_value(&self) -> Value {
		let payload = match self {
			Action::UpdateFeedback(patch) => serde_json::to_value(patch).ok(),
			Action::PersistSim(sim) => Some(Value::Object(sim.clone())),
			Action::AddLocation(location) => serde_json::to_value(location).ok(),
			Action::AddFlashToast(toast) => serde_json::to_value(toast).ok(),
			Action::RemoveLocation(key) | Action::RemoveFlashToast(key) => Some(Value::String(key.clone())),
			Action::CloseFeedback | Action::ResetFeedback | Action::Reset | Action::Unknown(_) => None,
		};

		let mut obj = Map::new();
		obj.insert("type".to_string(), Value::String(self.action_type().to_string()));
		if let Some(payload) = payload {
			obj.insert("payload".to_string(), payload);
		}
		Value::Object(obj)
	}
}

fn payload_as<T: DeserializeOwned>(action: ActionType, payload: Option<Value>) -> Result<T> {
	let payload = payload.ok_or(ActionError::MissingPayload(action))?;
	serde_json::from_value(payload).map_err(|source| ActionError::Payload { action, source })
}
