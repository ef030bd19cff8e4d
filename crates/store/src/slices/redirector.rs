use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Slice;
use crate::action::Action;

/// A pending redirect target.
///
/// Only `key` is required. Router fields other than `pathname` (`search`,
/// `hash`, `state`, ...) are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
	pub key: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pathname: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Location {
	pub fn new(key: impl Into<String>, pathname: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			pathname: Some(pathname.into()),
			extra: Map::new(),
		}
	}
}

/// Redirect targets in insertion order. Keys may repeat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedirectorState {
	pub locations: Vec<Location>,
}

impl Slice for RedirectorState {
	const NAME: &'static str = "redirector";

	fn reduce(state: &Arc<Self>, action: &Action) -> Arc<Self> {
		match action {
			Action::AddLocation(location) => {
				let mut locations = state.locations.clone();
				locations.push(location.clone());
				Arc::new(Self { locations })
			}
			Action::RemoveLocation(key) => Arc::new(Self {
				locations: state
					.locations
					.iter()
					.filter(|l| l.key != *key)
					.cloned()
					.collect(),
			}),
			_ => Arc::clone(state),
		}
	}
}
