use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Slice;
use crate::action::Action;

/// Opaque simulation result as returned by the simulation service.
pub type SimSnapshot = Map<String, Value>;

/// Last simulation kept across page changes.
///
/// Starts as `{ "lastSim": {} }`. `RESET` collapses it to `{}`; the key is
/// gone rather than reset to an empty snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistState {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_sim: Option<SimSnapshot>,
}

impl Default for PersistState {
	fn default() -> Self {
		Self {
			last_sim: Some(SimSnapshot::new()),
		}
	}
}

impl PersistState {
	/// The empty record left behind by `RESET`.
	pub const fn cleared() -> Self {
		Self { last_sim: None }
	}

	pub fn is_cleared(&self) -> bool {
		self.last_sim.is_none()
	}
}

impl Slice for PersistState {
	const NAME: &'static str = "persist";

	fn reduce(state: &Arc<Self>, action: &Action) -> Arc<Self> {
		match action {
			Action::PersistSim(sim) => Arc::new(Self {
				last_sim: Some(sim.clone()),
			}),
			Action::Reset => Arc::new(Self::cleared()),
			_ => Arc::clone(state),
		}
	}
}
