//! Replays recorded actions through a fresh store.

use alloysim_store::{Action, Store, action_channel};
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;


/// Reads actions from either a JSON array or JSON lines (blank lines skipped).
pub fn read_actions(input: &str) -> Result<Vec<Action>> {
	if input.trim_start().starts_with('[') {
		let values: Vec<Value> = serde_json::from_str(input).context("parsing action array")?;
		return values
			.into_iter()
			.enumerate()
			.map(|(i, value)| Action::from_value(value).with_context(|| format!("action #{}", i + 1)))
			.collect();
	}

	input
		.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(i, line)| {
			let value: Value =
				serde_json::from_str(line).with_context(|| format!("parsing line {}", i + 1))?;
			Action::from_value(value).with_context(|| format!("action on line {}", i + 1))
		})
		.collect()
}

/// Queues `actions` and drains them into `store` in order.
pub fn replay(store: &mut Store, actions: Vec<Action>) -> Result<usize> {
	let (sender, mut queue) = action_channel();
	for action in actions {
		sender.send(action)?;
	}
	drop(sender);

	let applied = store.drain(&mut queue);
	info!(applied, "replay finished");
	Ok(applied)
}
