use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Slice;
use crate::action::Action;

/// Feedback modal state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackState {
	pub visible: bool,
	pub backdrop: bool,
	pub giving_feedback: bool,
	/// Star rating; 0 means not rated yet.
	pub rate: u8,
	pub message: String,
}

/// Partial feedback update. Absent fields keep their current value.
///
/// Keys outside the feedback shape are rejected when decoding, so a merge can
/// never grow the slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeedbackPatch {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub visible: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub backdrop: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub giving_feedback: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rate: Option<u8>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl FeedbackState {
	/// Shallow merge of `patch` over `self`.
	pub fn merged(&self, patch: &FeedbackPatch) -> Self {
		Self {
			visible: patch.visible.unwrap_or(self.visible),
			backdrop: patch.backdrop.unwrap_or(self.backdrop),
			giving_feedback: patch.giving_feedback.unwrap_or(self.giving_feedback),
			rate: patch.rate.unwrap_or(self.rate),
			message: patch.message.clone().unwrap_or_else(|| self.message.clone()),
		}
	}
}

impl Slice for FeedbackState {
	const NAME: &'static str = "feedback";

	fn reduce(state: &Arc<Self>, action: &Action) -> Arc<Self> {
		match action {
			Action::UpdateFeedback(patch) => Arc::new(state.merged(patch)),
			Action::CloseFeedback => Arc::new(Self {
				visible: false,
				backdrop: false,
				..Self::clone(state)
			}),
			Action::ResetFeedback => Arc::new(Self::default()),
			_ => Arc::clone(state),
		}
	}
}
