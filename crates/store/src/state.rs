use std::sync::Arc;

use serde::Serialize;

use crate::action::Action;
use crate::slices::{FeedbackState, PersistState, RedirectorState, Slice, ToastState};

/// The whole state tree. Each field is one slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
	pub feedback: Arc<FeedbackState>,
	pub persist: Arc<PersistState>,
	pub redirector: Arc<RedirectorState>,
	pub toast: Arc<ToastState>,
}

impl AppState {
	/// Runs every slice reducer. Returns `Arc::clone(this)` when no slice
	/// changed.
	pub fn reduce(this: &Arc<Self>, action: &Action) -> Arc<Self> {
		let feedback = FeedbackState::reduce(&this.feedback, action);
		let persist = PersistState::reduce(&this.persist, action);
		let redirector = RedirectorState::reduce(&this.redirector, action);
		let toast = ToastState::reduce(&this.toast, action);

		let unchanged = Arc::ptr_eq(&feedback, &this.feedback)
			&& Arc::ptr_eq(&persist, &this.persist)
			&& Arc::ptr_eq(&redirector, &this.redirector)
			&& Arc::ptr_eq(&toast, &this.toast);
		if unchanged {
			return Arc::clone(this);
		}

		Arc::new(Self {
			feedback,
			persist,
			redirector,
			toast,
		})
	}

	/// Names of the slices whose `Arc` differs between `self` and `next`,
	/// in reducer order.
	pub fn changed_slices(&self, next: &AppState) -> Vec<&'static str> {
		let mut changed = Vec::new();
		if !Arc::ptr_eq(&self.feedback, &next.feedback) {
			changed.push(FeedbackState::NAME);
		}
		if !Arc::ptr_eq(&self.persist, &next.persist) {
			changed.push(PersistState::NAME);
		}
		if !Arc::ptr_eq(&self.redirector, &next.redirector) {
			changed.push(RedirectorState::NAME);
		}
		if !Arc::ptr_eq(&self.toast, &next.toast) {
			changed.push(ToastState::NAME);
		}
		changed
	}
}
