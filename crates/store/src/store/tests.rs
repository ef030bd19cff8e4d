use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::slices::{FeedbackPatch, FeedbackState, Location, PersistState, Toast};

#[test]
fn starts_from_initial_slices() {
	let store = Store::new();
	let state = store.state();
	assert_eq!(*state.feedback, FeedbackState::default());
	assert_eq!(*state.persist, PersistState::default());
	assert!(state.redirector.locations.is_empty());
	assert!(state.toast.notifications.is_empty());
}

#[test]
fn unknown_action_keeps_root_reference() {
	let mut store = Store::new();
	let before = Arc::clone(store.state());
	for _ in 0..2 {
		assert!(!store.dispatch(Action::Unknown("NOPE".into())));
		assert!(Arc::ptr_eq(&before, store.state()));
	}
}

#[test]
fn untouched_slices_keep_their_reference() {
	let mut store = Store::new();
	let before = Arc::clone(store.state());
	assert!(store.dispatch(Action::AddFlashToast(Toast::new("t", "hi"))));

	let after = store.state();
	assert!(!Arc::ptr_eq(&before, after));
	assert!(!Arc::ptr_eq(&before.toast, &after.toast));
	assert!(Arc::ptr_eq(&before.feedback, &after.feedback));
	assert!(Arc::ptr_eq(&before.persist, &after.persist));
	assert!(Arc::ptr_eq(&before.redirector, &after.redirector));
	assert!(before.toast.notifications.is_empty());
}

#[test]
fn changed_slices_names_replaced_slices() {
	let mut store = Store::new();
	let before = Arc::clone(store.state());
	store.dispatch(Action::AddFlashToast(Toast::new("t", "hi")));
	store.dispatch(Action::AddLocation(Location::new("a", "/")));

	assert_eq!(before.changed_slices(store.state()), vec!["redirector", "toast"]);
	assert!(store.state().changed_slices(store.state()).is_empty());

	let reset = AppState::reduce(store.state(), &Action::ResetFeedback);
	assert_eq!(store.state().changed_slices(&reset), vec!["feedback"]);
}

#[test]
fn listeners_see_changes_only() {
	let mut store = Store::new();
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	store.subscribe(move |state| sink.borrow_mut().push(state.feedback.visible));

	store.dispatch(Action::UpdateFeedback(FeedbackPatch {
		visible: Some(true),
		..FeedbackPatch::default()
	}));
	store.dispatch(Action::Unknown("IGNORED".into()));
	store.dispatch(Action::CloseFeedback);

	assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn unsubscribe_stops_notifications() {
	let mut store = Store::new();
	let calls = Rc::new(RefCell::new(0));
	let counter = Rc::clone(&calls);
	let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

	store.dispatch(Action::Reset);
	assert!(store.unsubscribe(id));
	assert!(!store.unsubscribe(id));
	store.dispatch(Action::ResetFeedback);

	assert_eq!(*calls.borrow(), 1);
}

#[test]
fn reset_only_touches_persist() {
	let mut store = Store::new();
	store.dispatch(Action::AddLocation(Location::new("a", "/")));
	store.dispatch(Action::Reset);

	let state = store.state();
	assert!(state.persist.is_cleared());
	assert_eq!(state.redirector.locations.len(), 1);
}

#[test]
fn config_is_kept() {
	let store = Store::with_config(StoreConfig { trace_actions: true });
	assert!(store.config().trace_actions);
	assert!(!Store::default().config().trace_actions);
}
