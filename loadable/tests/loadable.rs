//! [`Loadable`] accessor and factory tests

// Modules
mod common;

// Imports
use {
	self::common::ERROR,
	core::{future::IntoFuture, pin::pin, task::Poll},
	futures::executor,
	loadable::{GetValueError, IntoLoaded, LoadState, Loadable, Pending, StateError},
};

#[test]
fn value() {
	loadable_logger::init();

	let loadable = Loadable::<_, &str>::of_value("VALUE");
	assert_eq!(loadable.state(), LoadState::HasValue);
	assert!(matches!(loadable, Loadable::Loaded("VALUE")));
	assert_eq!(loadable.get_value().ok(), Some(&"VALUE"));
	assert_eq!(executor::block_on(loadable.to_pending()), Ok("VALUE"));
	assert_eq!(loadable.value_maybe(), Some(&"VALUE"));
	assert_eq!(loadable.value_or_throw(), Ok(&"VALUE"));
	assert_eq!(loadable.error_maybe(), None);
	assert_eq!(
		loadable.error_or_throw(),
		Err(StateError {
			expected: LoadState::HasError,
			found:    LoadState::HasValue,
		})
	);
	assert!(loadable.pending_maybe().is_none());
	assert!(loadable.pending_or_throw().is_err());
}

#[test]
fn error() {
	loadable_logger::init();

	let loadable = Loadable::<(), _>::of_error(ERROR);
	assert_eq!(loadable.state(), LoadState::HasError);
	assert!(matches!(loadable, Loadable::Err(ERROR)));
	assert!(matches!(loadable.get_value(), Err(GetValueError::Failed(err)) if *err == ERROR));
	assert_eq!(executor::block_on(loadable.to_pending()), Err(ERROR));
	assert_eq!(loadable.value_maybe(), None);
	assert_eq!(
		loadable.value_or_throw(),
		Err(StateError {
			expected: LoadState::HasValue,
			found:    LoadState::HasError,
		})
	);
	assert_eq!(loadable.error_maybe(), Some(&ERROR));
	assert_eq!(loadable.error_or_throw(), Ok(&ERROR));
	assert!(loadable.pending_maybe().is_none());
	assert!(loadable.pending_or_throw().is_err());
}

#[test]
fn pending_value() {
	loadable_logger::init();

	let pending = Pending::<_, &str>::resolved("VALUE");
	let loadable = Loadable::of_pending(pending.clone());
	assert_eq!(loadable.state(), LoadState::Loading);

	// The loadable should hold the exact pending operation it was created with
	let inner = loadable.pending_or_throw().expect("Loadable should be loading");
	assert!(inner.ptr_eq(&pending));
	assert!(loadable.pending_maybe().is_some_and(|inner| inner.ptr_eq(&pending)));
	assert!(matches!(loadable.get_value(), Err(GetValueError::Loading(inner)) if inner.ptr_eq(&pending)));

	assert_eq!(executor::block_on(loadable.to_pending()), Ok("VALUE"));
	assert_eq!(loadable.value_maybe(), None);
	assert_eq!(
		loadable.value_or_throw(),
		Err(StateError {
			expected: LoadState::HasValue,
			found:    LoadState::Loading,
		})
	);
	assert_eq!(loadable.error_maybe(), None);
	assert!(loadable.error_or_throw().is_err());
}

#[test]
fn pending_tracks_settlement() {
	let (tx, pending) = common::deferred::<usize, &str>();
	let loadable = Loadable::of_pending(pending);

	let mut fut = pin!(loadable.to_pending());
	assert!(common::poll_once(fut.as_mut()).is_pending());

	tx.send(Err(ERROR)).expect("Receiver was dropped");
	assert_eq!(common::poll_once(fut), Poll::Ready(Err(ERROR)));

	// The loadable itself is never updated
	assert!(loadable.is_loading());
}

#[test]
fn get_value_suspends_on_loading() {
	let (tx, pending) = common::deferred::<usize, &str>();
	let loadable = Loadable::of_pending(pending);

	// A scheduler should be able to await the pending operation returned and then retry
	let Err(GetValueError::Loading(pending)) = loadable.get_value() else {
		panic!("Loadable should be loading");
	};
	let mut fut = pin!(pending.clone());
	assert!(common::poll_once(fut.as_mut()).is_pending());

	tx.send(Ok(5)).expect("Receiver was dropped");
	assert_eq!(common::poll_once(fut), Poll::Ready(Ok(5)));
	assert_eq!(pending.peek(), Some(&Ok(5)));
}

#[test]
fn factory() {
	let loadable = Loadable::<_, &str>::of(Ok("VALUE"));
	assert!(matches!(loadable, Loadable::Loaded("VALUE")));

	let loadable = Loadable::of(Pending::<_, &str>::resolved("ASYNC"));
	assert!(loadable.is_loading());
	assert_eq!(executor::block_on(loadable.into_future()), Ok("ASYNC"));

	let loadable = Loadable::<(), _>::of(Err(ERROR));
	assert!(matches!(loadable, Loadable::Err(ERROR)));

	// Loadables should not be nested
	let loadable = Loadable::of(Loadable::<_, &str>::of_value("VALUE"));
	assert!(matches!(loadable, Loadable::Loaded("VALUE")));

	let loadable = Loadable::<_, &str>::of_future(async { Ok("FUTURE") });
	assert!(loadable.is_loading());
	assert_eq!(executor::block_on(loadable.into_future()), Ok("FUTURE"));

	let loadable = 5_usize.into_loaded::<&str>();
	assert_eq!(loadable.into_value(), Some(5));
}

#[test]
fn conversions() {
	let loadable = Loadable::from(Ok::<_, &str>(5_usize));
	assert!(loadable.is_loaded());

	let loadable = Loadable::from(Err::<usize, _>(ERROR));
	assert!(loadable.is_err());

	let loadable = Loadable::from(Pending::<usize, &str>::resolved(5));
	assert!(loadable.is_loading());
	assert_eq!(loadable.into_value(), None);
}

#[test]
fn flatten() {
	let loadable = Loadable::<_, &str>::of_value(Loadable::of_value(5_usize)).flatten();
	assert!(matches!(loadable, Loadable::Loaded(5)));

	let loadable = Loadable::<_, &str>::of_value(Loadable::<usize, _>::of_error(ERROR)).flatten();
	assert!(matches!(loadable, Loadable::Err(ERROR)));

	let loadable = Loadable::of_pending(Pending::<_, &str>::resolved(Loadable::of_value(5_usize))).flatten();
	assert!(loadable.is_loading());
	assert_eq!(executor::block_on(loadable.into_future()), Ok(5));
}

#[test]
fn state_error_display() {
	let err = Loadable::<(), _>::of_error(ERROR)
		.value_or_throw()
		.expect_err("Loadable should be errored");
	assert_eq!(err.to_string(), "Expected loadable to be loaded, found errored");

	let loadable = Loadable::<(), _>::of_error(ERROR);
	let err = loadable.get_value().expect_err("Loadable should be errored");
	assert_eq!(err.state(), LoadState::HasError);
	assert_eq!(err.to_string(), "Loadable failed to load: ERROR");
}
