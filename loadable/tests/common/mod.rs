//! Test helpers

// Imports
use {
	core::{
		future::Future,
		pin::Pin,
		task::{self, Poll},
	},
	futures::{channel::oneshot, task::noop_waker_ref},
	loadable::Pending,
};

/// Error used by tests
pub const ERROR: &str = "ERROR";

/// Creates a pending operation that settles once the returned sender is used.
pub fn deferred<T, E>() -> (oneshot::Sender<Result<T, E>>, Pending<T, E>)
where
	T: Clone + Send + 'static,
	E: Clone + Send + 'static,
{
	let (tx, rx) = oneshot::channel();
	let pending = Pending::new(async move { rx.await.expect("Sender was dropped") });

	(tx, pending)
}

/// Polls a future once with a no-op waker
pub fn poll_once<F: Future>(fut: Pin<&mut F>) -> Poll<F::Output> {
	let mut cx = task::Context::from_waker(noop_waker_ref());
	fut.poll(&mut cx)
}
