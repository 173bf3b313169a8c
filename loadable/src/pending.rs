//! Pending operation

// Imports
use {
	core::{
		fmt,
		future::{self, Future},
		pin::Pin,
		task::{self, Poll},
	},
	futures::future::{FutureExt, Shared},
	loadable_sync::{BoxFuture, MaybeSend},
};

/// Pending operation.
///
/// A shared handle to an asynchronous operation that will either resolve
/// to a `T` or reject with an `E`.
///
/// Clones share the same underlying future, so it is only ever run once,
/// regardless of how many clones are awaited. Dropping a pending operation
/// never cancels it while other clones are alive.
pub struct Pending<T, E> {
	/// Inner
	inner: Shared<BoxFuture<'static, Result<T, E>>>,
}

impl<T, E> Pending<T, E>
where
	T: Clone,
	E: Clone,
{
	/// Creates a new pending operation from a future
	pub fn new<F>(fut: F) -> Self
	where
		F: Future<Output = Result<T, E>> + MaybeSend + 'static,
	{
		Self {
			inner: loadable_sync::box_future(fut).shared(),
		}
	}

	/// Creates an already-settled pending operation
	pub fn ready(res: Result<T, E>) -> Self
	where
		T: MaybeSend + 'static,
		E: MaybeSend + 'static,
	{
		Self::new(future::ready(res))
	}

	/// Creates a pending operation that resolves to `value`
	pub fn resolved(value: T) -> Self
	where
		T: MaybeSend + 'static,
		E: MaybeSend + 'static,
	{
		Self::ready(Ok(value))
	}

	/// Creates a pending operation that rejects with `err`
	pub fn rejected(err: E) -> Self
	where
		T: MaybeSend + 'static,
		E: MaybeSend + 'static,
	{
		Self::ready(Err(err))
	}

	/// Returns the result of this operation, if it has settled.
	///
	/// Does not poll the operation.
	#[must_use]
	pub fn peek(&self) -> Option<&Result<T, E>> {
		self.inner.peek()
	}

	/// Returns if this operation has settled
	#[must_use]
	pub fn is_settled(&self) -> bool {
		self.peek().is_some()
	}

	/// Returns if both pending operations share the same underlying future
	#[must_use]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		self.inner.ptr_eq(&other.inner)
	}
}

impl<T, E> Clone for Pending<T, E> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<T, E> Future for Pending<T, E>
where
	T: Clone,
	E: Clone,
{
	type Output = Result<T, E>;

	fn poll(mut self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> Poll<Self::Output> {
		Pin::new(&mut self.inner).poll(cx)
	}
}

impl<T, E> fmt::Debug for Pending<T, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Pending").finish_non_exhaustive()
	}
}
