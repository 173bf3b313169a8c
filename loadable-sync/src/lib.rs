//! Helper crate for `loadable`.
//!
//! Helps select single-threaded vs multi-threaded primitives.

// Imports
use core::future::Future;

#[cfg(feature = "sync")]
mod private {
	/// Bounds required for values moved into a boxed future.
	pub trait MaybeSend: Send {}
	impl<T: ?Sized + Send> MaybeSend for T {}

	/// Bounds required for values shared between clones of a pending operation.
	pub trait MaybeSync: Send + Sync {}
	impl<T: ?Sized + Send + Sync> MaybeSync for T {}

	pub type BoxFuture<'a, T> = futures::future::BoxFuture<'a, T>;
}

#[cfg(not(feature = "sync"))]
mod private {
	/// Bounds required for values moved into a boxed future.
	pub trait MaybeSend {}
	impl<T: ?Sized> MaybeSend for T {}

	/// Bounds required for values shared between clones of a pending operation.
	pub trait MaybeSync {}
	impl<T: ?Sized> MaybeSync for T {}

	pub type BoxFuture<'a, T> = futures::future::LocalBoxFuture<'a, T>;
}

pub use private::*;

/// Boxes a future into a [`BoxFuture`].
pub fn box_future<'a, F>(fut: F) -> BoxFuture<'a, F::Output>
where
	F: Future + MaybeSend + 'a,
{
	Box::pin(fut)
}

#[cfg(test)]
mod tests {
	use {super::*, futures::executor};

	#[test]
	fn boxed_future_resolves() {
		let fut = box_future(async { 5_usize });
		assert_eq!(executor::block_on(fut), 5);
	}

	#[cfg(feature = "sync")]
	#[test]
	fn boxed_future_is_send() {
		fn assert_send<T: Send>(_: &T) {}

		let fut = box_future(async { 5_usize });
		assert_send(&fut);
	}
}
