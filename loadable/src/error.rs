//! Errors

// Imports
use {
	crate::{LoadState, Pending},
	core::fmt,
};

/// Error returned when a loadable was accessed in the wrong state
#[derive(PartialEq, Eq, Clone, Copy, Debug, thiserror::Error)]
#[error("Expected loadable to be {expected}, found {found}")]
pub struct StateError {
	/// Expected state
	pub expected: LoadState,

	/// Actual state
	pub found: LoadState,
}

/// Error returned by [`Loadable::get_value`](crate::Loadable::get_value).
///
/// The [`Loading`](Self::Loading) variant carries the pending operation
/// itself, so that a scheduler can await it before retrying.
pub enum GetValueError<'a, T, E> {
	/// The loadable failed to load
	Failed(&'a E),

	/// The loadable is still loading
	Loading(&'a Pending<T, E>),
}

impl<T, E> GetValueError<'_, T, E> {
	/// Returns the state of the loadable that produced this error
	#[must_use]
	pub const fn state(&self) -> LoadState {
		match self {
			Self::Failed(_) => LoadState::HasError,
			Self::Loading(_) => LoadState::Loading,
		}
	}

	/// Returns if the loadable is still loading
	#[must_use]
	pub const fn is_loading(&self) -> bool {
		matches!(self, Self::Loading(_))
	}
}

impl<T, E: fmt::Display> fmt::Display for GetValueError<'_, T, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Failed(err) => write!(f, "Loadable failed to load: {err}"),
			Self::Loading(_) => f.write_str("Loadable is still loading"),
		}
	}
}

impl<T, E: fmt::Debug + fmt::Display> core::error::Error for GetValueError<'_, T, E> {}

impl<T, E> Clone for GetValueError<'_, T, E> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T, E> Copy for GetValueError<'_, T, E> {}

impl<T, E: fmt::Debug> fmt::Debug for GetValueError<'_, T, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
			Self::Loading(pending) => f.debug_tuple("Loading").field(pending).finish(),
		}
	}
}
