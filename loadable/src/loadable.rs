//! Loadable value

// Imports
use {
	crate::{GetValueError, Pending, StateError},
	core::future::{Future, IntoFuture},
	loadable_sync::{MaybeSend, MaybeSync},
};

/// Loadable state
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug, derive_more::Display)]
pub enum LoadState {
	/// Has a value
	#[display("loaded")]
	HasValue,

	/// Has an error
	#[display("errored")]
	HasError,

	/// Loading
	#[display("loading")]
	Loading,
}

/// Loadable value.
///
/// Either a loaded value, an error, or a pending operation that will
/// eventually produce one of them.
///
/// Loadables are never mutated after creation, all transformations produce
/// a new loadable.
#[derive(Clone, Debug)]
pub enum Loadable<T, E> {
	/// Loaded
	Loaded(T),

	/// Failed to load
	Err(E),

	/// Loading
	Loading(Pending<T, E>),
}

impl<T, E> Loadable<T, E> {
	/// Creates a loaded loadable
	pub const fn of_value(value: T) -> Self {
		Self::Loaded(value)
	}

	/// Creates an errored loadable
	pub const fn of_error(err: E) -> Self {
		Self::Err(err)
	}

	/// Creates a loading loadable from a pending operation
	pub const fn of_pending(pending: Pending<T, E>) -> Self {
		Self::Loading(pending)
	}

	/// Creates a loadable from anything convertible to it.
	///
	/// Pending operations become loading, results become either loaded or errored,
	/// and loadables are returned as-is.
	pub fn of<L>(value: L) -> Self
	where
		L: IntoLoadable<T, E>,
	{
		value.into_loadable()
	}

	/// Returns the state of this loadable
	#[must_use]
	pub const fn state(&self) -> LoadState {
		match self {
			Self::Loaded(_) => LoadState::HasValue,
			Self::Err(_) => LoadState::HasError,
			Self::Loading(_) => LoadState::Loading,
		}
	}

	/// Returns if the loadable has a value
	#[must_use]
	pub const fn is_loaded(&self) -> bool {
		matches!(self, Self::Loaded(_))
	}

	/// Returns if the loadable has an error
	#[must_use]
	pub const fn is_err(&self) -> bool {
		matches!(self, Self::Err(_))
	}

	/// Returns if the loadable is loading
	#[must_use]
	pub const fn is_loading(&self) -> bool {
		matches!(self, Self::Loading(_))
	}

	/// Gets the value of this loadable.
	///
	/// # Errors
	/// Returns [`GetValueError::Failed`] with the error if errored, and
	/// [`GetValueError::Loading`] with the pending operation if loading.
	pub const fn get_value(&self) -> Result<&T, GetValueError<'_, T, E>> {
		match self {
			Self::Loaded(value) => Ok(value),
			Self::Err(err) => Err(GetValueError::Failed(err)),
			Self::Loading(pending) => Err(GetValueError::Loading(pending)),
		}
	}

	/// Returns the value, if loaded
	#[must_use]
	pub const fn value_maybe(&self) -> Option<&T> {
		match self {
			Self::Loaded(value) => Some(value),
			Self::Err(_) | Self::Loading(_) => None,
		}
	}

	/// Returns the value.
	///
	/// # Errors
	/// Returns an error if not loaded
	pub const fn value_or_throw(&self) -> Result<&T, StateError> {
		match self.value_maybe() {
			Some(value) => Ok(value),
			None => Err(self.state_error(LoadState::HasValue)),
		}
	}

	/// Returns the error, if errored
	#[must_use]
	pub const fn error_maybe(&self) -> Option<&E> {
		match self {
			Self::Err(err) => Some(err),
			Self::Loaded(_) | Self::Loading(_) => None,
		}
	}

	/// Returns the error.
	///
	/// # Errors
	/// Returns an error if not errored
	pub const fn error_or_throw(&self) -> Result<&E, StateError> {
		match self.error_maybe() {
			Some(err) => Ok(err),
			None => Err(self.state_error(LoadState::HasError)),
		}
	}

	/// Returns the pending operation, if loading
	#[must_use]
	pub const fn pending_maybe(&self) -> Option<&Pending<T, E>> {
		match self {
			Self::Loading(pending) => Some(pending),
			Self::Loaded(_) | Self::Err(_) => None,
		}
	}

	/// Returns the pending operation.
	///
	/// # Errors
	/// Returns an error if not loading
	pub const fn pending_or_throw(&self) -> Result<&Pending<T, E>, StateError> {
		match self.pending_maybe() {
			Some(pending) => Ok(pending),
			None => Err(self.state_error(LoadState::Loading)),
		}
	}

	/// Converts this to an option.
	///
	/// Maps `Loadable::Loaded` to `Some` and the rest to `None`.
	pub fn into_value(self) -> Option<T> {
		match self {
			Self::Loaded(value) => Some(value),
			Self::Err(_) | Self::Loading(_) => None,
		}
	}

	/// Creates a state error for when `expected` was expected
	const fn state_error(&self, expected: LoadState) -> StateError {
		StateError {
			expected,
			found: self.state(),
		}
	}
}

impl<T, E> Loadable<T, E>
where
	T: Clone + MaybeSync + 'static,
	E: Clone + MaybeSync + 'static,
{
	/// Creates a loading loadable from a future
	pub fn of_future<F>(fut: F) -> Self
	where
		F: Future<Output = Result<T, E>> + MaybeSend + 'static,
	{
		Self::Loading(Pending::new(fut))
	}

	/// Returns a pending operation for this loadable's outcome.
	///
	/// If loading, this is the underlying pending operation, otherwise
	/// it's an already settled one.
	#[must_use]
	pub fn to_pending(&self) -> Pending<T, E> {
		self.clone().into_future()
	}

	/// Chains this loadable with another.
	///
	/// If errored, `f` is not called and the error is propagated.
	///
	/// If loaded, `f` is called immediately, and its output becomes the
	/// new loadable.
	///
	/// If loading, the result will be loading until the pending operation settles,
	/// after which `f` is called and its output is awaited.
	pub fn and_then<U, L, F>(self, f: F) -> Loadable<U, E>
	where
		U: Clone + MaybeSync + 'static,
		L: IntoLoadable<U, E>,
		F: FnOnce(T) -> L + MaybeSend + 'static,
	{
		match self {
			Self::Loaded(value) => f(value).into_loadable(),
			Self::Err(err) => Loadable::Err(err),
			Self::Loading(pending) => Loadable::Loading(Pending::new(async move {
				let value = pending.await?;
				tracing::trace!("Pending value resolved, chaining");
				f(value).into_loadable().await
			})),
		}
	}

	/// Maps this loadable's value.
	///
	/// See [`Self::and_then`] for details on when `f` is called.
	pub fn map<U, F>(self, f: F) -> Loadable<U, E>
	where
		U: Clone + MaybeSync + 'static,
		F: FnOnce(T) -> U + MaybeSend + 'static,
	{
		self.and_then(move |value| Loadable::Loaded(f(value)))
	}

	/// Zips two loadables.
	///
	/// See [`crate::all`] for details.
	pub fn zip<U>(self, rhs: Loadable<U, E>) -> Loadable<(T, U), E>
	where
		U: Clone + MaybeSync + 'static,
	{
		crate::all((self, rhs))
	}
}

impl<T, E> Loadable<Loadable<T, E>, E>
where
	T: Clone + MaybeSync + 'static,
	E: Clone + MaybeSync + 'static,
{
	/// Flattens a loadable of a loadable
	pub fn flatten(self) -> Loadable<T, E> {
		self.and_then(|inner| inner)
	}
}

impl<T, E> IntoFuture for Loadable<T, E>
where
	T: Clone + MaybeSync + 'static,
	E: Clone + MaybeSync + 'static,
{
	type IntoFuture = Pending<T, E>;
	type Output = Result<T, E>;

	fn into_future(self) -> Self::IntoFuture {
		match self {
			Self::Loaded(value) => Pending::resolved(value),
			Self::Err(err) => Pending::rejected(err),
			Self::Loading(pending) => pending,
		}
	}
}

impl<T, E> From<Result<T, E>> for Loadable<T, E> {
	fn from(value: Result<T, E>) -> Self {
		match value {
			Ok(value) => Self::Loaded(value),
			Err(err) => Self::Err(err),
		}
	}
}

impl<T, E> From<Pending<T, E>> for Loadable<T, E> {
	fn from(pending: Pending<T, E>) -> Self {
		Self::Loading(pending)
	}
}

/// Collects an iterator of `Loadable<T, E>` into a `Loadable<C, E>`,
/// where `C` is a collection of `T`s.
///
/// See [`crate::all`] for details.
impl<C, T, E> FromIterator<Loadable<T, E>> for Loadable<C, E>
where
	C: FromIterator<T> + Clone + MaybeSync + 'static,
	T: Clone + MaybeSync + 'static,
	E: Clone + MaybeSync + 'static,
{
	fn from_iter<I: IntoIterator<Item = Loadable<T, E>>>(iter: I) -> Self {
		crate::all(iter.into_iter().collect::<Vec<_>>()).map(|values| values.into_iter().collect())
	}
}

/// Types convertible into a [`Loadable`]
pub trait IntoLoadable<T, E> {
	/// Converts this value into a loadable
	fn into_loadable(self) -> Loadable<T, E>;
}

impl<T, E> IntoLoadable<T, E> for Loadable<T, E> {
	fn into_loadable(self) -> Self {
		self
	}
}

impl<T, E> IntoLoadable<T, E> for Result<T, E> {
	fn into_loadable(self) -> Loadable<T, E> {
		Loadable::from(self)
	}
}

impl<T, E> IntoLoadable<T, E> for Pending<T, E> {
	fn into_loadable(self) -> Loadable<T, E> {
		Loadable::Loading(self)
	}
}

/// Extension trait to create a [`Loadable::Loaded`] from a value.
#[extend::ext(name = IntoLoaded)]
pub impl<T> T {
	/// Converts this `T` value into a loaded `Loadable<T, E>`
	fn into_loaded<E>(self) -> Loadable<T, E> {
		Loadable::Loaded(self)
	}
}
