//! Loading multiple loadables at once.
//!
//! [`all`] combines a collection of loadables into a single loadable of
//! the same shape:
//!
//! - If any loadable is errored, the first error (in iteration order) is
//!   returned immediately, without waiting on any loading entries.
//! - Otherwise, if all loadables are loaded, the result is loaded.
//! - Otherwise, the result is loading. All entries are awaited concurrently,
//!   and it resolves with all values once they all resolve. If any entry
//!   rejects, it rejects with the first error by position, regardless of the
//!   order the entries settled in. It does so as soon as every entry before
//!   the rejected one has resolved, without waiting on the entries after it.
//!
//! Loading entries are never cancelled, even when the result short-circuits.

// Imports
use {
	crate::{Loadable, Pending},
	core::{
		future::{Future, IntoFuture},
		hash::{BuildHasher, Hash},
		pin::pin,
	},
	futures::{
		future::{self, Either},
		stream::{FuturesOrdered, TryStreamExt},
	},
	loadable_sync::MaybeSync,
	std::collections::{BTreeMap, HashMap},
};

/// Collections of loadables that may be loaded all at once
pub trait LoadAll {
	/// Collection of values
	type Value;

	/// Error
	type Error;

	/// Loads all loadables in this collection.
	///
	/// See the module documentation for details.
	fn load_all(self) -> Loadable<Self::Value, Self::Error>;
}

/// Loads all loadables in a collection.
///
/// See the module documentation for details.
pub fn all<C: LoadAll>(collection: C) -> Loadable<C::Value, C::Error> {
	collection.load_all()
}

impl<T, E> LoadAll for Vec<Loadable<T, E>>
where
	T: Clone + MaybeSync + 'static,
	E: Clone + MaybeSync + 'static,
{
	type Error = E;
	type Value = Vec<T>;

	fn load_all(self) -> Loadable<Self::Value, Self::Error> {
		// If any errors exist, return the first one
		let mut entries = Vec::with_capacity(self.len());
		let mut all_loaded = true;
		for (idx, loadable) in self.into_iter().enumerate() {
			let loadable = match loadable {
				Loadable::Err(err) => {
					tracing::trace!(idx, "Found errored entry, short-circuiting");
					return Loadable::Err(err);
				},
				loadable => loadable,
			};

			all_loaded &= loadable.is_loaded();
			entries.push(loadable);
		}

		// If everything is loaded, we don't need to wait on anything
		if all_loaded {
			return Loadable::Loaded(entries.into_iter().filter_map(Loadable::into_value).collect());
		}

		// Otherwise wait on all of them
		// Note: `FuturesOrdered` yields results by position, not by the order they settle in,
		//       so the first error yielded is the first error by position.
		let entries = entries
			.into_iter()
			.map(IntoFuture::into_future)
			.collect::<FuturesOrdered<_>>();
		Loadable::Loading(Pending::new(async move {
			let values = entries.try_collect::<Vec<_>>().await?;
			tracing::trace!(len = values.len(), "All entries resolved");
			Ok(values)
		}))
	}
}

impl<K, T, E, S> LoadAll for HashMap<K, Loadable<T, E>, S>
where
	K: Eq + Hash + Clone + MaybeSync + 'static,
	T: Clone + MaybeSync + 'static,
	E: Clone + MaybeSync + 'static,
	S: BuildHasher + Default + Clone + MaybeSync + 'static,
{
	type Error = E;
	type Value = HashMap<K, T, S>;

	fn load_all(self) -> Loadable<Self::Value, Self::Error> {
		let (keys, loadables) = self.into_iter().unzip::<_, _, Vec<_>, Vec<_>>();
		loadables
			.load_all()
			.map(move |values| keys.into_iter().zip(values).collect())
	}
}

impl<K, T, E> LoadAll for BTreeMap<K, Loadable<T, E>>
where
	K: Ord + Clone + MaybeSync + 'static,
	T: Clone + MaybeSync + 'static,
	E: Clone + MaybeSync + 'static,
{
	type Error = E;
	type Value = BTreeMap<K, T>;

	fn load_all(self) -> Loadable<Self::Value, Self::Error> {
		let (keys, loadables) = self.into_iter().unzip::<_, _, Vec<_>, Vec<_>>();
		loadables
			.load_all()
			.map(move |values| keys.into_iter().zip(values).collect())
	}
}

/// Awaits two fallible futures concurrently.
///
/// If both fail, the error of `lhs` is returned, even if `rhs` failed first.
/// If `lhs` fails, `rhs` is not waited on.
async fn try_join_ordered<Lhs, Rhs, A, B, E>(lhs: Lhs, rhs: Rhs) -> Result<(A, B), E>
where
	Lhs: Future<Output = Result<A, E>>,
	Rhs: Future<Output = Result<B, E>>,
{
	let lhs = pin!(lhs);
	let rhs = pin!(rhs);
	match future::select(lhs, rhs).await {
		Either::Left((lhs, rhs)) => Ok((lhs?, rhs.await?)),
		Either::Right((rhs, lhs)) => {
			let lhs = lhs.await?;
			Ok((lhs, rhs?))
		},
	}
}

/// Joins fallible futures by position, into nested pairs.
///
/// `try_join_nested!(a, b, c)` resolves to `(a, (b, c))`.
macro_rules! try_join_nested {
	($value:ident) => {
		$value
	};

	($value:ident, $($rest:ident),+) => {
		try_join_ordered($value, try_join_nested!($($rest),+))
	};
}

/// Pattern for the nested pairs of `try_join_nested!`
macro_rules! nested {
	($value:ident) => {
		$value
	};

	($value:ident, $($rest:ident),+) => {
		($value, nested!($($rest),+))
	};
}

/// Implements [`LoadAll`] for a tuple of loadables
macro_rules! impl_load_all_tuple {
	($($T:ident: $value:ident),+ $(,)?) => {
		impl<$($T,)+ E> LoadAll for ($(Loadable<$T, E>,)+)
		where
			$($T: Clone + MaybeSync + 'static,)+
			E: Clone + MaybeSync + 'static,
		{
			type Error = E;
			type Value = ($($T,)+);

			fn load_all(self) -> Loadable<Self::Value, Self::Error> {
				let ($($value,)+) = self;

				// If any errors exist, return the first one
				$(
					let $value = match $value {
						Loadable::Err(err) => {
							tracing::trace!(entry = stringify!($value), "Found errored entry, short-circuiting");
							return Loadable::Err(err);
						},
						$value => $value,
					};
				)+

				// If everything is loaded, we don't need to wait on anything
				let ($($value,)+) = match ($($value,)+) {
					($(Loadable::Loaded($value),)+) => return Loadable::Loaded(($($value,)+)),
					($($value,)+) => ($($value.into_future(),)+),
				};

				// Otherwise wait on all of them
				Loadable::Loading(Pending::new(async move {
					let nested!($($value),+) = try_join_nested!($($value),+).await?;
					tracing::trace!("All entries resolved");
					Ok::<_, E>(($($value,)+))
				}))
			}
		}
	};
}

impl_load_all_tuple! { A: a }
impl_load_all_tuple! { A: a, B: b }
impl_load_all_tuple! { A: a, B: b, C: c }
impl_load_all_tuple! { A: a, B: b, C: c, D: d }
impl_load_all_tuple! { A: a, B: b, C: c, D: d, F: f }
impl_load_all_tuple! { A: a, B: b, C: c, D: d, F: f, G: g }
impl_load_all_tuple! { A: a, B: b, C: c, D: d, F: f, G: g, H: h }
impl_load_all_tuple! { A: a, B: b, C: c, D: d, F: f, G: g, H: h, I: i }
