//! Tri-state asynchronous values.
//!
//! A [`Loadable`] is either loaded, errored, or still loading, where loading
//! loadables hold a [`Pending`] operation that will eventually settle into
//! one of the other two states.
//!
//! Loadables may be transformed with [`Loadable::map`] and [`Loadable::and_then`],
//! and combined with [`all`].

// Modules
pub mod all;
pub mod error;
pub mod loadable;
pub mod pending;

// Exports
pub use self::{
	all::{all, LoadAll},
	error::{GetValueError, StateError},
	loadable::{IntoLoadable, IntoLoaded, LoadState, Loadable},
	pending::Pending,
};
