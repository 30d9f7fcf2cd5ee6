//! The add/remove/invoke surface a declared event exposes to callers.

use std::marker::PhantomData;

use signal_chain::Handler;

use crate::register::{DefaultRegister, Register};
use crate::snapshot::Snapshot;

/// Accessor bound to exactly one register for its whole lifetime.
///
/// This is the only surface callers touch. `add` and `remove` carry the
/// `+=` / `-=` semantics of a declared event: each call lands atomically
/// from the caller's point of view, with no partial state ever observable.
/// None of the operations error; removing a handler that was never added is
/// a silent no-op.
pub struct RegisterAccessor<A: 'static, R: Register<A> = DefaultRegister<A>> {
	register: R,
	_args: PhantomData<fn(&A)>,
}

/// An event over the capability-selected default backing.
pub type Event<A> = RegisterAccessor<A>;

impl<A: 'static, R: Register<A>> RegisterAccessor<A, R> {
	/// Binds an accessor to `register`. `const`, so a type-scoped event can
	/// live in `static` storage:
	///
	/// ```
	/// use signal_register::{AtomicRegister, RegisterAccessor};
	///
	/// static READY: RegisterAccessor<u32, AtomicRegister<u32>> =
	/// 	RegisterAccessor::from_register(AtomicRegister::new());
	/// ```
	pub const fn from_register(register: R) -> Self {
		Self {
			register,
			_args: PhantomData,
		}
	}

	/// Fresh accessor over an empty register.
	pub fn new() -> Self
	where
		R: Default,
	{
		Self::from_register(R::default())
	}

	/// Subscribes `h` after everything currently subscribed.
	pub fn add(&self, h: Handler<A>) {
		self.register.add(h);
	}

	/// Unsubscribes the rightmost occurrence of `h`, if any.
	pub fn remove(&self, h: &Handler<A>) {
		self.register.remove(h);
	}

	/// Fires the current chain in subscription order on this thread.
	pub fn invoke(&self, args: &A) {
		self.register.invoke(args);
	}

	/// The chain as observed at one instant.
	pub fn snapshot(&self) -> Snapshot<A> {
		self.register.snapshot()
	}

	pub fn len(&self) -> usize {
		self.register.len()
	}

	pub fn is_empty(&self) -> bool {
		self.register.is_empty()
	}

	/// The bound register. The binding is fixed for the accessor's
	/// lifetime; there is no dynamic switching between backings.
	pub fn register(&self) -> &R {
		&self.register
	}
}

impl<A: 'static, R: Register<A> + Default> Default for RegisterAccessor<A, R> {
	fn default() -> Self {
		Self::new()
	}
}
