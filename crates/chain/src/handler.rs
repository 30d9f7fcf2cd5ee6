//! Handler values: an entrypoint plus an optional bound receiver.

use std::any::type_name;
use std::fmt;
use std::ptr;
use std::sync::Arc;

/// Erased identity of a handler: the receiver allocation and the entrypoint.
///
/// Two handlers are the same subscription iff both keys match. This is
/// structural identity over the (receiver, entrypoint) pair, never identity
/// of a chain node or of the `Handler` wrapper itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerIdentity {
	target: *const (),
	entry: *const (),
}

trait Callable<A>: Send + Sync {
	fn call(&self, args: &A);
	fn identity(&self) -> HandlerIdentity;
	fn kind(&self) -> &'static str;
}

struct FreeFn<A: 'static>(fn(&A));

impl<A: 'static> Callable<A> for FreeFn<A> {
	fn call(&self, args: &A) {
		(self.0)(args)
	}

	fn identity(&self) -> HandlerIdentity {
		HandlerIdentity {
			target: ptr::null(),
			entry: self.0 as *const (),
		}
	}

	fn kind(&self) -> &'static str {
		"function"
	}
}

struct BoundFn<T: Send + Sync + 'static, A: 'static> {
	target: Arc<T>,
	method: fn(&T, &A),
}

impl<T: Send + Sync + 'static, A: 'static> Callable<A> for BoundFn<T, A> {
	fn call(&self, args: &A) {
		(self.method)(&*self.target, args)
	}

	fn identity(&self) -> HandlerIdentity {
		HandlerIdentity {
			target: Arc::as_ptr(&self.target).cast(),
			entry: self.method as *const (),
		}
	}

	fn kind(&self) -> &'static str {
		type_name::<T>()
	}
}

struct ClosureFn<F>(F);

impl<A: 'static, F: Fn(&A) + Send + Sync + 'static> Callable<A> for ClosureFn<F> {
	fn call(&self, args: &A) {
		(self.0)(args)
	}

	fn identity(&self) -> HandlerIdentity {
		// The allocation is the identity: only clones of the same handler
		// compare equal, never a syntactically identical closure.
		HandlerIdentity {
			target: ptr::null(),
			entry: (&raw const self.0).cast(),
		}
	}

	fn kind(&self) -> &'static str {
		"closure"
	}
}

/// An opaque callable registered for notification, fired with `&A`.
///
/// Cheap to clone (one `Arc`). Equality follows [`HandlerIdentity`]: free
/// functions compare by entrypoint, bound methods by (receiver, method), and
/// closures by allocation.
pub struct Handler<A: 'static> {
	callable: Arc<dyn Callable<A>>,
}

impl<A: 'static> Handler<A> {
	/// Handler for a free function.
	pub fn function(f: fn(&A)) -> Self {
		Self {
			callable: Arc::new(FreeFn(f)),
		}
	}

	/// Handler for a method with a bound receiver.
	///
	/// Handlers built independently from the same `Arc` and the same method
	/// compare equal, so a caller can unsubscribe without keeping the
	/// original `Handler` value around.
	pub fn bound<T: Send + Sync + 'static>(target: Arc<T>, method: fn(&T, &A)) -> Self {
		Self {
			callable: Arc::new(BoundFn { target, method }),
		}
	}

	/// Handler for a captured closure.
	pub fn closure<F>(f: F) -> Self
	where
		F: Fn(&A) + Send + Sync + 'static,
	{
		Self {
			callable: Arc::new(ClosureFn(f)),
		}
	}

	/// Fires the handler with `args` on the calling thread.
	pub fn call(&self, args: &A) {
		self.callable.call(args)
	}

	/// Structural identity used by last-match removal.
	#[inline]
	pub fn identity(&self) -> HandlerIdentity {
		self.callable.identity()
	}
}

impl<A: 'static> Clone for Handler<A> {
	fn clone(&self) -> Self {
		Self {
			callable: self.callable.clone(),
		}
	}
}

impl<A: 'static> PartialEq for Handler<A> {
	fn eq(&self, other: &Self) -> bool {
		self.identity() == other.identity()
	}
}

impl<A: 'static> Eq for Handler<A> {}

impl<A: 'static> fmt::Debug for Handler<A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let id = self.identity();
		f.debug_struct("Handler")
			.field("kind", &self.callable.kind())
			.field("target", &id.target)
			.field("entry", &id.entry)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn on_ping(_: &u32) {}

	fn on_pong(_: &u32) {}

	struct Probe;

	impl Probe {
		fn first(&self, _: &u32) {}

		fn second(&self, _: &u32) {}
	}

	#[test]
	fn free_functions_compare_by_entrypoint() {
		let a = Handler::function(on_ping);
		let b = Handler::function(on_ping);
		let c = Handler::function(on_pong);
		assert_eq!(a, b);
		assert_ne!(a, c);
	}

	#[test]
	fn bound_methods_compare_by_receiver_and_method() {
		let probe = Arc::new(Probe);
		let other = Arc::new(Probe);

		let a = Handler::bound(probe.clone(), Probe::first);
		let same = Handler::bound(probe.clone(), Probe::first);
		let different_method = Handler::bound(probe.clone(), Probe::second);
		let different_receiver = Handler::bound(other, Probe::first);

		assert_eq!(a, same);
		assert_ne!(a, different_method);
		assert_ne!(a, different_receiver);
	}

	#[test]
	fn closures_compare_by_allocation() {
		let a = Handler::closure(|_: &u32| {});
		let b = Handler::closure(|_: &u32| {});
		assert_eq!(a, a.clone());
		assert_ne!(a, b);
	}

	#[test]
	fn forms_never_cross_compare() {
		let probe = Arc::new(Probe);
		let free = Handler::function(on_ping);
		let bound = Handler::bound(probe, Probe::first);
		let closed = Handler::closure(|_: &u32| {});
		assert_ne!(free, bound);
		assert_ne!(free, closed);
		assert_ne!(bound, closed);
	}

	#[test]
	fn call_reaches_the_bound_receiver() {
		use parking_lot::Mutex;

		struct Counter(Mutex<u32>);

		impl Counter {
			fn bump(&self, by: &u32) {
				*self.0.lock() += by;
			}
		}

		let counter = Arc::new(Counter(Mutex::new(0)));
		let h = Handler::bound(counter.clone(), Counter::bump);
		h.call(&3);
		h.call(&4);
		assert_eq!(*counter.0.lock(), 7);
	}
}
