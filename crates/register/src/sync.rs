//! Mutex-guarded fallback register.

use std::sync::Arc;

use parking_lot::Mutex;
use signal_chain::{Handler, HandlerChain, RemoveLast};

use crate::register::Register;
use crate::snapshot::Snapshot;

/// Register whose slot is a plain field behind a mutex.
///
/// Used where the chain pointer has no usable atomic compare-and-swap.
/// `add`, `remove`, and `invoke` all serialize on the same lock, so no two
/// operations run concurrently for one register; contention blocks instead
/// of retrying. The lock is not reentrant: a handler must not add to or
/// remove from the register that is firing it.
pub struct SynchronizedRegister<A: 'static> {
	slot: Mutex<Option<Arc<HandlerChain<A>>>>,
}

impl<A: 'static> SynchronizedRegister<A> {
	/// Empty register. `const`, so type-scoped registers can live in
	/// `static` storage.
	pub const fn new() -> Self {
		Self {
			slot: Mutex::new(None),
		}
	}
}

impl<A: 'static> Default for SynchronizedRegister<A> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A: 'static> Register<A> for SynchronizedRegister<A> {
	fn add(&self, h: Handler<A>) {
		let mut slot = self.slot.lock();
		let next = HandlerChain::append(slot.as_deref(), h);
		*slot = Some(Arc::new(next));
	}

	fn remove(&self, h: &Handler<A>) {
		let mut slot = self.slot.lock();
		match HandlerChain::remove_last(slot.as_deref(), h) {
			RemoveLast::Unchanged => {}
			RemoveLast::Emptied => *slot = None,
			RemoveLast::Now(c) => *slot = Some(Arc::new(c)),
		}
	}

	fn invoke(&self, args: &A) {
		// Held across the firing: invoke serializes against add and remove.
		let slot = self.slot.lock();
		Snapshot::new(slot.clone()).invoke(args);
	}

	fn snapshot(&self) -> Snapshot<A> {
		Snapshot::new(self.slot.lock().clone())
	}
}
