//! Lock-free register: optimistic compare-and-swap retry over an atomic slot.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwapOption;
use signal_chain::{Handler, HandlerChain, RemoveLast};

use crate::register::Register;
use crate::snapshot::Snapshot;

/// Register whose slot is mutated only through compare-and-swap.
///
/// Writers never block. A failed swap means another thread moved the slot
/// first; the loop re-reads and retries immediately, without backoff and
/// without bound, until its own update lands. A stale snapshot is handled
/// internally and never surfaces to the caller.
pub struct AtomicRegister<A: 'static> {
	slot: ArcSwapOption<HandlerChain<A>>,
	contended: AtomicU64,
}

impl<A: 'static> AtomicRegister<A> {
	/// Empty register. `const`, so type-scoped registers can live in
	/// `static` storage.
	pub const fn new() -> Self {
		Self {
			slot: ArcSwapOption::const_empty(),
			contended: AtomicU64::new(0),
		}
	}

	/// Number of compare-and-swap attempts that lost a race and retried.
	/// Zero in uncontended use.
	pub fn contended_retries(&self) -> u64 {
		self.contended.load(Ordering::Relaxed)
	}

	fn same(a: &Option<Arc<HandlerChain<A>>>, b: &Option<Arc<HandlerChain<A>>>) -> bool {
		match (a, b) {
			(Some(a), Some(b)) => Arc::ptr_eq(a, b),
			(None, None) => true,
			_ => false,
		}
	}
}

impl<A: 'static> Default for AtomicRegister<A> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A: 'static> Register<A> for AtomicRegister<A> {
	fn add(&self, h: Handler<A>) {
		loop {
			let cur = self.slot.load_full();
			let next = Arc::new(HandlerChain::append(cur.as_deref(), h.clone()));
			let prev = self.slot.compare_and_swap(&cur, Some(next));
			if Self::same(&prev, &cur) {
				return;
			}
			self.contended.fetch_add(1, Ordering::Relaxed);
			tracing::trace!("add lost a compare-and-swap race; retrying");
		}
	}

	fn remove(&self, h: &Handler<A>) {
		loop {
			let cur = self.slot.load_full();
			let next = match HandlerChain::remove_last(cur.as_deref(), h) {
				RemoveLast::Unchanged => return,
				RemoveLast::Emptied => None,
				RemoveLast::Now(c) => Some(Arc::new(c)),
			};
			let prev = self.slot.compare_and_swap(&cur, next);
			if Self::same(&prev, &cur) {
				return;
			}
			self.contended.fetch_add(1, Ordering::Relaxed);
			tracing::trace!("remove lost a compare-and-swap race; retrying");
		}
	}

	fn invoke(&self, args: &A) {
		// One load. Handlers added or removed after this point do not
		// affect this firing.
		self.snapshot().invoke(args);
	}

	fn snapshot(&self) -> Snapshot<A> {
		Snapshot::new(self.slot.load_full())
	}
}
