//! Guard over a loaded chain.

use std::sync::Arc;

use signal_chain::{Handler, HandlerChain};

/// The chain as observed at one instant.
///
/// Holding a snapshot keeps that chain alive; register mutations that land
/// after the snapshot was taken never affect it. This is what `invoke`
/// fires: a stable list, read once.
pub struct Snapshot<A: 'static> {
	chain: Option<Arc<HandlerChain<A>>>,
}

impl<A: 'static> Snapshot<A> {
	pub(crate) fn new(chain: Option<Arc<HandlerChain<A>>>) -> Self {
		Self { chain }
	}

	/// The absent snapshot (nothing subscribed).
	pub fn empty() -> Self {
		Self { chain: None }
	}

	/// The handlers in firing order.
	pub fn handlers(&self) -> &[Handler<A>] {
		self.chain.as_ref().map_or(&[], |c| c.handlers())
	}

	pub fn len(&self) -> usize {
		self.chain.as_ref().map_or(0, |c| c.len())
	}

	pub fn is_empty(&self) -> bool {
		self.chain.is_none()
	}

	/// Fires the snapshot in insertion order on the calling thread. A
	/// panicking handler propagates and aborts the remainder.
	pub fn invoke(&self, args: &A) {
		if let Some(chain) = self.chain.as_deref() {
			tracing::trace!(handlers = chain.len(), "firing chain snapshot");
			HandlerChain::invoke(Some(chain), args);
		}
	}
}

impl<A: 'static> Clone for Snapshot<A> {
	fn clone(&self) -> Self {
		Self {
			chain: self.chain.clone(),
		}
	}
}
