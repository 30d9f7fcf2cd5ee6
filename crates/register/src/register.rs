//! Register contract shared by the atomic and synchronized backings.

use signal_chain::Handler;

use crate::snapshot::Snapshot;

/// A shared slot of subscribed handlers.
///
/// `add` and `remove` are linearizable: each takes effect at exactly one
/// instant (the successful compare-and-swap, or the lock release), and a
/// call's effect is applied exactly once no matter how the backing retries
/// or blocks. `invoke` fires some chain that existed at one point during
/// the call; it does not promise to see a mutation racing with it.
pub trait Register<A: 'static>: Send + Sync {
	/// Appends `h` after everything currently subscribed.
	fn add(&self, h: Handler<A>);

	/// Removes the rightmost occurrence of `h`. Silently a no-op when `h`
	/// was never added.
	fn remove(&self, h: &Handler<A>);

	/// Fires the current chain, in subscription order, on the calling
	/// thread.
	fn invoke(&self, args: &A);

	/// The chain as observed at one instant.
	fn snapshot(&self) -> Snapshot<A>;

	fn len(&self) -> usize {
		self.snapshot().len()
	}

	fn is_empty(&self) -> bool {
		self.snapshot().is_empty()
	}
}

/// Backing used when no explicit choice is made.
///
/// Resolved once at compile time from the target's atomics: the selection is
/// a capability check, not a branch taken on every call.
#[cfg(target_has_atomic = "ptr")]
pub type DefaultRegister<A> = crate::atomic::AtomicRegister<A>;

/// Backing used when no explicit choice is made.
///
/// This target cannot swap the chain pointer atomically, so the mutex
/// fallback stands in.
#[cfg(not(target_has_atomic = "ptr"))]
pub type DefaultRegister<A> = crate::sync::SynchronizedRegister<A>;
