//! Append, last-match removal, and ordered invocation over immutable chains.

use std::fmt;

use smallvec::SmallVec;

use crate::handler::Handler;

/// Outcome of [`HandlerChain::remove_last`].
pub enum RemoveLast<A: 'static> {
	/// No element matched; the chain is observably unchanged.
	Unchanged,
	/// The only matching element was also the only element; the chain is now
	/// the absent value.
	Emptied,
	/// The rightmost match was excised; everything else keeps its order.
	Now(HandlerChain<A>),
}

/// An immutable, ordered sequence of handlers.
///
/// Every structural operation builds a fresh value. A published chain never
/// changes, so comparing an old chain pointer against the current one is
/// enough to detect any intervening mutation. The empty state is represented
/// as `None` at the call sites, never as an empty-but-present chain.
pub struct HandlerChain<A: 'static> {
	elements: SmallVec<[Handler<A>; 2]>,
}

impl<A: 'static> HandlerChain<A> {
	/// New chain with `h` placed after every element of `chain`.
	///
	/// `None` plus `h` is the single-element chain `[h]`.
	pub fn append(chain: Option<&Self>, h: Handler<A>) -> Self {
		let mut elements = match chain {
			Some(c) => c.elements.clone(),
			None => SmallVec::new(),
		};
		elements.push(h);
		Self { elements }
	}

	/// Removes the rightmost element equal to `h`, scanning tail to head.
	pub fn remove_last(chain: Option<&Self>, h: &Handler<A>) -> RemoveLast<A> {
		let Some(c) = chain else {
			return RemoveLast::Unchanged;
		};
		let Some(idx) = c.elements.iter().rposition(|e| e == h) else {
			return RemoveLast::Unchanged;
		};
		if c.elements.len() == 1 {
			return RemoveLast::Emptied;
		}
		let mut elements = c.elements.clone();
		elements.remove(idx);
		RemoveLast::Now(Self { elements })
	}

	/// Fires each element in insertion order on the calling thread.
	///
	/// A panicking handler propagates to the caller and aborts the rest of
	/// the chain. `None` is a no-op.
	pub fn invoke(chain: Option<&Self>, args: &A) {
		if let Some(c) = chain {
			for h in &c.elements {
				h.call(args);
			}
		}
	}

	/// The elements in firing order.
	#[inline]
	pub fn handlers(&self) -> &[Handler<A>] {
		&self.elements
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}
}

impl<A: 'static> Clone for HandlerChain<A> {
	fn clone(&self) -> Self {
		Self {
			elements: self.elements.clone(),
		}
	}
}

impl<A: 'static> fmt::Debug for HandlerChain<A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.elements.iter()).finish()
	}
}
