//! Immutable handler-chain values: the ordered, persistent list of callables
//! behind a notification register.
//!
//! A chain is never mutated in place. `append` and `remove_last` build fresh
//! values, so a chain reference read at one instant stays valid forever and a
//! register can swap whole chains with a single pointer compare-and-swap.

/// Chain construction: append, last-match removal, ordered invocation.
pub mod chain;
/// Opaque callables with structural identity.
pub mod handler;

pub use chain::{HandlerChain, RemoveLast};
pub use handler::{Handler, HandlerIdentity};
