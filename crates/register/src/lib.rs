//! Thread-safe multi-subscriber notification registers.
//!
//! A register is one shared slot holding an immutable handler chain. The
//! lock-free backing mutates the slot through an optimistic compare-and-swap
//! retry loop; the synchronized backing serializes every operation behind a
//! mutex for targets where the chain pointer cannot be swapped atomically.
//! Both present the same contract, and the choice is fixed per register at
//! construction.

/// Public add/remove/invoke surface bound to one register.
pub mod accessor;
/// Lock-free register: optimistic compare-and-swap retry.
pub mod atomic;
/// Register contract and the capability-selected default backing.
pub mod register;
/// Guard over a loaded chain.
pub mod snapshot;
/// Mutex-guarded fallback register.
pub mod sync;

pub use accessor::{Event, RegisterAccessor};
pub use atomic::AtomicRegister;
pub use register::{DefaultRegister, Register};
pub use signal_chain::{Handler, HandlerChain, HandlerIdentity, RemoveLast};
pub use snapshot::Snapshot;
pub use sync::SynchronizedRegister;

#[cfg(test)]
mod tests;
