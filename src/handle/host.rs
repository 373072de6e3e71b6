#![allow(unsafe_code)]

use crate::{bank::RegisterBank, storage::NodeStorage};

/// Port for the main-loop context.
///
/// Gives the sampler and the change consumer closure access to the bank;
/// one critical section covers the whole closure, so a sample refresh and an
/// acknowledgment can be grouped atomically.
pub struct HostPort<'a, const N: usize> {
    storage: &'a NodeStorage<N>,
}

impl<'a, const N: usize> HostPort<'a, N> {
    pub(crate) fn new(storage: &'a NodeStorage<N>) -> Self {
        Self { storage }
    }

    /// Runs `f` with exclusive access to the bank, inside a critical section.
    pub fn with_bank<R>(&self, f: impl FnOnce(&mut RegisterBank<N>) -> R) -> R {
        critical_section::with(|_| unsafe { self.with_bank_unchecked(f) })
    }

    /// Runs `f` with access to the bank without a critical section.
    ///
    /// # Safety
    /// Requires exclusive access to the node's storage: no other port
    /// operation may run at the same time, and `f` must not reenter a port.
    /// If bus and loop share one non-preemptible context, as in the
    /// reference deployment (pure polling, no interrupts), it is safe to
    /// call this function.
    pub unsafe fn with_bank_unchecked<R>(&self, f: impl FnOnce(&mut RegisterBank<N>) -> R) -> R {
        let bank = unsafe { &mut *self.storage.bank.get() };
        f(bank)
    }
}
