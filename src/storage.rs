#![allow(unsafe_code)]

//! Shared-state container handing out context-scoped ports.

use core::cell::UnsafeCell;

use crate::{
    bank::RegisterBank,
    handle::{BusPort, HostPort},
    protocol::ByteProtocol,
};

/// Owns the register bank and the protocol cursor for one node.
///
/// The bank and cursor are shared between two contexts: the bus peripheral
/// (often an ISR) feeding inbound bytes, and the main loop refreshing
/// samples and acknowledging changes. Each context accesses the state
/// through its own port ([`bus_port`](Self::bus_port) /
/// [`host_port`](Self::host_port)); the ports serialize every operation with
/// a critical section so at most one mutator is in flight at a time.
pub struct NodeStorage<const N: usize> {
    pub(crate) bank: UnsafeCell<RegisterBank<N>>,
    pub(crate) protocol: UnsafeCell<ByteProtocol>,
}

impl<const N: usize> NodeStorage<N> {
    /// Creates storage with a zeroed bank and the cursor awaiting an address.
    ///
    /// # Panics
    /// Panics if `notify_address` is not a valid register address.
    pub fn new(notify_address: u8) -> Self {
        Self {
            bank: UnsafeCell::new(RegisterBank::new(notify_address)),
            protocol: UnsafeCell::new(ByteProtocol::new()),
        }
    }

    /// Port for the bus-peripheral context.
    pub fn bus_port(&self) -> BusPort<'_, N> {
        BusPort::new(self)
    }

    /// Port for the main-loop context.
    pub fn host_port(&self) -> HostPort<'_, N> {
        HostPort::new(self)
    }

    /// Reinitializes the bank and drops any latched protocol address, in one
    /// critical section.
    ///
    /// The external recovery action for a desynchronized master: registers
    /// go back to 0, the pending change (if any) is cleared, and the next
    /// inbound byte is interpreted as an address.
    pub fn reset(&self) {
        critical_section::with(|_| {
            let bank = unsafe { &mut *self.bank.get() };
            let protocol = unsafe { &mut *self.protocol.get() };
            bank.init();
            protocol.reset_to_address_state();
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::map::node_storage;

    #[test]
    fn reset_clears_registers_flag_and_latched_address() {
        let node = node_storage();

        // Leave the node mid-pair with a pending change
        node.bus_port().on_byte_received(3);
        node.bus_port().on_byte_received(0x42);
        node.bus_port().on_byte_received(1);

        node.reset();

        assert_eq!(node.bus_port().register(3), 0);
        assert_eq!(node.host_port().with_bank(|b| b.get_and_ack_change()), None);

        // Next byte is an address again, not data for the dropped latch
        node.bus_port().on_byte_received(2);
        node.bus_port().on_byte_received(0x5A);
        assert_eq!(node.bus_port().register(2), 0x5A);
        assert_eq!(node.bus_port().register(1), 0);
    }

    #[test]
    fn ports_share_one_bank() {
        let node = node_storage();

        node.host_port().with_bank(|bank| bank.set_digital_snapshot(0xC3));
        assert_eq!(node.bus_port().register(0), 0xC3);
    }
}
