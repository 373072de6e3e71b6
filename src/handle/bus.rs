#![allow(unsafe_code)]

use crate::storage::NodeStorage;

/// Port for the bus-peripheral context.
///
/// Feeds inbound protocol bytes and serves the peripheral's out-of-band read
/// reply path. The byte-pair protocol itself carries no read opcode.
pub struct BusPort<'a, const N: usize> {
    storage: &'a NodeStorage<N>,
}

impl<'a, const N: usize> BusPort<'a, N> {
    pub(crate) fn new(storage: &'a NodeStorage<N>) -> Self {
        Self { storage }
    }

    /// Consumes one inbound byte inside a critical section.
    pub fn on_byte_received(&self, byte: u8) {
        critical_section::with(|_| unsafe { self.on_byte_received_unchecked(byte) });
    }

    /// Consumes one inbound byte without a critical section.
    ///
    /// # Safety
    /// Requires exclusive access to the node's storage: no other port
    /// operation may run at the same time. If bus and loop share one
    /// non-preemptible context, as in the reference deployment (pure
    /// polling, no interrupts), it is safe to call this function.
    pub unsafe fn on_byte_received_unchecked(&self, byte: u8) {
        let bank = unsafe { &mut *self.storage.bank.get() };
        let protocol = unsafe { &mut *self.storage.protocol.get() };
        protocol.on_byte_received(bank, byte);
    }

    /// Reads a register for the peripheral's reply path, inside a critical
    /// section. Out-of-range addresses yield 0.
    pub fn register(&self, address: u8) -> u8 {
        critical_section::with(|_| unsafe { self.register_unchecked(address) })
    }

    /// Reads a register for the peripheral's reply path without a critical
    /// section.
    ///
    /// # Safety
    /// Requires exclusive access to the node's storage: no other port
    /// operation may run at the same time.
    pub unsafe fn register_unchecked(&self, address: u8) -> u8 {
        let bank = unsafe { &*self.storage.bank.get() };
        bank.read(address)
    }

    /// Drops any latched protocol address, inside a critical section.
    ///
    /// For transports that report a start-of-transaction condition.
    pub fn resync(&self) {
        critical_section::with(|_| {
            let protocol = unsafe { &mut *self.storage.protocol.get() };
            protocol.reset_to_address_state();
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::map::node_storage;

    #[test]
    fn inbound_pairs_become_register_writes() {
        let node = node_storage();
        let bus = node.bus_port();

        for byte in [1, 0x55, 0, 0xAA, 3, 0x07] {
            bus.on_byte_received(byte);
        }

        assert_eq!(bus.register(1), 0x55);
        assert_eq!(bus.register(0), 0xAA);
        assert_eq!(bus.register(3), 0x07);
        assert_eq!(
            node.host_port().with_bank(|b| b.get_and_ack_change()),
            Some(0x07)
        );
    }

    #[test]
    fn reply_path_reads_are_total() {
        let node = node_storage();
        assert_eq!(node.bus_port().register(200), 0);
    }

    #[test]
    fn unchecked_byte_feed_matches_checked() {
        let node = node_storage();
        let bus = node.bus_port();

        // SAFETY: single-threaded test; no other port operation is in
        // flight between these calls.
        unsafe {
            bus.on_byte_received_unchecked(3);
            bus.on_byte_received_unchecked(0x42);
            assert_eq!(bus.register_unchecked(3), 0x42);
        }
        assert_eq!(bus.register(3), 0x42);
    }

    #[test]
    fn resync_drops_latched_address_only() {
        let node = node_storage();
        let bus = node.bus_port();

        bus.on_byte_received(3);
        bus.on_byte_received(0x42);
        bus.on_byte_received(1);
        bus.resync();

        // Register contents and the pending change survive a resync
        assert_eq!(bus.register(3), 0x42);
        bus.on_byte_received(2);
        bus.on_byte_received(0x11);
        assert_eq!(bus.register(2), 0x11);
        assert_eq!(bus.register(1), 0);
        assert_eq!(
            node.host_port().with_bank(|b| b.get_and_ack_change()),
            Some(0x42)
        );
    }
}
