//! Byte-pair write protocol state machine.

use crate::bank::RegisterBank;

/// Position of the protocol cursor within a byte pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// The next inbound byte is a register address.
    AwaitingAddress,
    /// An address byte is latched; the next inbound byte is its data.
    AwaitingData {
        /// The latched register address.
        address: u8,
    },
}

/// Turns a stream of individually received bytes into register writes.
///
/// Two consecutive bytes form one logical write: the first is latched as the
/// register address, the second is stored through
/// [`RegisterBank::write`]. The cursor returns to [`Cursor::AwaitingAddress`]
/// after every data byte, whether or not the latched address was valid.
///
/// The protocol is write-only from the master's point of view; register
/// reads are served out-of-band by the bus peripheral's reply path (see
/// [`BusPort::register`](crate::handle::BusPort::register)).
///
/// There is no framing and no abort: a master that drops or inserts a byte
/// shifts every subsequent address/data interpretation by one position until
/// the node is reinitialized. Transports that do provide a
/// start-of-transaction signal can surface it via
/// [`reset_to_address_state`](Self::reset_to_address_state).
pub struct ByteProtocol {
    cursor: Cursor,
}

impl ByteProtocol {
    /// Creates a protocol cursor awaiting an address byte.
    pub const fn new() -> Self {
        Self {
            cursor: Cursor::AwaitingAddress,
        }
    }

    /// Consumes one inbound byte, mutating the borrowed bank on every
    /// completed pair.
    ///
    /// The latched address is set exactly once per address byte and consumed
    /// exactly once by the following data byte.
    pub fn on_byte_received<const N: usize>(&mut self, bank: &mut RegisterBank<N>, byte: u8) {
        match self.cursor {
            Cursor::AwaitingAddress => {
                self.cursor = Cursor::AwaitingData { address: byte };
            }
            Cursor::AwaitingData { address } => {
                bank.write(address, byte);
                self.cursor = Cursor::AwaitingAddress;
            }
        }
    }

    /// Drops any latched address and awaits a fresh address byte.
    ///
    /// For transports that expose a start-of-transaction signal. Without one,
    /// the only recovery from a desynchronized master is
    /// [`NodeStorage::reset`](crate::storage::NodeStorage::reset).
    pub fn reset_to_address_state(&mut self) {
        self.cursor = Cursor::AwaitingAddress;
    }

    /// Returns true while an address byte is latched.
    #[inline]
    pub fn awaiting_data(&self) -> bool {
        matches!(self.cursor, Cursor::AwaitingData { .. })
    }

    /// Current cursor position.
    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl Default for ByteProtocol {
    fn default() -> Self {
        Self::new()
    }
}
