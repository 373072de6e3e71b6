//! Register map of the reference control node.
//!
//! Four registers: a digital-input snapshot, two analog channel readings
//! (all passive, refreshed by the sampler), and one output-configuration
//! register whose writes raise the change notification.

use crate::{bank::RegisterBank, storage::NodeStorage};

/// Snapshot of the eight digital input pins (passive).
pub const REG_DIGITAL_SNAPSHOT: u8 = 0;
/// Analog channel 0 reading (passive).
pub const REG_ANALOG_CH0: u8 = 1;
/// Analog channel 1 reading (passive).
pub const REG_ANALOG_CH1: u8 = 2;
/// Output configuration; writes raise the change notification (active).
pub const REG_OUTPUT_CONFIG: u8 = 3;
/// Number of registers in the reference map.
pub const NODE_REGISTER_COUNT: usize = 4;

/// Register bank sized for the reference map.
pub type NodeBank = RegisterBank<NODE_REGISTER_COUNT>;
/// Shared storage sized for the reference map.
pub type NodeStorage4 = NodeStorage<NODE_REGISTER_COUNT>;

/// Creates a bank wired to the reference map (register 3 notifies).
pub fn node_bank() -> NodeBank {
    RegisterBank::new(REG_OUTPUT_CONFIG)
}

/// Creates shared storage wired to the reference map (register 3 notifies).
pub fn node_storage() -> NodeStorage4 {
    NodeStorage::new(REG_OUTPUT_CONFIG)
}

/// Generates a named getter/setter pair routed through the generic
/// `read`/`write` path, so whether a write notifies depends only on the
/// register's address.
macro_rules! named_register {
    ($(#[$meta:meta])* $name:ident @ $addr:expr) => {
        paste::paste! {
            $(#[$meta])*
            #[inline]
            pub fn $name(&self) -> u8 {
                self.read($addr)
            }

            #[doc = "Writes the `" $name "` register through the generic write path."]
            #[inline]
            pub fn [<set_ $name>](&mut self, value: u8) {
                self.write($addr, value);
            }
        }
    };
}

impl NodeBank {
    named_register!(
        /// Reads the stored digital-input snapshot.
        digital_snapshot @ REG_DIGITAL_SNAPSHOT
    );

    named_register!(
        /// Reads the stored analog channel 0 value.
        analog_ch0 @ REG_ANALOG_CH0
    );

    named_register!(
        /// Reads the stored analog channel 1 value.
        analog_ch1 @ REG_ANALOG_CH1
    );

    named_register!(
        /// Reads the stored output configuration.
        output_config @ REG_OUTPUT_CONFIG
    );

    /// Routes an analog reading to its channel register.
    ///
    /// Channels other than 0 and 1 are ignored.
    #[inline]
    pub fn set_analog_channel(&mut self, channel: u8, value: u8) {
        match channel {
            0 => self.set_analog_ch0(value),
            1 => self.set_analog_ch1(value),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_accessors_route_to_mapped_addresses() {
        let mut bank = node_bank();

        bank.set_digital_snapshot(0b1010_0101);
        bank.set_analog_channel(0, 0x12);
        bank.set_analog_channel(1, 0x34);

        assert_eq!(bank.read(REG_DIGITAL_SNAPSHOT), 0b1010_0101);
        assert_eq!(bank.read(REG_ANALOG_CH0), 0x12);
        assert_eq!(bank.read(REG_ANALOG_CH1), 0x34);
        assert_eq!(bank.digital_snapshot(), 0b1010_0101);
        assert_eq!(bank.analog_ch0(), 0x12);
        assert_eq!(bank.analog_ch1(), 0x34);
    }

    #[test]
    fn passive_setters_do_not_notify_but_config_setter_does() {
        let mut bank = node_bank();

        bank.set_digital_snapshot(0xFF);
        bank.set_analog_channel(0, 0xFF);
        bank.set_analog_channel(1, 0xFF);
        assert!(!bank.change_pending());

        bank.set_output_config(0x0F);
        assert_eq!(bank.get_and_ack_change(), Some(0x0F));
        assert_eq!(bank.output_config(), 0x0F);
    }

    #[test]
    fn unknown_analog_channel_is_ignored() {
        let mut bank = node_bank();
        bank.set_analog_channel(2, 0x99);

        for address in 0..NODE_REGISTER_COUNT as u8 {
            assert_eq!(bank.read(address), 0);
        }
        assert!(!bank.change_pending());
    }
}
