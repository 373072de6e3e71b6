//! Polling-loop glue between the node core and its collaborators.

use crate::{
    io::{ByteSink, ByteSource, SampleSource},
    map::NodeStorage4,
};

/// One node's control loop body over the capability traits.
///
/// Each [`poll_once`](Self::poll_once) call performs one loop iteration:
/// drain inbound bytes into the protocol, refresh the passive registers with
/// fresh samples, then forward at most one acknowledged configuration change
/// to the auxiliary channel.
///
/// Two configuration writes that land between consecutive polls coalesce
/// into one forwarded byte carrying the later value; poll at least once
/// between writes to observe both.
pub struct SamplerLoop<D, A0, A1, RX, TX> {
    digital: D,
    analog_ch0: A0,
    analog_ch1: A1,
    rx: RX,
    tx: TX,
}

impl<D, A0, A1, RX, TX> SamplerLoop<D, A0, A1, RX, TX>
where
    D: SampleSource,
    A0: SampleSource,
    A1: SampleSource,
    RX: ByteSource,
    TX: ByteSink,
{
    /// Wires the loop to its sample sources and byte channels.
    pub fn new(digital: D, analog_ch0: A0, analog_ch1: A1, rx: RX, tx: TX) -> Self {
        Self {
            digital,
            analog_ch0,
            analog_ch1,
            rx,
            tx,
        }
    }

    /// Runs one loop iteration against `node`.
    pub fn poll_once(&mut self, node: &NodeStorage4) {
        let bus = node.bus_port();
        while let Some(byte) = self.rx.poll_byte() {
            bus.on_byte_received(byte);
        }

        let digital = self.digital.sample();
        let analog_ch0 = self.analog_ch0.sample();
        let analog_ch1 = self.analog_ch1.sample();

        let changed = node.host_port().with_bank(|bank| {
            bank.set_digital_snapshot(digital);
            bank.set_analog_channel(0, analog_ch0);
            bank.set_analog_channel(1, analog_ch1);
            bank.get_and_ack_change()
        });

        if let Some(value) = changed {
            self.tx.push_byte(value);
        }
    }

    /// Releases the wired collaborators.
    pub fn into_parts(self) -> (D, A0, A1, RX, TX) {
        (
            self.digital,
            self.analog_ch0,
            self.analog_ch1,
            self.rx,
            self.tx,
        )
    }
}
