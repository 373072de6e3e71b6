//! Polling loop demo: a bus master writes the output-configuration register
//! and the node forwards the acknowledged value on the auxiliary channel.
//!
//! The inbound side uses a heapless SPSC queue, the same handoff an
//! interrupt-driven receiver would use.

use embedded_regbank::prelude::*;
use heapless::spsc::Queue;

struct Fixed(u8);

impl SampleSource for Fixed {
    fn sample(&mut self) -> u8 {
        self.0
    }
}

struct PrintSink;

impl ByteSink for PrintSink {
    fn push_byte(&mut self, byte: u8) {
        println!("aux channel <- {byte:#04x}");
    }
}

fn main() {
    println!("=== Polling Loop Demo ===\n");

    let node = node_storage();

    let mut inbound: Queue<u8, 16> = Queue::new();
    let (mut master, rx) = inbound.split();

    let mut looper = SamplerLoop::new(
        Fixed(0b1010_0101), // digital input pins
        Fixed(0x10),        // analog channel 0
        Fixed(0x20),        // analog channel 1
        rx,
        PrintSink,
    );

    // Quiet iteration: samples refresh, nothing to forward
    looper.poll_once(&node);
    dump(&node);

    // Master writes 0x42 to the output configuration register
    for byte in [REG_OUTPUT_CONFIG, 0x42] {
        master.enqueue(byte).unwrap();
    }
    looper.poll_once(&node);
    dump(&node);

    // Two rapid rewrites before the next poll coalesce into one forward
    for byte in [REG_OUTPUT_CONFIG, 0x10, REG_OUTPUT_CONFIG, 0x20] {
        master.enqueue(byte).unwrap();
    }
    looper.poll_once(&node);
    dump(&node);
}

fn dump(node: &NodeStorage4) {
    let bus = node.bus_port();
    println!(
        "registers: dig={:#04x} a0={:#04x} a1={:#04x} cfg={:#04x}\n",
        bus.register(REG_DIGITAL_SNAPSHOT),
        bus.register(REG_ANALOG_CH0),
        bus.register(REG_ANALOG_CH1),
        bus.register(REG_OUTPUT_CONFIG),
    );
}
