//! A `no_std`, no-alloc register bank for embedded slave nodes.
//!
//! This crate implements the register-facing core of a small control node: a
//! fixed bank of 8-bit registers exposed to an external bus master through a
//! byte-pair write protocol, plus a change-notification contract that lets
//! the surrounding control loop push a configuration register out on a
//! secondary channel whenever it is rewritten.
//!
//! # Features
//!
//! - **Zero heap allocation** - All storage statically sized
//! - **Total operations** - Out-of-range reads yield 0, out-of-range writes
//!   are no-ops; nothing blocks, nothing fails
//! - **Byte-pair protocol** - Two consecutive inbound bytes form one
//!   (address, value) register write
//! - **Coalescing change flag** - Writes to the notifying register latch a
//!   single level-triggered flag, cleared only by acknowledgment
//! - **Dual access contexts** - Bus (ISR) and host (main loop) ports guarded
//!   by critical sections
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  bytes   ┌───────────────┐  write   ┌───────────────┐
//! │ Bus master   │─────────▶│ ByteProtocol  │─────────▶│ RegisterBank  │
//! │ (two-wire)   │          │ addr ⇄ data   │          │ [u8; N]       │
//! └──────────────┘          └───────────────┘          │ change flag   │
//!                                                      └───────┬───────┘
//! ┌──────────────┐  sample                  ack + value        │
//! │ SampleSource │─────────▶ passive registers                 ▼
//! │ (GPIO / ADC) │          ┌─────────────────────────────────────────┐
//! └──────────────┘          │ SamplerLoop ──▶ ByteSink (aux channel)  │
//!                           └─────────────────────────────────────────┘
//! ```
//!
//! - **Bus writes** arrive one byte at a time and land in the bank through
//!   the two-state protocol cursor
//! - **Sampler writes** refresh the passive registers without raising the
//!   change flag
//! - **The host loop** acknowledges the flag and forwards the new value
//!   out-of-band, at most one pending change at a time
//!
//! # Example
//!
//! ```rust
//! use embedded_regbank::prelude::*;
//!
//! // Reference map: 4 registers, writes to register 3 raise a notification.
//! let node = node_storage();
//!
//! // Bus master sends the (address, value) pair 3, 0x42.
//! node.bus_port().on_byte_received(0x03);
//! node.bus_port().on_byte_received(0x42);
//!
//! // Main loop picks the change up exactly once.
//! let changed = node.host_port().with_bank(|bank| bank.get_and_ack_change());
//! assert_eq!(changed, Some(0x42));
//! assert_eq!(node.host_port().with_bank(|bank| bank.get_and_ack_change()), None);
//! ```

#![deny(unsafe_code)]
#![no_std]

pub mod bank;
pub mod handle;
pub mod io;
pub mod map;
pub mod protocol;
pub mod runner;
pub mod storage;

#[cfg(test)]
mod test_support;

pub use bank::RegisterBank;
pub use handle::{BusPort, HostPort};
pub use io::{ByteSink, ByteSource, SampleSource};
pub use map::{
    NODE_REGISTER_COUNT, NodeBank, NodeStorage4, REG_ANALOG_CH0, REG_ANALOG_CH1,
    REG_DIGITAL_SNAPSHOT, REG_OUTPUT_CONFIG, node_bank, node_storage,
};
pub use protocol::{ByteProtocol, Cursor};
pub use runner::SamplerLoop;
pub use storage::NodeStorage;

pub mod prelude {
    pub use crate::{
        BusPort, ByteProtocol, ByteSink, ByteSource, Cursor, HostPort, NODE_REGISTER_COUNT,
        NodeBank, NodeStorage, NodeStorage4, REG_ANALOG_CH0, REG_ANALOG_CH1, REG_DIGITAL_SNAPSHOT,
        REG_OUTPUT_CONFIG, RegisterBank, SampleSource, SamplerLoop, node_bank, node_storage,
    };
}
