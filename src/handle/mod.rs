//! Context-scoped ports over [`NodeStorage`](crate::storage::NodeStorage).
//!
//! [`BusPort`] belongs to the bus-peripheral context (often an ISR) and
//! [`HostPort`] to the main loop. Every port operation runs inside
//! `critical_section::with`; the `unsafe` `_unchecked` variants skip the
//! critical section for hosts that drive both contexts from one
//! non-preemptible loop, which is the reference deployment (pure polling,
//! no interrupts) - the caller vouches for that exclusivity.

mod bus;
mod host;

pub use bus::BusPort;
pub use host::HostPort;
