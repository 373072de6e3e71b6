//! Capability traits for the node's collaborators.
//!
//! The wire formats behind these traits (bus peripheral registers, GPIO
//! banks, ADC conversions) belong to the platform layer; the node only needs
//! narrow byte-oriented capabilities.

/// Yields zero or more inbound bytes per poll.
///
/// `None` means "no byte available" - an explicit indicator, so a genuine
/// 0x00 data byte is deliverable and never mistaken for silence.
pub trait ByteSource {
    /// Returns the next available byte, if any.
    fn poll_byte(&mut self) -> Option<u8>;
}

/// Accepts one outbound byte.
///
/// Used for the auxiliary channel that carries acknowledged configuration
/// changes. Infallible: a sink that can lose bytes (a full queue, a busy
/// peripheral) drops them, and the coalescing change flag means the next
/// acknowledgment carries the latest value anyway.
pub trait ByteSink {
    /// Pushes one byte toward the channel.
    fn push_byte(&mut self, byte: u8);
}

/// Yields one freshly sampled 8-bit value per poll.
///
/// Digital input snapshots and analog channel readings both arrive through
/// this capability; scaling raw conversions to 8 bits is the sampler's job.
pub trait SampleSource {
    /// Samples the current value.
    fn sample(&mut self) -> u8;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn poll_byte(&mut self) -> Option<u8> {
        (**self).poll_byte()
    }
}

impl<T: ByteSink + ?Sized> ByteSink for &mut T {
    fn push_byte(&mut self, byte: u8) {
        (**self).push_byte(byte)
    }
}

impl<T: SampleSource + ?Sized> SampleSource for &mut T {
    fn sample(&mut self) -> u8 {
        (**self).sample()
    }
}

/// ISR-to-loop handoff: the interrupt enqueues received bytes through the
/// producer half, the loop drains them here.
impl<const C: usize> ByteSource for heapless::spsc::Consumer<'_, u8, C> {
    fn poll_byte(&mut self) -> Option<u8> {
        self.dequeue()
    }
}

/// Loop-to-ISR handoff for the auxiliary channel. A byte that arrives while
/// the queue is full is dropped.
impl<const C: usize> ByteSink for heapless::spsc::Producer<'_, u8, C> {
    fn push_byte(&mut self, byte: u8) {
        let _ = self.enqueue(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::spsc::Queue;

    #[test]
    fn spsc_consumer_polls_queued_bytes_including_zero() {
        let mut queue: Queue<u8, 8> = Queue::new();
        let (mut producer, mut consumer) = queue.split();

        producer.enqueue(0x00).unwrap();
        producer.enqueue(0xAA).unwrap();

        assert_eq!(consumer.poll_byte(), Some(0x00));
        assert_eq!(consumer.poll_byte(), Some(0xAA));
        assert_eq!(consumer.poll_byte(), None);
    }

    #[test]
    fn spsc_producer_drops_bytes_when_full() {
        // Capacity-C queue holds C - 1 items
        let mut queue: Queue<u8, 4> = Queue::new();
        let (mut producer, mut consumer) = queue.split();

        for byte in 0..5u8 {
            producer.push_byte(byte);
        }

        assert_eq!(consumer.poll_byte(), Some(0));
        assert_eq!(consumer.poll_byte(), Some(1));
        assert_eq!(consumer.poll_byte(), Some(2));
        assert_eq!(consumer.poll_byte(), None);
    }
}
