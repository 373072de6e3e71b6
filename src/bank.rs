//! Fixed-size register storage with a coalescing change flag.

/// A fixed bank of `N` 8-bit registers addressed by a small integer.
///
/// One address is designated at construction as the *notifying* address: any
/// stored write to it latches the change flag, regardless of which code path
/// performed the write. The flag is level-triggered and coalescing - writes
/// that land before the pending change is acknowledged keep it set and
/// overwrite the stored value, so only the last value is observable.
///
/// All operations are total: out-of-range reads return 0 and out-of-range
/// writes are no-ops. Nothing here blocks or fails.
pub struct RegisterBank<const N: usize> {
    cells: [u8; N],
    notify_address: u8,
    changed: bool,
}

impl<const N: usize> RegisterBank<N> {
    /// Creates a bank with every register zeroed and the change flag clear.
    ///
    /// # Panics
    /// Panics if `notify_address` is not a valid register address.
    pub fn new(notify_address: u8) -> Self {
        assert!(
            (notify_address as usize) < N,
            "notify address {} out of range for {} registers",
            notify_address,
            N
        );

        Self {
            cells: [0; N],
            notify_address,
            changed: false,
        }
    }

    /// Resets every register to 0 and clears any pending change.
    ///
    /// Idempotent. Also the recovery action after a detected protocol
    /// desynchronization; the notifying address is preserved.
    pub fn init(&mut self) {
        self.cells = [0; N];
        self.changed = false;
    }

    /// Returns the stored byte, or 0 for an out-of-range address.
    #[inline]
    pub fn read(&self, address: u8) -> u8 {
        match self.cells.get(address as usize) {
            Some(&value) => value,
            None => 0,
        }
    }

    /// Stores `value` at `address`; no-op if the address is out of range.
    ///
    /// A stored write to the notifying address also raises the change flag.
    /// The flag is tied to the address, not the caller.
    #[inline]
    pub fn write(&mut self, address: u8, value: u8) {
        if let Some(cell) = self.cells.get_mut(address as usize) {
            *cell = value;
            if address == self.notify_address {
                self.changed = true;
            }
        }
    }

    /// Acknowledges a pending change, returning the notifying register's
    /// current value, or `None` if nothing changed since the last ack.
    ///
    /// This is the single read-and-clear pairing for the flag. Multiple
    /// writes before one ack collapse into one `Some` carrying the last
    /// value.
    pub fn get_and_ack_change(&mut self) -> Option<u8> {
        if self.changed {
            self.changed = false;
            Some(self.cells[self.notify_address as usize])
        } else {
            None
        }
    }

    /// Returns true if a change is pending, without acknowledging it.
    #[inline]
    pub fn change_pending(&self) -> bool {
        self.changed
    }

    /// The address whose writes raise the change flag.
    #[inline]
    pub fn notify_address(&self) -> u8 {
        self.notify_address
    }
}
