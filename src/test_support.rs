//! Test support utilities - only compiled in test builds.

use heapless::Vec;

use crate::io::{ByteSink, ByteSource, SampleSource};

/// Byte source replaying a fixed script, then reporting "no data".
pub struct ScriptedSource {
    bytes: Vec<u8, 32>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(script: &[u8]) -> Self {
        Self {
            bytes: Vec::from_slice(script).unwrap(),
            next: 0,
        }
    }
}

impl ByteSource for ScriptedSource {
    fn poll_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.next).copied();
        if byte.is_some() {
            self.next += 1;
        }
        byte
    }
}

/// Byte sink recording everything pushed at it.
pub struct RecordingSink {
    bytes: Vec<u8, 32>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl ByteSink for RecordingSink {
    fn push_byte(&mut self, byte: u8) {
        self.bytes.push(byte).unwrap();
    }
}

/// Sample source always reading the same value.
pub struct ConstSample(pub u8);

impl SampleSource for ConstSample {
    fn sample(&mut self) -> u8 {
        self.0
    }
}
