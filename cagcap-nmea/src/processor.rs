use std::collections::VecDeque;

use log::debug;

use crate::message::NmeaMessage;
use crate::protocol::NmeaProtocol;

/// Buffers transport chunks and runs them through the framing state machine.
/// Chunk boundaries need not line up with sentences.
#[derive(Debug, Default)]
pub struct GpsDataProcessor {
    queue: VecDeque<char>,
    protocol: NmeaProtocol,
}

impl GpsDataProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `data` and drains the whole queue before returning, handing
    /// every decoded message to `publish` in stream order.
    pub fn process<F: FnMut(NmeaMessage)>(&mut self, data: &str, mut publish: F) {
        if data.is_empty() {
            return;
        }
        self.queue.extend(data.chars());
        while let Some(c) = self.queue.pop_front() {
            if let Some(message) = self.protocol.process(c) {
                debug!("Decoded {:?}", message);
                publish(message);
            }
        }
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}
