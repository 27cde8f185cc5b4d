use std::collections::VecDeque;

use nrf905::mod_params::{MAX_PAYLOAD_LENGTH, RadioError};

use crate::radio::{LinkError, RadioLink};

/// Scripted stand-in for the radio. Frames queued here come back out of
/// `poll` one per call, padded to the frame width the hardware delivers;
/// sends are recorded for inspection.
#[derive(Debug, Default)]
pub struct TestLink {
    pub incoming: VecDeque<[u8; MAX_PAYLOAD_LENGTH]>,
    pub sent: Vec<(Vec<u8>, u32, u32)>,
    pub fail_next_send: bool,
}

impl TestLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_frame(&mut self, frame: &[u8]) {
        let mut padded = [0u8; MAX_PAYLOAD_LENGTH];
        padded[..frame.len()].copy_from_slice(frame);
        self.incoming.push_back(padded);
    }
}

impl RadioLink for TestLink {
    fn poll(&mut self, buffer: &mut [u8; MAX_PAYLOAD_LENGTH]) -> Result<bool, LinkError> {
        match self.incoming.pop_front() {
            Some(frame) => {
                *buffer = frame;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn send(&mut self, payload: &[u8], destination: u32, timeout_ms: u32) -> Result<(), LinkError> {
        if self.fail_next_send {
            self.fail_next_send = false;
            return Err(LinkError::Radio(RadioError::TransmitTimeout));
        }
        self.sent.push((payload.to_vec(), destination, timeout_ms));
        Ok(())
    }
}
