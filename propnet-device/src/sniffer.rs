//! Background capture of everything the radio hears.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use nrf905::mod_params::MAX_PAYLOAD_LENGTH;
use propnet_encoding::parser::PacketSummary;

use crate::radio::RadioLink;

/// Sleep between polls that came back empty.
const POLL_INTERVAL: Duration = Duration::from_millis(5);
/// How long [`Sniffer::stop`] waits for the worker before giving up.
const STOP_TIMEOUT: Duration = Duration::from_millis(500);

/// One sniffed frame: the decoded summary plus the raw bytes as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Decoded header and settings.
    pub summary: PacketSummary,
    /// The full frame off the air.
    pub raw: Vec<u8>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SnifferError {
    /// The polling thread did not acknowledge the stop flag in time; the
    /// link is lost with it.
    StopTimeout,
    /// The polling thread panicked and the link is gone.
    WorkerPanicked,
}

/// Background worker that owns the link and captures every decodable frame.
///
/// The worker polls the link in a loop, sleeping briefly between misses.
/// Frames that fail to decode are logged and dropped; everything else is
/// queued for [`Sniffer::captures`].
pub struct Sniffer<L> {
    stop: Arc<AtomicBool>,
    rx: Receiver<Capture>,
    worker: JoinHandle<L>,
}

impl<L: RadioLink + Send + 'static> Sniffer<L> {
    /// Takes the link and starts polling it on a background thread.
    pub fn spawn(mut link: L) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();
        let worker_stop = stop.clone();
        let worker = thread::spawn(move || {
            let mut buffer = [0u8; MAX_PAYLOAD_LENGTH];
            while !worker_stop.load(Ordering::Relaxed) {
                match link.poll(&mut buffer) {
                    Ok(true) => match PacketSummary::from_bytes(&buffer) {
                        Ok(summary) => {
                            let capture = Capture { summary, raw: buffer.to_vec() };
                            // The receiving side is gone; no reason to keep
                            // polling.
                            if tx.send(capture).is_err() {
                                break;
                            }
                        }
                        Err(err) => log::warn!("dropping undecodable frame: {:?}", err),
                    },
                    Ok(false) => thread::sleep(POLL_INTERVAL),
                    Err(err) => {
                        log::warn!("sniffer poll failed: {:?}", err);
                        thread::sleep(POLL_INTERVAL);
                    }
                }
            }
            link
        });
        Sniffer { stop, rx, worker }
    }

    /// Drains everything captured since the last call.
    pub fn captures(&self) -> Vec<Capture> {
        let mut drained = Vec::new();
        while let Ok(capture) = self.rx.try_recv() {
            drained.push(capture);
        }
        drained
    }

    /// Stops the worker and hands the link back. A wedged link fails the
    /// join with `StopTimeout` instead of hanging the caller.
    pub fn stop(self) -> Result<L, SnifferError> {
        self.stop.store(true, Ordering::Relaxed);
        let deadline = Instant::now() + STOP_TIMEOUT;
        while !self.worker.is_finished() {
            if Instant::now() >= deadline {
                return Err(SnifferError::StopTimeout);
            }
            thread::sleep(Duration::from_millis(1));
        }
        self.worker.join().map_err(|_| SnifferError::WorkerPanicked)
    }
}
