//! The seam between host code and the transceiver.

use nrf905::mod_params::{MAX_PAYLOAD_LENGTH, RadioError};
use nrf905::mod_traits::ControlLines;
use nrf905::{DelayNs, Nrf905, SpiDevice};
use propnet_encoding::creator::{Error as EncodeError, PacketCreator};

/// Errors surfaced through [`RadioLink`] and [`send_packet`].
#[derive(Debug, PartialEq, Eq)]
pub enum LinkError {
    /// The radio rejected or failed the transfer.
    Radio(RadioError),
    /// The staged packet could not be encoded.
    Encode(EncodeError),
}

impl From<RadioError> for LinkError {
    fn from(err: RadioError) -> Self {
        LinkError::Radio(err)
    }
}

/// Blocking transceiver seam the host code talks through.
///
/// The real implementation drives an [`Nrf905`]; tests substitute a scripted
/// link.
pub trait RadioLink {
    /// Checks for one pending frame. `Ok(true)` fills `buffer` with it;
    /// `Ok(false)` means nothing was waiting.
    fn poll(&mut self, buffer: &mut [u8; MAX_PAYLOAD_LENGTH]) -> Result<bool, LinkError>;

    /// Transmits `payload` to `destination`, waiting at most `timeout_ms`
    /// for the radio to finish.
    fn send(&mut self, payload: &[u8], destination: u32, timeout_ms: u32) -> Result<(), LinkError>;
}

impl<SPI, CL, DLY> RadioLink for Nrf905<SPI, CL, DLY>
where
    SPI: SpiDevice<u8>,
    CL: ControlLines,
    DLY: DelayNs,
{
    fn poll(&mut self, buffer: &mut [u8; MAX_PAYLOAD_LENGTH]) -> Result<bool, LinkError> {
        Ok(self.receive(buffer)?)
    }

    fn send(&mut self, payload: &[u8], destination: u32, timeout_ms: u32) -> Result<(), LinkError> {
        Ok(self.transmit(payload, destination, timeout_ms)?)
    }
}

/// Encodes the staged packet and pushes it out over the link, logging the
/// outcome either way.
pub fn send_packet<L: RadioLink>(
    link: &mut L,
    creator: &PacketCreator<'_>,
    destination: u32,
    timeout_ms: u32,
) -> Result<(), LinkError> {
    let packet = creator.encode().map_err(LinkError::Encode)?;

    // The chip clocks out its whole payload register every burst, so pad the
    // frame to full width and keep the tail zeroed rather than stale.
    let mut frame = [0u8; MAX_PAYLOAD_LENGTH];
    frame[..packet.len()].copy_from_slice(&packet);

    match link.send(&frame, destination, timeout_ms) {
        Ok(()) => {
            log::debug!("sent {} byte packet to 0x{:08X}", packet.len(), destination);
            Ok(())
        }
        Err(err) => {
            log::warn!("send to 0x{:08X} failed: {:?}", destination, err);
            Err(err)
        }
    }
}
