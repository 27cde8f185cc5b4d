#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
//! ## Feature flags
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]

mod fmt;

/// Sub-field types and codec for the 10 byte RF-CONFIG register
pub mod config;
/// The read/write interface between an embedded framework/MCU combination and the chip
pub(crate) mod interface;
/// ControlLines implementations using `embedded-hal`
pub mod iv;
/// Parameters used across the nrf905 crate to support various use cases
pub mod mod_params;
/// Traits implemented externally to support control of the chip's discrete lines
pub mod mod_traits;

#[cfg(test)]
mod test;

pub use config::Config;
pub use embedded_hal::delay::DelayNs;
pub use embedded_hal::spi::SpiDevice;

use config::CONFIG_LEN;
use interface::*;
use mod_params::*;
use mod_traits::*;

/// Provides the physical layer API to drive an nRF905 transceiver
pub struct Nrf905<SPI, CL, DLY>
where
    SPI: SpiDevice<u8>,
    CL: ControlLines,
    DLY: DelayNs,
{
    intf: SpiInterface<SPI>,
    lines: CL,
    delay: DLY,
    radio_mode: RadioMode,
    configured: bool,
}

impl<SPI, CL, DLY> Nrf905<SPI, CL, DLY>
where
    SPI: SpiDevice<u8>,
    CL: ControlLines,
    DLY: DelayNs,
{
    /// Build and return a new instance of the driver, leaving the chip powered
    /// up and idle. A configuration still has to be loaded through
    /// [`set_config`](Self::set_config) before any payload can move.
    pub fn new(spi: SPI, lines: CL, delay: DLY) -> Result<Self, RadioError> {
        let mut radio = Self {
            intf: SpiInterface::new(spi),
            lines,
            delay,
            radio_mode: RadioMode::PowerDown,
            configured: false,
        };
        radio.init()?;

        Ok(radio)
    }

    /// Run the power-up sequence: PWR_UP high, crystal settle time, Idle.
    pub fn init(&mut self) -> Result<(), RadioError> {
        self.set_power_mode(PowerMode::Up)?;
        // 3 ms maximum crystal settle time after PWR_UP
        self.delay.delay_ms(3);
        self.lines.set_tx_enable(false)?;
        self.lines.set_chip_enable(false)?;
        self.radio_mode = RadioMode::Idle;
        self.configured = false;
        Ok(())
    }

    /// Move the chip between its line-level states. Re-entering the current
    /// mode performs no I/O.
    pub fn set_mode(&mut self, mode: RadioMode) -> Result<(), RadioError> {
        if self.radio_mode == mode {
            return Ok(());
        }
        match mode {
            RadioMode::PowerDown => {
                self.lines.set_chip_enable(false)?;
            }
            RadioMode::Idle => {
                self.lines.set_tx_enable(false)?;
                self.lines.set_chip_enable(false)?;
            }
            RadioMode::Transmit => {
                self.lines.set_tx_enable(true)?;
                self.lines.set_chip_enable(true)?;
            }
            RadioMode::Receive => {
                self.lines.set_tx_enable(false)?;
                self.lines.set_chip_enable(true)?;
            }
        }
        trace!("mode: {}", mode);
        self.radio_mode = mode;
        Ok(())
    }

    /// Drive the PWR_UP line, independent of the mode state machine. Register
    /// contents are retained while powered down.
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), RadioError> {
        self.lines.set_power(mode == PowerMode::Up)
    }

    /// Place the chip in its lowest-power state.
    pub fn sleep(&mut self) -> Result<(), RadioError> {
        self.set_mode(RadioMode::PowerDown)?;
        self.set_power_mode(PowerMode::Down)
    }

    /// Power the chip back up and return to Idle. The loaded configuration
    /// survives the power-down.
    pub fn wake(&mut self) -> Result<(), RadioError> {
        self.set_power_mode(PowerMode::Up)?;
        self.delay.delay_ms(3);
        self.set_mode(RadioMode::Idle)
    }

    /// Load and verify a configuration: force Idle, write the register image,
    /// read it back and compare. A mismatch is a hard fault that leaves the
    /// driver unconfigured.
    pub fn set_config(&mut self, config: &Config) -> Result<[u8; CONFIG_LEN], RadioError> {
        self.set_mode(RadioMode::Idle)?;
        let bytes = config.to_bytes()?;
        self.intf.write(OpCode::WriteConfig, &bytes)?;

        let mut verify = [0u8; CONFIG_LEN];
        self.intf.read(OpCode::ReadConfig, &mut verify)?;
        if verify != bytes {
            self.configured = false;
            warn!(
                "config read-back mismatch: wrote {=[u8]:02x}, read {=[u8]:02x}",
                bytes, verify
            );
            return Err(RadioError::ConfigMismatch);
        }

        self.configured = true;
        debug!("configured: channel {}, {} Hz", config.channel, config.frequency());
        Ok(verify)
    }

    /// Read the leading `buf.len()` bytes of the RF-CONFIG register without
    /// decoding them.
    pub fn read_config_bytes(&mut self, buf: &mut [u8]) -> Result<(), RadioError> {
        if buf.len() > CONFIG_LEN {
            return Err(RadioError::PayloadSizeUnexpected(buf.len()));
        }
        self.intf.read(OpCode::ReadConfig, buf)
    }

    /// Read and decode the whole RF-CONFIG register.
    pub fn read_config(&mut self) -> Result<Config, RadioError> {
        let mut bytes = [0u8; CONFIG_LEN];
        self.intf.read(OpCode::ReadConfig, &mut bytes)?;
        Ok(Config::from_bytes(&bytes))
    }

    /// Read back the TX_PAYLOAD register (bring-up diagnostic).
    pub fn read_tx_payload(&mut self, buf: &mut [u8]) -> Result<(), RadioError> {
        if buf.len() > MAX_PAYLOAD_LENGTH {
            return Err(RadioError::PayloadSizeUnexpected(buf.len()));
        }
        self.intf.read(OpCode::ReadTxPayload, buf)
    }

    /// Read back the TX_ADDRESS register (bring-up diagnostic).
    pub fn read_tx_address(&mut self) -> Result<[u8; ADDRESS_LENGTH], RadioError> {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        self.intf.read(OpCode::ReadTxAddress, &mut bytes)?;
        Ok(bytes)
    }

    /// Status register byte the chip shifts out at the start of every
    /// transaction. AM and DR are mirrored in it.
    pub fn read_status(&mut self) -> Result<u8, RadioError> {
        self.intf.read_with_status(OpCode::ReadConfig, &mut [])
    }

    /// Execute a send operation: load the destination and payload, hold
    /// Transmit until the chip raises data-ready, then drop into Receive.
    /// The data-ready wait is bounded by `timeout_in_ms`, polled in 1 ms
    /// steps; the chip is returned to Receive even when the wait expires.
    pub fn transmit(
        &mut self,
        payload: &[u8],
        destination: u32,
        timeout_in_ms: u32,
    ) -> Result<(), RadioError> {
        if payload.len() > MAX_PAYLOAD_LENGTH {
            return Err(RadioError::PayloadSizeUnexpected(payload.len()));
        }
        if !self.configured {
            return Err(RadioError::NotConfigured);
        }

        self.set_mode(RadioMode::Idle)?;
        self.intf.write(OpCode::WriteTxAddress, &destination.to_le_bytes())?;
        self.intf.write(OpCode::WriteTxPayload, payload)?;
        self.set_mode(RadioMode::Transmit)?;

        let mut i = 0;
        let result = loop {
            match self.lines.data_ready() {
                Ok(true) => break Ok(()),
                Ok(false) => {}
                Err(err) => break Err(err),
            }
            if i >= timeout_in_ms {
                break Err(RadioError::TransmitTimeout);
            }
            self.delay.delay_ms(1);
            i += 1;
        };
        self.set_mode(RadioMode::Receive)?;
        result
    }

    /// Single non-blocking receive poll. Returns `Ok(false)` when no frame
    /// addressed to this device is waiting, without touching the SPI bus.
    /// On `Ok(true)` a full frame has been read into `buf` and the chip is
    /// back in Idle.
    pub fn receive(&mut self, buf: &mut [u8; MAX_PAYLOAD_LENGTH]) -> Result<bool, RadioError> {
        if !self.configured {
            return Err(RadioError::NotConfigured);
        }
        self.set_mode(RadioMode::Receive)?;

        if !self.lines.address_match()? {
            return Ok(false);
        }
        if !self.lines.data_ready()? {
            return Ok(false);
        }

        self.intf.read(OpCode::ReadRxPayload, buf)?;
        self.set_mode(RadioMode::Idle)?;
        debug!("rx: {=[u8]:02x}", &buf[..]);
        Ok(true)
    }

    /// Tear down, handing the SPI bus and control lines back to the caller.
    /// Lines are forced to their safe levels first; a line fault on the way
    /// out does not keep ownership.
    pub fn release(mut self) -> (SPI, CL) {
        let _ = self.lines.set_chip_enable(false);
        let _ = self.lines.set_tx_enable(false);
        let _ = self.lines.set_power(false);
        (self.intf.spi, self.lines)
    }
}
