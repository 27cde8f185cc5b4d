use embedded_hal::digital::{InputPin, OutputPin};

use crate::mod_params::RadioError;
use crate::mod_params::RadioError::*;
use crate::mod_traits::ControlLines;

/// Base for the ControlLines implementation for a board wiring the chip's
/// control and status pins straight to GPIO.
pub struct GenericControlLines<CTRL, SENSE> {
    power: CTRL,
    chip_enable: CTRL,
    tx_enable: CTRL,
    data_ready: SENSE,
    address_match: SENSE,
}

impl<CTRL, SENSE> GenericControlLines<CTRL, SENSE>
where
    CTRL: OutputPin,
    SENSE: InputPin,
{
    /// Create a ControlLines instance for a plain GPIO board
    pub fn new(
        power: CTRL,
        chip_enable: CTRL,
        tx_enable: CTRL,
        data_ready: SENSE,
        address_match: SENSE,
    ) -> Result<Self, RadioError> {
        Ok(Self {
            power,
            chip_enable,
            tx_enable,
            data_ready,
            address_match,
        })
    }
}

impl<CTRL, SENSE> ControlLines for GenericControlLines<CTRL, SENSE>
where
    CTRL: OutputPin,
    SENSE: InputPin,
{
    fn set_power(&mut self, enabled: bool) -> Result<(), RadioError> {
        self.power.set_state(enabled.into()).map_err(|_| PowerEnable)
    }
    fn set_chip_enable(&mut self, enabled: bool) -> Result<(), RadioError> {
        self.chip_enable.set_state(enabled.into()).map_err(|_| ChipEnable)
    }
    fn set_tx_enable(&mut self, enabled: bool) -> Result<(), RadioError> {
        self.tx_enable.set_state(enabled.into()).map_err(|_| TxEnable)
    }
    fn data_ready(&mut self) -> Result<bool, RadioError> {
        self.data_ready.is_high().map_err(|_| DataReady)
    }
    fn address_match(&mut self) -> Result<bool, RadioError> {
        self.address_match.is_high().map_err(|_| AddressMatch)
    }
}
