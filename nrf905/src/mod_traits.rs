use crate::mod_params::RadioError;

/// Functions implemented for an embedded framework for an MCU/nRF905 board
/// combination to give this crate the chip's discrete control and status lines.
pub trait ControlLines {
    /// Drive the PWR_UP line
    fn set_power(&mut self, enabled: bool) -> Result<(), RadioError>;
    /// Drive the TRX_CE line
    fn set_chip_enable(&mut self, enabled: bool) -> Result<(), RadioError>;
    /// Drive the TX_EN line
    fn set_tx_enable(&mut self, enabled: bool) -> Result<(), RadioError>;
    /// Sample the DR line, high once a carrier has been sent or a valid frame received
    fn data_ready(&mut self) -> Result<bool, RadioError>;
    /// Sample the AM line, high while an incoming frame addresses this device
    fn address_match(&mut self) -> Result<bool, RadioError>;
}
