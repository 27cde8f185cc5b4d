use crate::mod_params::RadioError;

/// Length of the RF-CONFIG register in bytes.
pub const CONFIG_LEN: usize = 10;

/// Transmit output power (PA_PWR, two bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum OutputPower {
    Negative10dBm = 0b00,
    Negative2dBm = 0b01,
    Positive6dBm = 0b10,
    Positive10dBm = 0b11,
}

impl OutputPower {
    fn from_value(value: u8) -> Self {
        match value & 0x03 {
            0b00 => OutputPower::Negative10dBm,
            0b01 => OutputPower::Negative2dBm,
            0b10 => OutputPower::Positive6dBm,
            _ => OutputPower::Positive10dBm,
        }
    }
}

/// PLL band selection (HFREQ_PLL, one bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum FrequencyBand {
    /// 433 MHz band
    Low = 0,
    /// 868/915 MHz band
    High = 1,
}

impl FrequencyBand {
    fn from_value(value: u8) -> Self {
        if value & 0x01 == 0 {
            FrequencyBand::Low
        } else {
            FrequencyBand::High
        }
    }
}

/// CRC checksum width (CRC_MODE, one bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum CrcMode {
    EightBit = 0,
    SixteenBit = 1,
}

impl CrcMode {
    fn from_value(value: u8) -> Self {
        if value & 0x01 == 0 {
            CrcMode::EightBit
        } else {
            CrcMode::SixteenBit
        }
    }
}

/// Output clock frequency for a host MCU (UP_CLK_FREQ, two bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum ClockOutFrequency {
    F4Mhz = 0b00,
    F2Mhz = 0b01,
    F1Mhz = 0b10,
    F500Khz = 0b11,
}

impl ClockOutFrequency {
    fn from_value(value: u8) -> Self {
        match value & 0x03 {
            0b00 => ClockOutFrequency::F4Mhz,
            0b01 => ClockOutFrequency::F2Mhz,
            0b10 => ClockOutFrequency::F1Mhz,
            _ => ClockOutFrequency::F500Khz,
        }
    }
}

/// One field per RF-CONFIG sub-field. Sub-fields narrower than their carrying
/// type are range-checked at [`Config::to_bytes`]; the enums cannot hold
/// illegal values in the first place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Config {
    /// Channel number (9 bits, CH_NO plus CH_NO_MSB)
    pub channel: u16,
    /// Retransmit the TX payload until TRX_CE goes low (AUTO_RETRAN)
    pub auto_retransmit: bool,
    /// Reduced-current receive at the cost of sensitivity (RX_RED_PWR)
    pub rx_reduced_power: bool,
    /// PA output power
    pub output_power: OutputPower,
    /// PLL band
    pub band: FrequencyBand,
    /// TX address width in bytes (4 bits, TX_AFW)
    pub tx_address_width: u8,
    /// RX address width in bytes (4 bits, RX_AFW)
    pub rx_address_width: u8,
    /// RX payload width in bytes, 1..=32 (RX_PW)
    pub rx_payload_width: u8,
    /// TX payload width in bytes, 1..=32 (TX_PW)
    pub tx_payload_width: u8,
    /// Address this device answers to, little-endian on the wire (RX_ADDRESS)
    pub rx_address: u32,
    /// CRC width
    pub crc_mode: CrcMode,
    /// CRC generation/checking (CRC_EN)
    pub crc_enabled: bool,
    /// Crystal frequency selector (3 bits, XOF; datasheet values 0..=4)
    pub crystal_frequency: u8,
    /// Drive the output clock pin (UP_CLK_EN)
    pub clock_out_enabled: bool,
    /// Output clock frequency
    pub clock_out_frequency: ClockOutFrequency,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            channel: 0x6C,
            auto_retransmit: false,
            rx_reduced_power: false,
            output_power: OutputPower::Positive10dBm,
            band: FrequencyBand::Low,
            tx_address_width: 4,
            rx_address_width: 4,
            rx_payload_width: 32,
            tx_payload_width: 32,
            rx_address: 0xDEAD_BEEF,
            crc_mode: CrcMode::EightBit,
            crc_enabled: false,
            crystal_frequency: 3,
            clock_out_enabled: false,
            clock_out_frequency: ClockOutFrequency::F4Mhz,
        }
    }
}

impl Config {
    /// Pack into the 10 byte register image, rejecting fields that do not fit
    /// their sub-field width.
    pub fn to_bytes(&self) -> Result<[u8; CONFIG_LEN], RadioError> {
        if self.channel > 0x1FF {
            return Err(RadioError::ChannelOutOfRange(self.channel));
        }
        if self.tx_address_width > 0x0F {
            return Err(RadioError::AddressWidthOutOfRange(self.tx_address_width));
        }
        if self.rx_address_width > 0x0F {
            return Err(RadioError::AddressWidthOutOfRange(self.rx_address_width));
        }
        if self.rx_payload_width == 0 || self.rx_payload_width > 32 {
            return Err(RadioError::PayloadWidthOutOfRange(self.rx_payload_width));
        }
        if self.tx_payload_width == 0 || self.tx_payload_width > 32 {
            return Err(RadioError::PayloadWidthOutOfRange(self.tx_payload_width));
        }
        if self.crystal_frequency > 0x07 {
            return Err(RadioError::CrystalOutOfRange(self.crystal_frequency));
        }

        let mut bytes = [0u8; CONFIG_LEN];
        bytes[0] = (self.channel & 0xFF) as u8;
        bytes[1] = ((self.auto_retransmit as u8) << 5)
            | ((self.rx_reduced_power as u8) << 4)
            | ((self.output_power as u8) << 2)
            | ((self.band as u8) << 1)
            | ((self.channel >> 8) as u8 & 0x01);
        bytes[2] = (self.tx_address_width << 4) | self.rx_address_width;
        bytes[3] = self.rx_payload_width;
        bytes[4] = self.tx_payload_width;
        bytes[5..9].copy_from_slice(&self.rx_address.to_le_bytes());
        bytes[9] = ((self.crc_mode as u8) << 7)
            | ((self.crc_enabled as u8) << 6)
            | (self.crystal_frequency << 3)
            | ((self.clock_out_enabled as u8) << 2)
            | (self.clock_out_frequency as u8);
        Ok(bytes)
    }

    /// Decode a register image read back from the chip. Total: every 10 byte
    /// image maps to some `Config`.
    pub fn from_bytes(bytes: &[u8; CONFIG_LEN]) -> Self {
        Config {
            channel: u16::from(bytes[0]) | (u16::from(bytes[1] & 0x01) << 8),
            auto_retransmit: bytes[1] & (1 << 5) != 0,
            rx_reduced_power: bytes[1] & (1 << 4) != 0,
            output_power: OutputPower::from_value(bytes[1] >> 2),
            band: FrequencyBand::from_value(bytes[1] >> 1),
            tx_address_width: bytes[2] >> 4,
            rx_address_width: bytes[2] & 0x0F,
            rx_payload_width: bytes[3],
            tx_payload_width: bytes[4],
            rx_address: u32::from_le_bytes([bytes[5], bytes[6], bytes[7], bytes[8]]),
            crc_mode: CrcMode::from_value(bytes[9] >> 7),
            crc_enabled: bytes[9] & (1 << 6) != 0,
            crystal_frequency: (bytes[9] >> 3) & 0x07,
            clock_out_enabled: bytes[9] & (1 << 2) != 0,
            clock_out_frequency: ClockOutFrequency::from_value(bytes[9]),
        }
    }

    /// Carrier frequency in Hz for the programmed channel and band,
    /// fRF = (422.4 + CH_NO / 10) * (1 + HFREQ_PLL) MHz.
    pub fn frequency(&self) -> u32 {
        (422_400_000 + u32::from(self.channel) * 100_000) * (1 + self.band as u32)
    }
}
