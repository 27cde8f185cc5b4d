/// Widest payload the TX_PAYLOAD and RX_PAYLOAD registers hold.
pub const MAX_PAYLOAD_LENGTH: usize = 32;

/// The TX_ADDRESS register always carries four little-endian bytes.
pub const ADDRESS_LENGTH: usize = 4;

/// Errors types reported during nRF905 physical layer processing
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum RadioError {
    SPI,
    PowerEnable,
    ChipEnable,
    TxEnable,
    DataReady,
    AddressMatch,
    ChannelOutOfRange(u16),
    AddressWidthOutOfRange(u8),
    PayloadWidthOutOfRange(u8),
    CrystalOutOfRange(u8),
    PayloadSizeUnexpected(usize),
    ConfigMismatch,
    NotConfigured,
    TransmitTimeout,
}

/// The state of the radio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum RadioMode {
    /// TRX_CE low; TX_EN left as last driven. Lowest current with the crystal running.
    PowerDown,
    /// TRX_CE and TX_EN low; registers reachable over SPI.
    Idle,
    /// TRX_CE and TX_EN high; chip clocks the TX payload out.
    Transmit,
    /// TRX_CE high, TX_EN low; chip listens for an address match.
    Receive,
}

/// State of the PWR_UP line, independent of [`RadioMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum PowerMode {
    /// PWR_UP low. Register contents are retained but the chip is off the air.
    Down,
    /// PWR_UP high.
    Up,
}

/// SPI instruction set. Each transaction starts with one of these bytes while
/// the chip clocks its status register out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum OpCode {
    WriteConfig = 0x00,
    ReadConfig = 0x10,
    WriteTxPayload = 0x20,
    ReadTxPayload = 0x21,
    WriteTxAddress = 0x22,
    ReadTxAddress = 0x23,
    ReadRxPayload = 0x24,
}

impl OpCode {
    /// Instruction byte that opens the transaction.
    pub fn value(self) -> u8 {
        self as u8
    }
}
